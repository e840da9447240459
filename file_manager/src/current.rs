use crate::aws_config::DEFAULT_PROFILE;
use crate::error::StoreError;
use crate::paths::AwsPaths;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const PROFILE_ENV: &str = "AWS_PROFILE";

/// Works out which profile commands act on when none is given.
///
/// Precedence: `AWS_PROFILE`, then the marker file written by `switch`,
/// then `default`.
#[derive(Clone, Debug)]
pub struct CurrentProfile {
    marker: PathBuf,
    env_override: Option<String>,
}

impl CurrentProfile {
    pub fn from_env(paths: &AwsPaths) -> Self {
        Self::new(paths, std::env::var(PROFILE_ENV).ok())
    }

    pub fn new(paths: &AwsPaths, env_override: Option<String>) -> Self {
        Self {
            marker: paths.marker.clone(),
            env_override,
        }
    }

    pub fn resolve(&self) -> String {
        if let Some(profile_name) = self
            .env_override
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            debug!("Current profile '{}' taken from {}", profile_name, PROFILE_ENV);
            return profile_name.to_string();
        }

        self.marked()
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string())
    }

    /// The profile named by the marker file, if it can be read.
    pub fn marked(&self) -> Option<String> {
        read_marker(&self.marker)
    }
}

pub fn read_marker(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let profile_name = contents.trim();
            (!profile_name.is_empty()).then(|| profile_name.to_string())
        }
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                debug!("Unable to read {}: {}", path.display(), e);
            }
            None
        }
    }
}

pub fn write_marker(path: &Path, profile_name: &str) -> Result<(), StoreError> {
    let marker_error = |source| StoreError::Marker {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(marker_error)?;
    }

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path).map_err(marker_error)?;
    file.write_all(profile_name.as_bytes())
        .map_err(marker_error)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(marker_error)?;
    }

    Ok(())
}

/// Removes the marker file, returns whether there was one.
pub fn clear_marker(path: &Path) -> Result<bool, StoreError> {
    match fs::remove_file(path) {
        Ok(()) => {
            info!("Current profile marker cleared");
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(StoreError::Marker {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let paths = AwsPaths::in_dir(dir.path());

        assert_eq!(CurrentProfile::new(&paths, None).resolve(), "default");
        assert_eq!(
            CurrentProfile::new(&paths, Some("  ".to_string())).resolve(),
            "default"
        );
    }

    #[test]
    fn marker_is_trimmed() {
        let dir = TempDir::new().unwrap();
        let paths = AwsPaths::in_dir(dir.path());
        fs::write(&paths.marker, "staging\n").unwrap();

        assert_eq!(CurrentProfile::new(&paths, None).resolve(), "staging");
    }

    #[test]
    fn environment_wins_over_marker() {
        let dir = TempDir::new().unwrap();
        let paths = AwsPaths::in_dir(dir.path());
        write_marker(&paths.marker, "staging").unwrap();

        let current = CurrentProfile::new(&paths, Some("prod".to_string()));

        assert_eq!(current.resolve(), "prod");
        assert_eq!(current.marked().as_deref(), Some("staging"));
    }

    #[cfg(unix)]
    #[test]
    fn marker_is_private_to_its_owner() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let paths = AwsPaths::in_dir(dir.path());

        write_marker(&paths.marker, "dev").unwrap();

        let mode = fs::metadata(&paths.marker).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(fs::read_to_string(&paths.marker).unwrap(), "dev");
    }

    #[test]
    fn clearing_a_missing_marker_is_fine() {
        let dir = TempDir::new().unwrap();
        let paths = AwsPaths::in_dir(dir.path());

        assert!(!clear_marker(&paths.marker).unwrap());

        write_marker(&paths.marker, "dev").unwrap();
        assert!(clear_marker(&paths.marker).unwrap());
        assert!(!paths.marker.exists());
    }
}
