use crate::error::StoreError;
use directories::UserDirs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config";
const CREDENTIALS_FILE: &str = "credentials";
const MARKER_FILE: &str = ".gsd-current";

/// Locations of the files the profile store works with.
#[derive(Clone, Debug)]
pub struct AwsPaths {
    pub config: PathBuf,
    pub credentials: PathBuf,
    pub marker: PathBuf,
}

impl AwsPaths {
    pub fn from_home() -> Result<Self, StoreError> {
        match UserDirs::new() {
            Some(user_dirs) => Ok(Self::in_dir(user_dirs.home_dir().join(".aws"))),
            None => Err(StoreError::MissingHomeDir),
        }
    }

    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            config: dir.join(CONFIG_FILE),
            credentials: dir.join(CREDENTIALS_FILE),
            marker: dir.join(MARKER_FILE),
        }
    }
}
