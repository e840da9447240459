use crate::aws_config::{self, DEFAULT_PROFILE};
use crate::aws_credentials;
use crate::current::write_marker;
use crate::error::StoreError;
use crate::profile_store::ProfileStore;
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Switched {
    /// `false` when the profile has no credentials section, in which case the
    /// default credentials were left as they were.
    pub credentials_copied: bool,
}

impl ProfileStore {
    /// Makes `profile_name` the default profile.
    ///
    /// The `[default]` config section is replaced by a copy of the profile's
    /// config section. The `[default]` credentials section is replaced the
    /// same way when the profile has credentials, and left alone when it has
    /// none. The profile is then recorded in the marker file.
    pub fn switch_to(&mut self, profile_name: &str) -> Result<Switched, StoreError> {
        let source = self
            .config_section(profile_name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                profile: profile_name.to_string(),
            })?;
        let source_credentials = self.credentials_section(profile_name).cloned();

        let credentials_copied = source_credentials.is_some();

        if profile_name != DEFAULT_PROFILE {
            self.config.insert(aws_config::section_name(DEFAULT_PROFILE), source);
            if let Some(section) = source_credentials {
                self.credentials.insert(aws_credentials::section_name(DEFAULT_PROFILE), section);
            }
            self.persist(true, credentials_copied)?;
        }

        if !credentials_copied {
            warn!(
                "Profile '{}' has no credentials, default credentials left unchanged",
                profile_name
            );
        }

        write_marker(&self.paths().marker, profile_name)?;

        info!("Switched to profile '{}'", profile_name);

        Ok(Switched { credentials_copied })
    }
}
