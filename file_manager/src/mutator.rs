use crate::aws_config;
use crate::aws_credentials;
use crate::current::{clear_marker, read_marker};
use crate::error::StoreError;
use crate::fields::ProfileFields;
use crate::profile_store::ProfileStore;
use crate::serde_support::Section;
use crate::validation::{check_profile_name, check_sections};
use tracing::info;

/// Which documents held the removed profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Removed {
    pub config: bool,
    pub credentials: bool,
    pub marker_cleared: bool,
}

fn merged(existing: Option<&Section>, entries: &[(&'static str, &str)]) -> Section {
    let mut section = existing.cloned().unwrap_or_default();
    for (key, value) in entries {
        section.insert(key.to_string(), value.to_string());
    }
    section
}

impl ProfileStore {
    /// Creates `profile_name` from `fields`.
    ///
    /// The config section is always created so the profile can be listed,
    /// the credentials section only when a credentials key is supplied.
    pub fn add(&mut self, profile_name: &str, fields: &ProfileFields) -> Result<(), StoreError> {
        if let Some(issue) = check_profile_name(profile_name) {
            return Err(StoreError::Validation(vec![issue]));
        }

        if self.contains(profile_name) {
            return Err(StoreError::Duplicate {
                profile: profile_name.to_string(),
            });
        }

        let config_entries = fields.config_entries();
        let credentials_entries = fields.credentials_entries();
        let config = merged(None, &config_entries);
        let credentials = merged(None, &credentials_entries);

        let issues = check_sections(fields, &config, &credentials);
        if !issues.is_empty() {
            return Err(StoreError::Validation(issues));
        }

        let credentials_changed = !credentials_entries.is_empty();

        self.config
            .insert(aws_config::section_name(profile_name), config);
        if credentials_changed {
            self.credentials
                .insert(aws_credentials::section_name(profile_name), credentials);
        }

        self.persist(true, credentials_changed)?;

        info!("Profile '{}' added", profile_name);

        Ok(())
    }

    /// Overwrites the keys supplied in `fields`, every other key is kept.
    ///
    /// Returns `false` when `fields` has nothing to change.
    pub fn edit(&mut self, profile_name: &str, fields: &ProfileFields) -> Result<bool, StoreError> {
        if !self.contains(profile_name) {
            return Err(StoreError::NotFound {
                profile: profile_name.to_string(),
            });
        }

        let config_entries = fields.config_entries();
        let credentials_entries = fields.credentials_entries();
        let config = merged(self.config_section(profile_name), &config_entries);
        let credentials = merged(self.credentials_section(profile_name), &credentials_entries);

        let issues = check_sections(fields, &config, &credentials);
        if !issues.is_empty() {
            return Err(StoreError::Validation(issues));
        }

        let config_changed = !config_entries.is_empty();
        let credentials_changed = !credentials_entries.is_empty();
        if !config_changed && !credentials_changed {
            return Ok(false);
        }

        if config_changed {
            self.config
                .insert(aws_config::section_name(profile_name), config);
        }
        if credentials_changed {
            self.credentials
                .insert(aws_credentials::section_name(profile_name), credentials);
        }

        self.persist(config_changed, credentials_changed)?;

        info!("Profile '{}' updated", profile_name);

        Ok(true)
    }

    /// Deletes the profile from whichever documents hold it. Clears the
    /// current profile marker when it names the removed profile.
    pub fn remove(&mut self, profile_name: &str) -> Result<Removed, StoreError> {
        if !self.contains(profile_name) {
            return Err(StoreError::NotFound {
                profile: profile_name.to_string(),
            });
        }

        let mut removed = Removed {
            config: self
                .config
                .remove(&aws_config::section_name(profile_name))
                .is_some(),
            credentials: self
                .credentials
                .remove(&aws_credentials::section_name(profile_name))
                .is_some(),
            marker_cleared: false,
        };

        self.persist(removed.config, removed.credentials)?;

        info!("Profile '{}' removed", profile_name);

        let marker = &self.paths().marker;
        if read_marker(marker).as_deref() == Some(profile_name) {
            removed.marker_cleared = clear_marker(marker)?;
        }

        Ok(removed)
    }
}
