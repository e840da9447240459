use crate::aws_config::{self, SSO_START_URL};
use crate::aws_credentials::{self, AWS_ACCESS_KEY_ID};
use crate::error::{DocumentKind, StoreError};
use crate::fields::ProfileFields;
use crate::paths::AwsPaths;
use crate::serde_support::{read_document, serialize_ordered, write_ordered, Document, Section};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, warn};

/// The config and credentials documents, loaded together and saved together.
#[derive(Debug)]
pub struct ProfileStore {
    paths: AwsPaths,
    pub(crate) config: Document,
    pub(crate) credentials: Document,
}

/// How a profile authenticates. Both may be set on the same profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProfileStyle {
    pub sso: bool,
    pub access_key: bool,
}

/// Profile names found in either document, without duplicates.
pub fn enumerate(config: &Document, credentials: &Document) -> BTreeSet<String> {
    let from_config = config
        .keys()
        .filter_map(|section| aws_config::profile_name(section));
    let from_credentials = credentials
        .keys()
        .filter_map(|section| aws_credentials::profile_name(section));

    from_config
        .chain(from_credentials)
        .map(str::to_owned)
        .collect()
}

impl ProfileStore {
    /// Loads both documents. Missing files are empty documents, anything
    /// else that stops a document from loading is an error.
    pub fn load(paths: &AwsPaths) -> Result<Self, StoreError> {
        let config = read_document(&paths.config, DocumentKind::Config)?;
        let credentials = read_document(&paths.credentials, DocumentKind::Credentials)?;

        debug!(
            "Loaded {} config and {} credentials sections",
            config.len(),
            credentials.len()
        );

        Ok(Self {
            paths: paths.clone(),
            config,
            credentials,
        })
    }

    /// Loads both documents for read-only use, a document that cannot be
    /// loaded is logged and treated as empty.
    pub fn load_lenient(paths: &AwsPaths) -> Self {
        let read_or_empty = |path: &Path, document: DocumentKind| {
            read_document(path, document).unwrap_or_else(|e| {
                warn!("{}, treating it as empty", e);
                Document::new()
            })
        };

        Self {
            paths: paths.clone(),
            config: read_or_empty(paths.config.as_path(), DocumentKind::Config),
            credentials: read_or_empty(paths.credentials.as_path(), DocumentKind::Credentials),
        }
    }

    pub fn paths(&self) -> &AwsPaths {
        &self.paths
    }

    pub fn profiles(&self) -> BTreeSet<String> {
        enumerate(&self.config, &self.credentials)
    }

    pub fn contains(&self, profile_name: &str) -> bool {
        self.config_section(profile_name).is_some()
            || self.credentials_section(profile_name).is_some()
    }

    pub fn config_section(&self, profile_name: &str) -> Option<&Section> {
        self.config.get(&aws_config::section_name(profile_name))
    }

    pub fn credentials_section(&self, profile_name: &str) -> Option<&Section> {
        self.credentials.get(&aws_credentials::section_name(profile_name))
    }

    pub fn fields(&self, profile_name: &str) -> Option<ProfileFields> {
        if !self.contains(profile_name) {
            return None;
        }

        Some(ProfileFields::from_sections(
            self.config_section(profile_name),
            self.credentials_section(profile_name),
        ))
    }

    pub fn style(&self, profile_name: &str) -> ProfileStyle {
        ProfileStyle {
            sso: self
                .config_section(profile_name)
                .is_some_and(|s| s.contains_key(SSO_START_URL)),
            access_key: self
                .credentials_section(profile_name)
                .is_some_and(|s| s.contains_key(AWS_ACCESS_KEY_ID)),
        }
    }

    /// Writes the documents flagged as changed, config before credentials.
    ///
    /// Both documents are serialized before either file is touched. A
    /// credentials failure after the config file was written is reported as
    /// [`StoreError::InconsistentWrite`].
    pub(crate) fn persist(
        &self,
        config_changed: bool,
        credentials_changed: bool,
    ) -> Result<(), StoreError> {
        let serialize = |document: &Document, kind: DocumentKind| {
            serialize_ordered(document).map_err(|source| StoreError::Write {
                document: kind,
                source,
            })
        };

        let config = if config_changed {
            Some(serialize(&self.config, DocumentKind::Config)?)
        } else {
            None
        };
        let credentials = if credentials_changed {
            Some(serialize(&self.credentials, DocumentKind::Credentials)?)
        } else {
            None
        };

        if let Some(bytes) = &config {
            write_ordered(&self.paths.config, bytes, DocumentKind::Config).map_err(|source| {
                StoreError::Write {
                    document: DocumentKind::Config,
                    source,
                }
            })?;
        }

        if let Some(bytes) = &credentials {
            write_ordered(&self.paths.credentials, bytes, DocumentKind::Credentials).map_err(
                |source| {
                    if config.is_some() {
                        StoreError::InconsistentWrite {
                            written: DocumentKind::Config,
                            failed: DocumentKind::Credentials,
                            source,
                        }
                    } else {
                        StoreError::Write {
                            document: DocumentKind::Credentials,
                            source,
                        }
                    }
                },
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn document(sections: &[&str]) -> Document {
        sections
            .iter()
            .map(|name| (name.to_string(), Section::new()))
            .collect()
    }

    #[test]
    fn empty_documents_have_no_profiles() {
        assert!(enumerate(&Document::new(), &Document::new()).is_empty());
    }

    #[test]
    fn same_profile_in_both_documents_is_listed_once() {
        let profiles = enumerate(&document(&["profile dev"]), &document(&["dev"]));

        assert_eq!(profiles, BTreeSet::from(["dev".to_string()]));
    }

    #[test]
    fn applies_each_document_naming_convention() {
        let config = document(&["default", "profile dev", "sso-session corp"]);
        let credentials = document(&["default", "ci"]);

        let profiles = enumerate(&config, &credentials);

        assert_eq!(
            profiles,
            BTreeSet::from(["ci".to_string(), "default".to_string(), "dev".to_string()])
        );
    }

    #[test]
    fn prefixed_default_section_is_not_listed() {
        let config = document(&["profile default", "profile dev"]);

        let profiles = enumerate(&config, &Document::new());

        assert_eq!(profiles, BTreeSet::from(["dev".to_string()]));
    }

    #[test]
    fn missing_files_load_as_no_profiles() {
        let dir = TempDir::new().unwrap();
        let paths = AwsPaths::in_dir(dir.path());

        let store = ProfileStore::load(&paths).unwrap();

        assert!(store.profiles().is_empty());
    }

    #[test]
    fn lenient_load_skips_a_malformed_document() {
        let dir = TempDir::new().unwrap();
        let paths = AwsPaths::in_dir(dir.path());
        fs::write(&paths.config, "[profile broken\n").unwrap();
        fs::write(&paths.credentials, "[ci]\naws_access_key_id=AKIA\n").unwrap();

        assert!(ProfileStore::load(&paths).is_err());

        let store = ProfileStore::load_lenient(&paths);
        assert_eq!(store.profiles(), BTreeSet::from(["ci".to_string()]));
    }

    #[test]
    fn reports_profile_style() {
        let dir = TempDir::new().unwrap();
        let paths = AwsPaths::in_dir(dir.path());
        fs::write(
            &paths.config,
            "[profile corp]\nsso_start_url=https://corp.awsapps.com/start\n",
        )
        .unwrap();
        fs::write(&paths.credentials, "[ci]\naws_access_key_id=AKIA\n").unwrap();

        let store = ProfileStore::load(&paths).unwrap();

        assert_eq!(
            store.style("corp"),
            ProfileStyle {
                sso: true,
                access_key: false
            }
        );
        assert_eq!(
            store.style("ci"),
            ProfileStyle {
                sso: false,
                access_key: true
            }
        );
    }
}
