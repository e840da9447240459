use crate::aws_config::{
    OUTPUT, REGION, SSO_ACCOUNT_ID, SSO_KEYS, SSO_REGION, SSO_ROLE_NAME, SSO_START_URL,
};
use crate::aws_credentials::{AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, AWS_SESSION_TOKEN};
use crate::serde_support::Section;

/// Settings supplied for a profile by flags or prompts.
///
/// Empty values count as not supplied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub region: Option<String>,
    pub output: Option<String>,
    pub sso_start_url: Option<String>,
    pub sso_region: Option<String>,
    pub sso_account_id: Option<String>,
    pub sso_role_name: Option<String>,
    pub aws_access_key_id: Option<String>,
    pub aws_secret_access_key: Option<String>,
    pub aws_session_token: Option<String>,
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl ProfileFields {
    /// Pre-fills fields from a profile's existing sections.
    pub fn from_sections(config: Option<&Section>, credentials: Option<&Section>) -> Self {
        let config_value = |key: &str| config.and_then(|s| s.get(key)).cloned();
        let credentials_value = |key: &str| credentials.and_then(|s| s.get(key)).cloned();

        Self {
            region: config_value(REGION),
            output: config_value(OUTPUT),
            sso_start_url: config_value(SSO_START_URL),
            sso_region: config_value(SSO_REGION),
            sso_account_id: config_value(SSO_ACCOUNT_ID),
            sso_role_name: config_value(SSO_ROLE_NAME),
            aws_access_key_id: credentials_value(AWS_ACCESS_KEY_ID),
            aws_secret_access_key: credentials_value(AWS_SECRET_ACCESS_KEY),
            aws_session_token: credentials_value(AWS_SESSION_TOKEN),
        }
    }

    /// Supplied keys that belong in the config document.
    pub fn config_entries(&self) -> Vec<(&'static str, &str)> {
        [
            (REGION, &self.region),
            (OUTPUT, &self.output),
            (SSO_START_URL, &self.sso_start_url),
            (SSO_REGION, &self.sso_region),
            (SSO_ACCOUNT_ID, &self.sso_account_id),
            (SSO_ROLE_NAME, &self.sso_role_name),
        ]
        .into_iter()
        .filter_map(|(key, value)| supplied(value).map(|v| (key, v)))
        .collect()
    }

    /// Supplied keys that belong in the credentials document.
    pub fn credentials_entries(&self) -> Vec<(&'static str, &str)> {
        [
            (AWS_ACCESS_KEY_ID, &self.aws_access_key_id),
            (AWS_SECRET_ACCESS_KEY, &self.aws_secret_access_key),
            (AWS_SESSION_TOKEN, &self.aws_session_token),
        ]
        .into_iter()
        .filter_map(|(key, value)| supplied(value).map(|v| (key, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.config_entries().is_empty() && self.credentials_entries().is_empty()
    }

    pub fn touches_sso(&self) -> bool {
        self.config_entries()
            .iter()
            .any(|(key, _)| SSO_KEYS.contains(key))
    }

    pub fn touches_access_key(&self) -> bool {
        self.credentials_entries()
            .iter()
            .any(|(key, _)| *key == AWS_ACCESS_KEY_ID || *key == AWS_SECRET_ACCESS_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_not_supplied() {
        let fields = ProfileFields {
            region: Some("  ".to_string()),
            output: Some(" json ".to_string()),
            aws_session_token: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(fields.config_entries(), vec![(OUTPUT, "json")]);
        assert!(fields.credentials_entries().is_empty());
        assert!(!fields.is_empty());
        assert!(ProfileFields::default().is_empty());
    }

    #[test]
    fn splits_keys_by_document() {
        let fields = ProfileFields {
            region: Some("eu-west-1".to_string()),
            sso_role_name: Some("Admin".to_string()),
            aws_access_key_id: Some("AKIAEXAMPLE".to_string()),
            ..Default::default()
        };

        assert_eq!(
            fields.config_entries(),
            vec![(REGION, "eu-west-1"), (SSO_ROLE_NAME, "Admin")]
        );
        assert_eq!(
            fields.credentials_entries(),
            vec![(AWS_ACCESS_KEY_ID, "AKIAEXAMPLE")]
        );
        assert!(fields.touches_sso());
        assert!(fields.touches_access_key());
    }
}
