use crate::aws_config::{PROFILE_PREFIX, SSO_ACCOUNT_ID, SSO_KEYS};
use crate::aws_credentials::{AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY};
use crate::fields::ProfileFields;
use crate::serde_support::Section;
use thiserror::Error;

pub const ACCOUNT_ID_LENGTH: usize = 12;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("profile name {0}")]
    ProfileName(&'static str),
    #[error("incomplete SSO settings, missing {}", .0.join(", "))]
    IncompleteSso(Vec<&'static str>),
    #[error("sso_account_id must be exactly 12 characters, got {0}")]
    AccountIdLength(usize),
    #[error("incomplete access key, missing {0}")]
    IncompleteAccessKey(&'static str),
}

pub fn check_profile_name(name: &str) -> Option<ValidationIssue> {
    let reason = if name.trim().is_empty() {
        "must not be empty"
    } else if name != name.trim() {
        "must not start or end with whitespace"
    } else if name.contains(['[', ']', '\n', '\r']) {
        "must not contain brackets or line breaks"
    } else if name.starts_with(PROFILE_PREFIX) {
        "must not start with 'profile '"
    } else {
        return None;
    };

    Some(ValidationIssue::ProfileName(reason))
}

fn present(section: &Section, key: &str) -> bool {
    section.get(key).is_some_and(|v| !v.trim().is_empty())
}

/// Checks the sections a profile would end up with after `changes` are
/// applied. Rules only run for the groups of keys `changes` touches.
pub fn check_sections(
    changes: &ProfileFields,
    config: &Section,
    credentials: &Section,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if changes.touches_sso() {
        let missing: Vec<&'static str> = SSO_KEYS
            .into_iter()
            .filter(|key| !present(config, key))
            .collect();
        if !missing.is_empty() {
            issues.push(ValidationIssue::IncompleteSso(missing));
        }

        if let Some(account_id) = config.get(SSO_ACCOUNT_ID).map(|v| v.trim()) {
            let length = account_id.chars().count();
            if !account_id.is_empty() && length != ACCOUNT_ID_LENGTH {
                issues.push(ValidationIssue::AccountIdLength(length));
            }
        }
    }

    if changes.touches_access_key() {
        if !present(credentials, AWS_ACCESS_KEY_ID) {
            issues.push(ValidationIssue::IncompleteAccessKey(AWS_ACCESS_KEY_ID));
        }
        if !present(credentials, AWS_SECRET_ACCESS_KEY) {
            issues.push(ValidationIssue::IncompleteAccessKey(AWS_SECRET_ACCESS_KEY));
        }
    }

    issues
}
