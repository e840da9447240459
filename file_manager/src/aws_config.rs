//! Naming conventions of `~/.aws/config`.
//!
//! Named profiles live under `[profile <name>]`, the default profile under
//! `[default]`.

pub const DEFAULT_PROFILE: &str = "default";
pub const PROFILE_PREFIX: &str = "profile ";

pub const REGION: &str = "region";
pub const OUTPUT: &str = "output";
pub const SSO_START_URL: &str = "sso_start_url";
pub const SSO_REGION: &str = "sso_region";
pub const SSO_ACCOUNT_ID: &str = "sso_account_id";
pub const SSO_ROLE_NAME: &str = "sso_role_name";

pub const SSO_KEYS: [&str; 4] = [SSO_START_URL, SSO_REGION, SSO_ACCOUNT_ID, SSO_ROLE_NAME];

pub fn section_name(profile_name: &str) -> String {
    if profile_name == DEFAULT_PROFILE {
        profile_name.to_string()
    } else {
        format!("{}{}", PROFILE_PREFIX, profile_name)
    }
}

/// The profile a config section belongs to, `None` for sections that are
/// not profiles (`sso-session`, `services`, ...).
pub fn profile_name(section_name: &str) -> Option<&str> {
    if section_name == DEFAULT_PROFILE {
        return Some(DEFAULT_PROFILE);
    }

    section_name
        .strip_prefix(PROFILE_PREFIX)
        .map(str::trim)
        .filter(|name| !name.is_empty() && *name != DEFAULT_PROFILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_prefix() {
        assert_eq!(section_name("default"), "default");
        assert_eq!(section_name("dev"), "profile dev");
    }

    #[test]
    fn strips_profile_prefix() {
        assert_eq!(profile_name("profile dev"), Some("dev"));
        assert_eq!(profile_name("default"), Some("default"));
        assert_eq!(profile_name("profile default"), None);
        assert_eq!(profile_name("sso-session corp"), None);
        assert_eq!(profile_name("profile "), None);
    }
}
