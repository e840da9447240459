//! Naming conventions of `~/.aws/credentials`, where sections carry the bare
//! profile name.

pub const AWS_ACCESS_KEY_ID: &str = "aws_access_key_id";
pub const AWS_SECRET_ACCESS_KEY: &str = "aws_secret_access_key";
pub const AWS_SESSION_TOKEN: &str = "aws_session_token";

pub fn section_name(profile_name: &str) -> String {
    profile_name.to_string()
}

pub fn profile_name(section_name: &str) -> Option<&str> {
    let name = section_name.trim();
    (!name.is_empty()).then_some(name)
}
