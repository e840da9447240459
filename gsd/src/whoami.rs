use crate::json::JsonIdentity;
use anyhow::Result;
use file_manager::current::CurrentProfile;
use file_manager::AwsPaths;

pub async fn whoami(paths: &AwsPaths, profile: Option<String>, json: bool) -> Result<()> {
    let profile_name = profile.unwrap_or_else(|| CurrentProfile::from_env(paths).resolve());

    let identity = sso::identity::caller_identity(&profile_name).await?;

    if json {
        let json_identity = JsonIdentity::convert(profile_name, identity);
        let json = serde_json::to_string_pretty(&json_identity)?;
        println!("{}", json);
    } else {
        println!("Profile: {}", profile_name);
        println!("Account: {}", identity.account);
        println!("ARN:     {}", identity.arn);
        println!("User ID: {}", identity.user_id);
    }

    Ok(())
}
