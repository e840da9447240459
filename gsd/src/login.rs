use anyhow::Result;
use file_manager::current::CurrentProfile;
use file_manager::AwsPaths;

pub fn login_profile(paths: &AwsPaths, profile: Option<String>) -> Result<()> {
    let profile_name = profile.unwrap_or_else(|| CurrentProfile::from_env(paths).resolve());

    sso::login::login(&profile_name)?;

    println!("Logged in with profile '{}'", profile_name);

    Ok(())
}
