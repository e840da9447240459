use crate::prompt;
use anyhow::Result;
use file_manager::current::CurrentProfile;
use file_manager::{AwsPaths, ProfileStore};

pub fn switch_profile(paths: &AwsPaths, profile: Option<String>) -> Result<()> {
    let mut store = ProfileStore::load(paths)?;

    let profile_name = match profile {
        Some(profile_name) => profile_name,
        None => {
            let profiles: Vec<String> = store.profiles().into_iter().collect();
            if profiles.is_empty() {
                println!("No AWS profiles found in configuration");
                return Ok(());
            }

            let current = CurrentProfile::from_env(paths).resolve();
            prompt::profile("Select AWS profile", &profiles, &current)?
        }
    };

    let switched = store.switch_to(&profile_name)?;

    println!("Switched to profile '{}'", profile_name);
    if !switched.credentials_copied {
        println!(
            "Profile '{}' has no credentials, default credentials were left as they were",
            profile_name
        );
    }

    Ok(())
}
