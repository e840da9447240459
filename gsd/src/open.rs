use crate::prompt;
use anyhow::{anyhow, Result};
use file_manager::aws_config::{DEFAULT_PROFILE, REGION};
use file_manager::current::CurrentProfile;
use file_manager::{AwsPaths, ProfileStore};
use sso::console::{self, Service, SERVICES};

fn select_service(service: Option<String>) -> Result<&'static Service> {
    match service {
        Some(name) => console::find_service(&name).ok_or_else(|| {
            anyhow!(
                "Service '{}' not found, expected one of: {}",
                name,
                SERVICES
                    .iter()
                    .map(|s| s.name)
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        }),
        None => {
            let names: Vec<&str> = SERVICES.iter().map(|s| s.name).collect();
            let index = prompt::select("Select AWS service", &names, 0)?;
            Ok(&SERVICES[index])
        }
    }
}

pub fn open_console(
    paths: &AwsPaths,
    service: Option<String>,
    profile: Option<String>,
    print: bool,
) -> Result<()> {
    let store = ProfileStore::load_lenient(paths);

    let service = select_service(service)?;

    let profile_name = match profile {
        Some(profile_name) => profile_name,
        None => {
            let mut profiles: Vec<String> = store.profiles().into_iter().collect();
            if !profiles.iter().any(|p| p == DEFAULT_PROFILE) {
                profiles.insert(0, DEFAULT_PROFILE.to_string());
            }
            let current = CurrentProfile::from_env(paths).resolve();
            prompt::profile("Select AWS profile", &profiles, &current)?
        }
    };

    let region = store
        .config_section(&profile_name)
        .and_then(|section| section.get(REGION))
        .map(String::as_str);
    let url = console::console_url(service, region);

    if print {
        println!("{}", url);
        return Ok(());
    }

    console::open_in_browser(&url)?;

    println!("Opening {} for profile '{}'", service.name, profile_name);

    Ok(())
}
