use crate::prompt;
use anyhow::Result;
use file_manager::current::CurrentProfile;
use file_manager::fields::ProfileFields;
use file_manager::validation::ACCOUNT_ID_LENGTH;
use file_manager::{AwsPaths, ProfileStore};
use shared::args::{ConfigCommand, FieldArgs};
use tracing::info;

const DEFAULT_REGION: &str = "us-east-1";

pub fn run(command: ConfigCommand, paths: &AwsPaths) -> Result<()> {
    match command {
        ConfigCommand::Ls => list_profiles(paths),
        ConfigCommand::Add { profile, fields } => add_profile(paths, profile, &fields),
        ConfigCommand::Edit { profile, fields } => edit_profile(paths, profile, &fields),
        ConfigCommand::Remove { profile, yes } => remove_profile(paths, profile, yes),
    }
}

pub fn fields_from_args(args: &FieldArgs) -> ProfileFields {
    ProfileFields {
        region: args.region.clone(),
        output: args.output.clone(),
        sso_start_url: args.sso_start_url.clone(),
        sso_region: args.sso_region.clone(),
        sso_account_id: args.sso_account_id.clone(),
        sso_role_name: args.sso_role_name.clone(),
        aws_access_key_id: args.access_key_id.clone(),
        aws_secret_access_key: args.secret_access_key.clone(),
        aws_session_token: args.session_token.clone(),
    }
}

fn list_profiles(paths: &AwsPaths) -> Result<()> {
    let store = ProfileStore::load_lenient(paths);
    let profiles = store.profiles();

    if profiles.is_empty() {
        println!("No AWS profiles found in configuration");
        return Ok(());
    }

    let current = CurrentProfile::from_env(paths).resolve();

    for profile_name in profiles {
        let marker = if profile_name == current { "*" } else { " " };
        let style = store.style(&profile_name);
        let kind = match (style.sso, style.access_key) {
            (true, true) => " (sso, access key)",
            (true, false) => " (sso)",
            (false, true) => " (access key)",
            (false, false) => "",
        };
        println!("{} {}{}", marker, profile_name, kind);
    }

    Ok(())
}

/// Selects one of the existing profiles when `profile` was not given.
fn existing_profile(
    store: &ProfileStore,
    paths: &AwsPaths,
    profile: Option<String>,
    prompt_text: &str,
) -> Result<Option<String>> {
    if let Some(profile_name) = profile {
        return Ok(Some(profile_name));
    }

    let profiles: Vec<String> = store.profiles().into_iter().collect();
    if profiles.is_empty() {
        println!("No AWS profiles found in configuration");
        return Ok(None);
    }

    let current = CurrentProfile::from_env(paths).resolve();
    prompt::profile(prompt_text, &profiles, &current).map(Some)
}

fn add_profile(paths: &AwsPaths, profile: Option<String>, args: &FieldArgs) -> Result<()> {
    let mut store = ProfileStore::load(paths)?;

    let profile_name = match profile {
        Some(profile_name) => profile_name,
        None => prompt::text("Profile name", "", false)?,
    };

    let fields = if args.is_empty() {
        info!("Configuring profile: {}", profile_name);
        prompt_new_fields()?
    } else {
        fields_from_args(args)
    };

    store.add(&profile_name, &fields)?;

    println!("Added profile '{}'", profile_name);

    Ok(())
}

fn edit_profile(paths: &AwsPaths, profile: Option<String>, args: &FieldArgs) -> Result<()> {
    let mut store = ProfileStore::load(paths)?;

    let Some(profile_name) = existing_profile(&store, paths, profile, "Profile to edit")? else {
        return Ok(());
    };

    let fields = if args.is_empty() {
        let existing = store.fields(&profile_name).ok_or_else(|| {
            file_manager::StoreError::NotFound {
                profile: profile_name.clone(),
            }
        })?;
        info!("Configuring profile: {}", profile_name);
        prompt_changed_fields(&existing)?
    } else {
        fields_from_args(args)
    };

    if store.edit(&profile_name, &fields)? {
        println!("Updated profile '{}'", profile_name);
    } else {
        println!("Nothing to change for profile '{}'", profile_name);
    }

    Ok(())
}

fn remove_profile(paths: &AwsPaths, profile: Option<String>, yes: bool) -> Result<()> {
    let mut store = ProfileStore::load(paths)?;

    let Some(profile_name) = existing_profile(&store, paths, profile, "Profile to remove")? else {
        return Ok(());
    };

    if !store.contains(&profile_name) {
        return Err(file_manager::StoreError::NotFound {
            profile: profile_name,
        }
        .into());
    }

    if !yes && !prompt::confirm(&format!("Remove profile '{}'?", profile_name), false)? {
        println!("Profile '{}' kept", profile_name);
        return Ok(());
    }

    let removed = store.remove(&profile_name)?;

    println!("Removed profile '{}'", profile_name);
    if removed.marker_cleared {
        println!("It was the current profile, the current profile is now 'default'");
    }

    Ok(())
}

enum AuthStyle {
    Sso,
    AccessKey,
    None,
}

const AUTH_STYLES: [&str; 3] = ["SSO", "Access keys", "None"];

fn prompt_account_id(initial: &str) -> Result<String> {
    loop {
        let value = prompt::text(
            &format!("SSO Account ID ({} digits)", ACCOUNT_ID_LENGTH),
            initial,
            false,
        )?;

        if value.chars().count() == ACCOUNT_ID_LENGTH {
            break Ok(value);
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Collects every answer before anything is written.
fn prompt_new_fields() -> Result<ProfileFields> {
    let style = match prompt::select("Authentication", &AUTH_STYLES, 0)? {
        0 => AuthStyle::Sso,
        1 => AuthStyle::AccessKey,
        _ => AuthStyle::None,
    };

    let region = prompt::text("Region", DEFAULT_REGION, true)?;
    let output = prompt::text("Output format", "json", true)?;

    let mut fields = ProfileFields {
        region: non_empty(region.clone()),
        output: non_empty(output),
        ..Default::default()
    };

    match style {
        AuthStyle::Sso => {
            fields.sso_start_url = non_empty(prompt::text("SSO Start URL", "", false)?);
            fields.sso_region = non_empty(prompt::text("SSO Region", &region, false)?);
            fields.sso_account_id = non_empty(prompt_account_id("")?);
            fields.sso_role_name = non_empty(prompt::text("SSO Role Name", "", false)?);
        }
        AuthStyle::AccessKey => {
            fields.aws_access_key_id = non_empty(prompt::text("Access Key ID", "", false)?);
            fields.aws_secret_access_key = non_empty(prompt::secret("Secret Access Key")?);
            fields.aws_session_token = non_empty(prompt::secret("Session Token (optional)")?);
        }
        AuthStyle::None => {}
    }

    Ok(fields)
}

fn prompt_changed_fields(existing: &ProfileFields) -> Result<ProfileFields> {
    let current = |value: &Option<String>| value.clone().unwrap_or_default();

    let region = prompt::text("Region", &current(&existing.region), true)?;
    let output = prompt::text("Output format", &current(&existing.output), true)?;

    let mut fields = ProfileFields {
        region: non_empty(region),
        output: non_empty(output),
        ..Default::default()
    };

    if existing.sso_start_url.is_some() || prompt::confirm("Configure SSO?", false)? {
        fields.sso_start_url = non_empty(prompt::text(
            "SSO Start URL",
            &current(&existing.sso_start_url),
            false,
        )?);
        fields.sso_region = non_empty(prompt::text(
            "SSO Region",
            &current(&existing.sso_region),
            false,
        )?);
        fields.sso_account_id = non_empty(prompt_account_id(&current(&existing.sso_account_id))?);
        fields.sso_role_name = non_empty(prompt::text(
            "SSO Role Name",
            &current(&existing.sso_role_name),
            false,
        )?);
    }

    if existing.aws_access_key_id.is_some() || prompt::confirm("Configure access keys?", false)? {
        fields.aws_access_key_id = non_empty(prompt::text(
            "Access Key ID",
            &current(&existing.aws_access_key_id),
            false,
        )?);
        fields.aws_secret_access_key =
            non_empty(prompt::secret("Secret Access Key (empty keeps the current one)")?);
        fields.aws_session_token =
            non_empty(prompt::secret("Session Token (empty keeps the current one)")?);
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_flag_to_its_key() {
        let args = FieldArgs {
            region: Some("us-east-1".to_string()),
            access_key_id: Some("AKIAEXAMPLE".to_string()),
            secret_access_key: Some("secret".to_string()),
            ..Default::default()
        };

        let fields = fields_from_args(&args);

        assert_eq!(
            fields.config_entries(),
            vec![(file_manager::aws_config::REGION, "us-east-1")]
        );
        assert_eq!(fields.credentials_entries().len(), 2);
    }

    #[test]
    fn blank_answers_are_dropped() {
        assert_eq!(non_empty("  ".to_string()), None);
        assert_eq!(non_empty("json".to_string()), Some("json".to_string()));
    }
}
