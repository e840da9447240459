use anyhow::{bail, Context, Result};
use std::io;
use std::process::{Command, Stdio};
use tracing::info;

const AWS_CLI: &str = "aws";

pub fn login_command(profile_name: &str) -> Command {
    let mut command = Command::new(AWS_CLI);
    command
        .args(["sso", "login", "--profile", profile_name])
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    command
}

/// Runs `aws sso login` for `profile_name`, the AWS CLI takes over the
/// terminal until it exits.
pub fn login(profile_name: &str) -> Result<()> {
    info!("Logging in with profile '{}'", profile_name);

    let status = match login_command(profile_name).status() {
        Ok(status) => status,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            bail!("AWS CLI is not installed or not found in PATH")
        }
        Err(e) => return Err(e).context("Failed to run the AWS CLI"),
    };

    if !status.success() {
        bail!("Login with profile '{}' failed ({})", profile_name, status);
    }

    info!("Login successful");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_the_profile_to_the_aws_cli() {
        let command = login_command("dev");

        assert_eq!(command.get_program(), AWS_CLI);
        assert_eq!(
            command.get_args().collect::<Vec<_>>(),
            ["sso", "login", "--profile", "dev"]
        );
    }
}
