use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gsd", author, version, about = "AWS profile management assistant", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enables verbose logging to the console
    #[arg(short, long, global = true, default_value_t = false)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage the profiles in the AWS config and credentials files
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Make a profile the default profile
    Switch {
        /// The profile to switch to, prompts when omitted
        profile: Option<String>,
    },
    /// Show the account and identity behind the current profile
    Whoami {
        /// Profile to use instead of the current one
        #[arg(short, long)]
        profile: Option<String>,

        /// Prints the identity as JSON
        #[arg(short, long, default_value_t = false)]
        json: bool,
    },
    /// Open the AWS console or one of its services in the browser
    Open {
        /// Service to open, e.g. "EC2", prompts when omitted
        #[arg(short, long)]
        service: Option<String>,

        /// Profile whose region is used, prompts when omitted
        #[arg(short, long)]
        profile: Option<String>,

        /// Prints the URL instead of opening it
        #[arg(long, default_value_t = false)]
        print: bool,
    },
    /// Run `aws sso login` for the current profile
    Login {
        /// Profile to log in with instead of the current one
        #[arg(short, long)]
        profile: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// List the configured profiles
    #[command(alias = "list")]
    Ls,
    /// Add a profile, prompts for its settings when no setting flags are given
    Add {
        profile: Option<String>,

        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Change a profile, prompts for its settings when no setting flags are given
    Edit {
        profile: Option<String>,

        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Remove a profile from both files
    #[command(alias = "rm")]
    Remove {
        profile: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long, default_value_t = false)]
        yes: bool,
    },
}

#[derive(clap::Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// Default region of the profile
    #[arg(long)]
    pub region: Option<String>,

    /// Default output format (json, yaml, text, table)
    #[arg(long)]
    pub output: Option<String>,

    /// AWS access portal URL
    #[arg(long)]
    pub sso_start_url: Option<String>,

    /// Region of the IAM Identity Center instance
    #[arg(long)]
    pub sso_region: Option<String>,

    /// 12 digit account ID
    #[arg(long)]
    pub sso_account_id: Option<String>,

    /// Permission set to assume
    #[arg(long)]
    pub sso_role_name: Option<String>,

    #[arg(long)]
    pub access_key_id: Option<String>,

    #[arg(long)]
    pub secret_access_key: Option<String>,

    #[arg(long)]
    pub session_token: Option<String>,
}

impl FieldArgs {
    pub fn is_empty(&self) -> bool {
        [
            &self.region,
            &self.output,
            &self.sso_start_url,
            &self.sso_region,
            &self.sso_account_id,
            &self.sso_role_name,
            &self.access_key_id,
            &self.secret_access_key,
            &self.session_token,
        ]
        .iter()
        .all(|value| value.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_config_add_flags() {
        let args = Args::parse_from([
            "gsd",
            "config",
            "add",
            "dev",
            "--region",
            "us-east-1",
            "--sso-account-id",
            "123456789012",
        ]);

        match args.command {
            Command::Config(ConfigCommand::Add { profile, fields }) => {
                assert_eq!(profile.as_deref(), Some("dev"));
                assert_eq!(fields.region.as_deref(), Some("us-east-1"));
                assert_eq!(fields.sso_account_id.as_deref(), Some("123456789012"));
                assert!(!fields.is_empty());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn debug_is_global() {
        let args = Args::parse_from(["gsd", "switch", "dev", "--debug"]);

        assert!(args.debug);
        assert!(matches!(args.command, Command::Switch { profile: Some(p) } if p == "dev"));
    }

    #[test]
    fn no_flags_means_prompt() {
        let args = Args::parse_from(["gsd", "config", "edit"]);

        match args.command {
            Command::Config(ConfigCommand::Edit { profile, fields }) => {
                assert!(profile.is_none());
                assert!(fields.is_empty());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
