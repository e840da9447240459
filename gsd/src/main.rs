use crate::prompt::Cancelled;
use clap::Parser;
use file_manager::AwsPaths;
use shared::args::{Args, Command};
use tracing_subscriber::EnvFilter;

mod config;
mod json;
mod login;
mod open;
mod prompt;
mod switch;
mod whoami;

const LOG_FILTER: &str = "warn,gsd=info,file_manager=info,sso=info";
const DEBUG_LOG_FILTER: &str = "debug,hyper=info,rustls=info,aws_smithy_runtime=info";

/// Required due to the timer being removed outside of debug
/// SubscriberBuilder<_, _, _, fn() -> Stderr> vs SubscriberBuilder<_, (), _, fn() -> Stderr>
#[macro_export]
macro_rules! init_tracing {
    ($builder:expr, $debug:expr) => {
        let logging = $builder;

        logging
            .with_target($debug)
            .with_line_number($debug)
            .with_env_filter(EnvFilter::from(if $debug {
                DEBUG_LOG_FILTER
            } else {
                LOG_FILTER
            }))
            .init();
    };
}

async fn run(command: Command, paths: &AwsPaths) -> anyhow::Result<()> {
    match command {
        Command::Config(command) => {
            prompt::cancel_secrets_on_ctrl_c();
            config::run(command, paths)
        }
        Command::Switch { profile } => switch::switch_profile(paths, profile),
        Command::Whoami { profile, json } => whoami::whoami(paths, profile, json).await,
        Command::Open {
            service,
            profile,
            print,
        } => open::open_console(paths, service, profile, print),
        Command::Login { profile } => login::login_profile(paths, profile),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.debug {
        let logging = tracing_subscriber::fmt().with_writer(std::io::stderr);
        init_tracing!(logging, true);
    } else {
        let logging = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .without_time();
        init_tracing!(logging, false);
    }

    let paths = AwsPaths::from_home()?;

    match run(args.command, &paths).await {
        Err(e) if e.is::<Cancelled>() => {
            println!("{}", Cancelled);
            Ok(())
        }
        result => result,
    }
}
