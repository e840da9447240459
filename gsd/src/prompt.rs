use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password, Select};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing::debug;

/// Status of a process stopped by SIGINT outside a secret prompt.
const INTERRUPTED_EXIT_CODE: i32 = 130;

static READING_SECRET: AtomicBool = AtomicBool::new(false);

/// The user backed out of a prompt. Nothing has been written at that point.
#[derive(Debug, Error)]
#[error("Operation cancelled")]
pub struct Cancelled;

fn cancelled_on_interrupt(err: dialoguer::Error) -> anyhow::Error {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => Cancelled.into(),
        other => other.into(),
    }
}

/// Marks a secret prompt as active until dropped.
struct SecretPrompt;

impl SecretPrompt {
    fn start() -> Self {
        READING_SECRET.store(true, Ordering::SeqCst);
        SecretPrompt
    }
}

impl Drop for SecretPrompt {
    fn drop(&mut self) {
        READING_SECRET.store(false, Ordering::SeqCst);
    }
}

fn interrupt_exit_code() -> i32 {
    if READING_SECRET.load(Ordering::SeqCst) {
        0
    } else {
        INTERRUPTED_EXIT_CODE
    }
}

/// Secrets are read in line mode, so Ctrl-C there arrives as SIGINT rather
/// than as an interrupted read. Treat it as a cancelled prompt.
pub fn cancel_secrets_on_ctrl_c() {
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_err() {
            debug!("Unable to listen for Ctrl-C");
            return;
        }

        let code = interrupt_exit_code();
        if code == 0 {
            println!();
            println!("{}", Cancelled);
        }
        std::process::exit(code);
    });
}

pub fn text(prompt: &str, initial: &str, allow_empty: bool) -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(allow_empty)
        .interact_text()
        .map_err(cancelled_on_interrupt)?;

    Ok(value.trim().to_string())
}

pub fn secret(prompt: &str) -> Result<String> {
    let _reading = SecretPrompt::start();
    let value = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map_err(cancelled_on_interrupt)?;

    Ok(value.trim().to_string())
}

pub fn select<T: ToString>(prompt: &str, items: &[T], default: usize) -> Result<usize> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact_opt()
        .map_err(cancelled_on_interrupt)?
        .ok_or_else(|| Cancelled.into())
}

pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact_opt()
        .map_err(cancelled_on_interrupt)?
        .ok_or_else(|| Cancelled.into())
}

/// Picks one of `profiles`, preselecting `current` when it is listed.
pub fn profile(prompt: &str, profiles: &[String], current: &str) -> Result<String> {
    let default = profiles.iter().position(|p| p == current).unwrap_or(0);
    let index = select(prompt, profiles, default)?;

    Ok(profiles[index].clone())
}
