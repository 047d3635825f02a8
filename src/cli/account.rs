//! Account command output.

use std::path::Path;
use std::process::ExitCode;

use colored::Colorize;

use crate::accounts::{AccountCommands, AddOutcome};
use crate::error::Result;

pub fn list_accounts(commands: &AccountCommands<'_>) -> Result<ExitCode> {
    let accounts = commands.list()?;
    if accounts.is_empty() {
        println!("No accounts found.");
    }
    for account in accounts {
        println!("{account}");
    }
    Ok(ExitCode::SUCCESS)
}

pub fn add_account(
    commands: &AccountCommands<'_>,
    name: Option<&str>,
    auto: bool,
) -> Result<ExitCode> {
    match commands.add(name, auto)? {
        AddOutcome::Provisioned {
            account,
            host,
            public_key,
        } => {
            println!("{} {}", "Account added:".green(), account);
            println!("Generated SSH key: {}", host.identity_file);
            println!("Added {} to ~/.ssh/config", host.alias);
            println!("Uploaded public key: {}", public_key.display());
        }
        AddOutcome::Manual { account, host } => {
            println!("{} {}", "Account added:".green(), account);
            println!();
            println!("Add the following to your ~/.ssh/config");
            println!();
            print!("{host}");
        }
    }
    Ok(ExitCode::SUCCESS)
}

pub fn remove_account(commands: &AccountCommands<'_>, name: Option<&str>) -> Result<ExitCode> {
    let account = commands.remove(name)?;
    println!("Account removed: {account}");
    Ok(ExitCode::SUCCESS)
}

pub fn set_account(
    commands: &AccountCommands<'_>,
    context: &Path,
    name: Option<&str>,
) -> Result<ExitCode> {
    let outcome = commands.set(context, name)?;
    println!("{} {}", "Account set:".green(), outcome.account);

    for (remote, address) in &outcome.remotes.rewritten {
        println!("  {remote} -> {address}");
    }
    for remote in &outcome.remotes.skipped {
        println!("  {remote} skipped (not a Heroku remote)");
    }
    for failure in &outcome.remotes.failures {
        eprintln!("  {} {}: {}", "failed".red(), failure.remote, failure.error);
    }

    if outcome.remotes.is_complete() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

pub fn set_default_account(
    commands: &AccountCommands<'_>,
    name: Option<&str>,
) -> Result<ExitCode> {
    let account = commands.set_default(name)?;
    println!("{} {}", "Default account set:".green(), account);
    Ok(ExitCode::SUCCESS)
}

pub fn show_current(commands: &AccountCommands<'_>, context: &Path) -> Result<ExitCode> {
    match commands.current(context)? {
        None => println!("No account selected."),
        Some(current) => match current.username {
            Some(username) => println!("{} ({username})", current.name),
            None => println!(
                "{} {}",
                current.name,
                "(account no longer exists)".yellow()
            ),
        },
    }
    Ok(ExitCode::SUCCESS)
}
