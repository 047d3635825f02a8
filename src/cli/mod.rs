//! Command-line entry points.

mod account;
mod commands;
mod config;

use std::process::ExitCode;

use crate::accounts::{AccountCommands, Collaborators};
use crate::config::{ProfileStore, Settings, home_dir};
use crate::error::Result;
use crate::external::{CliKeyUploader, GitCli, SshConfigFile, SshKeygen, TerminalPrompt};

pub use commands::{Commands, ConfigCommands};

/// Runs one command; no command lists accounts.
///
/// Only `set` and `current` look at the working directory.
pub fn run(command: Option<Commands>) -> Result<ExitCode> {
    let base = Settings::base_dir()?;
    let settings = Settings::load(&base)?;
    let store = ProfileStore::new(Settings::accounts_dir(&base));
    let ssh_dir = home_dir()?.join(".ssh");

    let git = GitCli;
    let prompt = TerminalPrompt;
    let keygen = SshKeygen;
    let ssh_config = SshConfigFile::new(ssh_dir.join("config"));
    let uploader = CliKeyUploader::new(settings.upload_command.as_str());
    let commands = AccountCommands::new(
        &store,
        &settings,
        &ssh_dir,
        Collaborators {
            git: &git,
            prompt: &prompt,
            keygen: &keygen,
            ssh_config: &ssh_config,
            uploader: &uploader,
        },
    );

    match command.unwrap_or(Commands::List) {
        Commands::List => account::list_accounts(&commands),
        Commands::Add { name, auto } => account::add_account(&commands, name.as_deref(), auto),
        Commands::Remove { name } => account::remove_account(&commands, name.as_deref()),
        Commands::Set { name } => {
            let context = std::env::current_dir()?;
            account::set_account(&commands, &context, name.as_deref())
        }
        Commands::Default { name } => account::set_default_account(&commands, name.as_deref()),
        Commands::Current => account::show_current(&commands, &std::env::current_dir()?),
        Commands::Config(cmd) => config::run(&base, cmd),
    }
}
