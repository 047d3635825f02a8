//! Settings commands.

use std::path::Path;
use std::process::ExitCode;

use super::ConfigCommands;
use crate::config::Settings;
use crate::error::Result;

pub fn run(base: &Path, command: ConfigCommands) -> Result<ExitCode> {
    match command {
        ConfigCommands::Get { key } => {
            let settings = Settings::load(base)?;
            println!("{}", settings.get(&key)?);
        }
        ConfigCommands::Set { key, value } => {
            let mut settings = Settings::load(base)?;
            settings.set(&key, &value)?;
            settings.save(base)?;
            println!("{key} = {}", settings.get(&key)?);
        }
        ConfigCommands::Path => {
            println!("Settings: {}", Settings::settings_path(base).display());
            println!("Accounts: {}", Settings::accounts_dir(base).display());
        }
    }
    Ok(ExitCode::SUCCESS)
}
