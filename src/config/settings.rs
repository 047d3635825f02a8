//! User settings and on-disk locations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Overrides the base directory (normally `~/.heroku`).
pub const BASE_DIR_ENV: &str = "HEROKU_ACCOUNTS_DIR";

const SETTINGS_FILE: &str = "config.toml";
const ACCOUNTS_DIR: &str = "accounts";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Host that git remotes of the service point at.
    pub service_host: String,
    /// First label of the per-account SSH host alias (`<prefix>.<account>`).
    pub alias_prefix: String,
    /// Git config key recording the selected account.
    pub git_config_key: String,
    /// Key type passed to `ssh-keygen -t`.
    pub key_type: String,
    /// Program invoked as `<upload_command> keys:add <file>`.
    pub upload_command: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_host: "heroku.com".to_string(),
            alias_prefix: "heroku".to_string(),
            git_config_key: "heroku.account".to_string(),
            key_type: "rsa".to_string(),
            upload_command: "heroku".to_string(),
        }
    }
}

impl Settings {
    /// Resolves the base directory from the environment or the home directory.
    pub fn base_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(BASE_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        Ok(home_dir()?.join(".heroku"))
    }

    pub fn accounts_dir(base: &Path) -> PathBuf {
        base.join(ACCOUNTS_DIR)
    }

    pub fn settings_path(base: &Path) -> PathBuf {
        base.join(SETTINGS_FILE)
    }

    /// Loads settings, falling back to defaults when the file is absent.
    pub fn load(base: &Path) -> Result<Self> {
        let path = Self::settings_path(base);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self, base: &Path) -> Result<()> {
        std::fs::create_dir_all(base)?;
        std::fs::write(Self::settings_path(base), toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<&str> {
        let value = match key {
            "service_host" => &self.service_host,
            "alias_prefix" => &self.alias_prefix,
            "git_config_key" => &self.git_config_key,
            "key_type" => &self.key_type,
            "upload_command" => &self.upload_command,
            _ => return Err(Error::UnknownSetting(key.to_string())),
        };
        Ok(value)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(Error::InvalidSetting {
                key: key.to_string(),
                reason: "value must not be empty".to_string(),
            });
        }
        let slot = match key {
            "service_host" => &mut self.service_host,
            "alias_prefix" => &mut self.alias_prefix,
            "git_config_key" => &mut self.git_config_key,
            "key_type" => &mut self.key_type,
            "upload_command" => &mut self.upload_command,
            _ => return Err(Error::UnknownSetting(key.to_string())),
        };
        *slot = value.to_string();
        Ok(())
    }

    /// SSH host alias routing through `account`.
    pub fn host_alias(&self, account: &str) -> String {
        format!("{}.{account}", self.alias_prefix)
    }
}

pub fn home_dir() -> Result<PathBuf> {
    home::home_dir().ok_or(Error::NoHomeDir)
}
