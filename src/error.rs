//! Error types for heroku-accounts.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Please specify an account name.")]
    NameRequired,

    #[error("Invalid account name: {0}")]
    InvalidName(String),

    #[error("That account already exists.")]
    AlreadyExists(String),

    #[error("That account does not exist.")]
    NotFound(String),

    #[error("`{command}` failed: {detail}")]
    ExternalCommandFailed { command: String, detail: String },

    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    #[error("Invalid value for {key}: {reason}")]
    InvalidSetting { key: String, reason: String },

    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("Could not read credentials: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse account file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse settings: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Failed to write settings: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
