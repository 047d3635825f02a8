//! SSH key material: generation, host aliases and upload.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::{HostEntry, KeyGenerator, KeyUploader, SshConfigWriter, run};
use crate::config::Credentials;
use crate::error::Result;

/// Environment variable the service CLI reads its API token from.
const API_KEY_ENV: &str = "HEROKU_API_KEY";

fn public_key_path(private_key: &Path) -> PathBuf {
    let mut path = private_key.as_os_str().to_owned();
    path.push(".pub");
    PathBuf::from(path)
}

/// Runs `ssh-keygen` with an empty passphrase.
#[derive(Debug, Default, Clone, Copy)]
pub struct SshKeygen;

impl KeyGenerator for SshKeygen {
    fn generate(&self, private_key: &Path, key_type: &str) -> Result<PathBuf> {
        if let Some(parent) = private_key.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut cmd = Command::new("ssh-keygen");
        cmd.args(["-t", key_type, "-N", "", "-f"]).arg(private_key);
        run(&mut cmd)?;
        Ok(public_key_path(private_key))
    }
}

/// Appends to an SSH client configuration file, usually `~/.ssh/config`.
#[derive(Debug, Clone)]
pub struct SshConfigFile {
    path: PathBuf,
}

impl SshConfigFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SshConfigWriter for SshConfigFile {
    fn append_host(&self, host: &HostEntry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        write!(file, "\n{host}")?;
        tracing::info!(alias = %host.alias, path = %self.path.display(), "appended ssh host");
        Ok(())
    }
}

/// Uploads through the service CLI: `<program> keys:add <public key>`.
#[derive(Debug, Clone)]
pub struct CliKeyUploader {
    program: String,
}

impl CliKeyUploader {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl KeyUploader for CliKeyUploader {
    fn upload(&self, credentials: &Credentials, public_key: &Path) -> Result<()> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("keys:add")
            .arg(public_key)
            .env(API_KEY_ENV, &credentials.password);
        run(&mut cmd)?;
        Ok(())
    }
}
