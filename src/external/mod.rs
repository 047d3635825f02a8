//! Capabilities for side effects outside the account store.
//!
//! Every external program or file the commands touch sits behind one of the
//! traits below, so command logic can run against in-memory fakes.

mod git;
mod keys;
mod prompt;

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::config::Credentials;
use crate::error::{Error, Result};

pub use git::GitCli;
pub use keys::{CliKeyUploader, SshConfigFile, SshKeygen};
pub use prompt::TerminalPrompt;

/// Scope of a git configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigScope<'a> {
    /// `--global`, the user's configuration.
    Global,
    /// `--local`, the repository at the given working context.
    Local(&'a Path),
}

/// Reads and writes git configuration for a working context.
pub trait GitBackend {
    /// Returns `None` when the key is unset in `scope`.
    fn config_get(&self, scope: ConfigScope<'_>, key: &str) -> Result<Option<String>>;

    fn config_set(&self, scope: ConfigScope<'_>, key: &str, value: &str) -> Result<()>;

    /// All remotes of the working context, name to URL.
    fn remotes(&self, context: &Path) -> Result<BTreeMap<String, String>>;

    fn set_remote_url(&self, context: &Path, remote: &str, url: &str) -> Result<()>;
}

/// Collects credentials for a new account.
pub trait CredentialPrompt {
    fn ask(&self) -> Result<Credentials>;
}

/// Generates an SSH key pair.
pub trait KeyGenerator {
    /// Writes the private key to `private_key` and returns the public key path.
    fn generate(&self, private_key: &Path, key_type: &str) -> Result<PathBuf>;
}

/// Appends host entries to the user's SSH client configuration.
pub trait SshConfigWriter {
    fn append_host(&self, host: &HostEntry) -> Result<()>;
}

/// Registers a public key with the service account.
pub trait KeyUploader {
    fn upload(&self, credentials: &Credentials, public_key: &Path) -> Result<()>;
}

/// An SSH `Host` block routing an alias to the service with one identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    pub alias: String,
    pub host_name: String,
    pub identity_file: String,
}

impl fmt::Display for HostEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Host {}", self.alias)?;
        writeln!(f, "  HostName {}", self.host_name)?;
        writeln!(f, "  IdentityFile {}", self.identity_file)?;
        writeln!(f, "  IdentitiesOnly yes")
    }
}

fn describe(cmd: &Command) -> String {
    let mut out = cmd.get_program().to_string_lossy().into_owned();
    for arg in cmd.get_args() {
        out.push(' ');
        out.push_str(&arg.to_string_lossy());
    }
    out
}

/// Runs `cmd` to completion; only a failure to spawn is an error here.
fn output(cmd: &mut Command) -> Result<Output> {
    tracing::debug!(command = %describe(cmd), "running");
    cmd.output().map_err(|e| Error::ExternalCommandFailed {
        command: describe(cmd),
        detail: e.to_string(),
    })
}

/// Runs `cmd` and turns a nonzero exit status into an error.
fn run(cmd: &mut Command) -> Result<Output> {
    let out = output(cmd)?;
    check(cmd, out)
}

fn check(cmd: &Command, out: Output) -> Result<Output> {
    if out.status.success() {
        return Ok(out);
    }
    let stderr = String::from_utf8_lossy(&out.stderr).trim().to_string();
    let detail = if stderr.is_empty() {
        out.status.to_string()
    } else {
        format!("{} ({stderr})", out.status)
    };
    Err(Error::ExternalCommandFailed {
        command: describe(cmd),
        detail,
    })
}
