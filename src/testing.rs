//! In-memory collaborators for unit tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::config::Credentials;
use crate::error::{Error, Result};
use crate::external::{
    ConfigScope, CredentialPrompt, GitBackend, HostEntry, KeyGenerator, KeyUploader,
    SshConfigWriter,
};

#[derive(Debug, Default)]
pub struct FakeGit {
    pub global: RefCell<BTreeMap<String, String>>,
    pub local: RefCell<BTreeMap<PathBuf, BTreeMap<String, String>>>,
    pub remotes: RefCell<BTreeMap<PathBuf, BTreeMap<String, String>>>,
    pub failing_remotes: RefCell<BTreeSet<String>>,
}

impl FakeGit {
    pub fn with_remotes(context: &Path, remotes: &[(&str, &str)]) -> Self {
        let git = Self::default();
        git.remotes.borrow_mut().insert(
            context.to_path_buf(),
            remotes
                .iter()
                .map(|(name, url)| (name.to_string(), url.to_string()))
                .collect(),
        );
        git
    }

    pub fn remote_url(&self, context: &Path, remote: &str) -> Option<String> {
        self.remotes.borrow().get(context)?.get(remote).cloned()
    }
}

impl GitBackend for FakeGit {
    fn config_get(&self, scope: ConfigScope<'_>, key: &str) -> Result<Option<String>> {
        Ok(match scope {
            ConfigScope::Global => self.global.borrow().get(key).cloned(),
            ConfigScope::Local(context) => self
                .local
                .borrow()
                .get(context)
                .and_then(|values| values.get(key).cloned()),
        })
    }

    fn config_set(&self, scope: ConfigScope<'_>, key: &str, value: &str) -> Result<()> {
        match scope {
            ConfigScope::Global => {
                self.global
                    .borrow_mut()
                    .insert(key.to_string(), value.to_string());
            }
            ConfigScope::Local(context) => {
                self.local
                    .borrow_mut()
                    .entry(context.to_path_buf())
                    .or_default()
                    .insert(key.to_string(), value.to_string());
            }
        }
        Ok(())
    }

    fn remotes(&self, context: &Path) -> Result<BTreeMap<String, String>> {
        Ok(self
            .remotes
            .borrow()
            .get(context)
            .cloned()
            .unwrap_or_default())
    }

    fn set_remote_url(&self, context: &Path, remote: &str, url: &str) -> Result<()> {
        if self.failing_remotes.borrow().contains(remote) {
            return Err(Error::ExternalCommandFailed {
                command: format!("git config remote.{remote}.url {url}"),
                detail: "exit status: 255".to_string(),
            });
        }
        self.remotes
            .borrow_mut()
            .entry(context.to_path_buf())
            .or_default()
            .insert(remote.to_string(), url.to_string());
        Ok(())
    }
}

pub struct FakePrompt(pub Credentials);

impl CredentialPrompt for FakePrompt {
    fn ask(&self) -> Result<Credentials> {
        Ok(self.0.clone())
    }
}

/// Records every key-material request instead of performing it.
#[derive(Debug, Default)]
pub struct FakeKeys {
    pub generated: RefCell<Vec<(PathBuf, String)>>,
    pub hosts: RefCell<Vec<HostEntry>>,
    pub uploads: RefCell<Vec<(String, PathBuf)>>,
    pub fail_upload: bool,
}

impl KeyGenerator for FakeKeys {
    fn generate(&self, private_key: &Path, key_type: &str) -> Result<PathBuf> {
        self.generated
            .borrow_mut()
            .push((private_key.to_path_buf(), key_type.to_string()));
        let mut public = private_key.as_os_str().to_owned();
        public.push(".pub");
        Ok(PathBuf::from(public))
    }
}

impl SshConfigWriter for FakeKeys {
    fn append_host(&self, host: &HostEntry) -> Result<()> {
        self.hosts.borrow_mut().push(host.clone());
        Ok(())
    }
}

impl KeyUploader for FakeKeys {
    fn upload(&self, credentials: &Credentials, public_key: &Path) -> Result<()> {
        if self.fail_upload {
            return Err(Error::ExternalCommandFailed {
                command: "heroku keys:add".to_string(),
                detail: "exit status: 1".to_string(),
            });
        }
        self.uploads
            .borrow_mut()
            .push((credentials.username.clone(), public_key.to_path_buf()));
        Ok(())
    }
}
