//! Account verbs: list, add, remove, set and default.
//!
//! Each verb validates its name against the [`ProfileStore`] before touching
//! the selection or the working context. Output is left to the caller; the
//! verbs return what happened.

use std::path::{Path, PathBuf};

use crate::config::{Credentials, ProfileName, ProfileStore, Settings};
use crate::error::{Error, Result};
use crate::external::{
    CredentialPrompt, GitBackend, HostEntry, KeyGenerator, KeyUploader, SshConfigWriter,
};
use crate::remote::{BindReport, RemoteBinding};
use crate::selection::ActiveSelection;

const MANUAL_IDENTITY_FILE: &str = "/PATH/TO/PRIVATE/KEY";

/// External side effects the verbs delegate to.
pub struct Collaborators<'a> {
    pub git: &'a dyn GitBackend,
    pub prompt: &'a dyn CredentialPrompt,
    pub keygen: &'a dyn KeyGenerator,
    pub ssh_config: &'a dyn SshConfigWriter,
    pub uploader: &'a dyn KeyUploader,
}

#[derive(Debug)]
pub enum AddOutcome {
    /// Key generated, host alias appended and public key uploaded.
    Provisioned {
        account: ProfileName,
        host: HostEntry,
        public_key: PathBuf,
    },
    /// The user has to add `host` to their SSH config themselves.
    Manual {
        account: ProfileName,
        host: HostEntry,
    },
}

#[derive(Debug)]
pub struct SetOutcome {
    pub account: ProfileName,
    pub remotes: BindReport,
}

#[derive(Debug, PartialEq, Eq)]
pub struct CurrentAccount {
    pub name: String,
    /// `None` when the selected account no longer exists.
    pub username: Option<String>,
}

pub struct AccountCommands<'a> {
    store: &'a ProfileStore,
    settings: &'a Settings,
    ssh_dir: &'a Path,
    ext: Collaborators<'a>,
}

impl<'a> AccountCommands<'a> {
    pub fn new(
        store: &'a ProfileStore,
        settings: &'a Settings,
        ssh_dir: &'a Path,
        ext: Collaborators<'a>,
    ) -> Self {
        Self {
            store,
            settings,
            ssh_dir,
            ext,
        }
    }

    fn selection(&self) -> ActiveSelection<'_> {
        ActiveSelection::new(self.ext.git, &self.settings.git_config_key)
    }

    fn remotes(&self) -> RemoteBinding<'_> {
        RemoteBinding::new(self.ext.git, self.settings)
    }

    /// Resolves `name` to an account that is present in the store.
    fn existing(&self, name: Option<&str>) -> Result<ProfileName> {
        let name = ProfileName::from_arg(name)?;
        if !self.store.exists(&name) {
            return Err(Error::NotFound(name.to_string()));
        }
        Ok(name)
    }

    pub fn identity_file(&self, account: &ProfileName) -> PathBuf {
        self.ssh_dir
            .join(format!("identity.{}", self.settings.host_alias(account.as_str())))
    }

    fn host_entry(&self, account: &ProfileName, identity_file: String) -> HostEntry {
        HostEntry {
            alias: self.settings.host_alias(account.as_str()),
            host_name: self.settings.service_host.clone(),
            identity_file,
        }
    }

    pub fn list(&self) -> Result<Vec<ProfileName>> {
        self.store.list()
    }

    pub fn account(&self, name: Option<&str>) -> Result<Credentials> {
        let name = self.existing(name)?;
        self.store.read(&name)
    }

    pub fn add(&self, name: Option<&str>, auto: bool) -> Result<AddOutcome> {
        let account = ProfileName::from_arg(name)?;
        if self.store.exists(&account) {
            return Err(Error::AlreadyExists(account.to_string()));
        }

        let credentials = self.ext.prompt.ask()?;
        self.store.create(&account, &credentials)?;
        tracing::info!(account = %account, "account added");

        if !auto {
            let host = self.host_entry(&account, MANUAL_IDENTITY_FILE.to_string());
            return Ok(AddOutcome::Manual { account, host });
        }

        let private_key = self.identity_file(&account);
        let public_key = self
            .ext
            .keygen
            .generate(&private_key, &self.settings.key_type)?;

        let host = self.host_entry(&account, private_key.display().to_string());
        self.ext.ssh_config.append_host(&host)?;
        self.ext.uploader.upload(&credentials, &public_key)?;

        Ok(AddOutcome::Provisioned {
            account,
            host,
            public_key,
        })
    }

    pub fn remove(&self, name: Option<&str>) -> Result<ProfileName> {
        let account = self.existing(name)?;
        self.store.delete(&account)?;
        Ok(account)
    }

    /// Selects `name` for `context` and routes its service remotes through it.
    pub fn set(&self, context: &Path, name: Option<&str>) -> Result<SetOutcome> {
        let account = self.existing(name)?;
        self.selection()
            .set_for_context(context, account.as_str())?;
        let remotes = self.remotes().bind_all(context, &account)?;
        Ok(SetOutcome { account, remotes })
    }

    pub fn set_default(&self, name: Option<&str>) -> Result<ProfileName> {
        let account = self.existing(name)?;
        self.selection().set_global(account.as_str())?;
        Ok(account)
    }

    pub fn current(&self, context: &Path) -> Result<Option<CurrentAccount>> {
        let Some(name) = self.selection().get_effective(context)? else {
            return Ok(None);
        };
        let username = match self.account(Some(name.as_str())) {
            Ok(credentials) => Some(credentials.username),
            Err(Error::NotFound(_) | Error::InvalidName(_) | Error::NameRequired) => None,
            Err(e) => return Err(e),
        };
        Ok(Some(CurrentAccount { name, username }))
    }
}
