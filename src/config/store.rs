//! Account storage.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use super::credentials::Credentials;
use super::profile_name::ProfileName;
use crate::error::{Error, Result};

/// Directory holding one YAML file per account, named after the account.
#[derive(Debug)]
pub struct ProfileStore {
    accounts_dir: PathBuf,
}

impl ProfileStore {
    pub fn new(accounts_dir: PathBuf) -> Self {
        Self { accounts_dir }
    }

    pub fn account_path(&self, name: &ProfileName) -> PathBuf {
        self.accounts_dir.join(name.as_str())
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.accounts_dir)?;
        Ok(())
    }

    pub fn exists(&self, name: &ProfileName) -> bool {
        self.account_path(name).is_file()
    }

    pub fn list(&self) -> Result<Vec<ProfileName>> {
        self.ensure_dir()?;

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.accounts_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file()
                && let Some(name) = entry.file_name().to_str()
                && let Ok(name) = ProfileName::new(name)
            {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }

    pub fn create(&self, name: &ProfileName, credentials: &Credentials) -> Result<()> {
        self.ensure_dir()?;

        if self.exists(name) {
            return Err(Error::AlreadyExists(name.to_string()));
        }

        let contents = serde_yaml::to_string(credentials)?;
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = match options.open(self.account_path(name)) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(Error::AlreadyExists(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        file.write_all(contents.as_bytes())?;
        tracing::debug!(account = %name, "wrote account file");
        Ok(())
    }

    pub fn read(&self, name: &ProfileName) -> Result<Credentials> {
        if !self.exists(name) {
            return Err(Error::NotFound(name.to_string()));
        }
        let content = fs::read_to_string(self.account_path(name))?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn delete(&self, name: &ProfileName) -> Result<()> {
        if !self.exists(name) {
            return Err(Error::NotFound(name.to_string()));
        }
        fs::remove_file(self.account_path(name))?;
        tracing::debug!(account = %name, "removed account file");
        Ok(())
    }
}
