//! Pointing a repository's service remotes at an account's host alias.

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::{ProfileName, Settings};
use crate::error::{Error, Result};
use crate::external::GitBackend;

const SUFFIX: &str = ".git";

/// A remote whose rewrite failed. Other remotes are still attempted.
#[derive(Debug)]
pub struct RemoteFailure {
    pub remote: String,
    pub error: Error,
}

/// Outcome of rebinding every remote in a working context.
#[derive(Debug, Default)]
pub struct BindReport {
    /// Remote name and the address it now has.
    pub rewritten: Vec<(String, String)>,
    /// Remotes that do not point at the service.
    pub skipped: Vec<String>,
    pub failures: Vec<RemoteFailure>,
}

impl BindReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct RemoteBinding<'a> {
    git: &'a dyn GitBackend,
    settings: &'a Settings,
}

impl<'a> RemoteBinding<'a> {
    pub fn new(git: &'a dyn GitBackend, settings: &'a Settings) -> Self {
        Self { git, settings }
    }

    pub fn discover_remotes(&self, context: &Path) -> Result<BTreeMap<String, String>> {
        self.git.remotes(context)
    }

    /// Extracts the repository identifier from a remote address that targets
    /// the service, either directly or through an account host alias.
    pub fn repo_identifier(&self, address: &str) -> Option<String> {
        let https_prefix = format!("https://git.{}/", self.settings.service_host);
        let path = if let Some(path) = address.strip_prefix(&https_prefix) {
            path
        } else {
            if address.contains("://") {
                return None;
            }
            let (user_host, path) = address.split_once(':')?;
            let host = user_host.rsplit_once('@').map_or(user_host, |(_, h)| h);
            if !self.is_service_host(host) {
                return None;
            }
            path.trim_start_matches('/')
        };

        let repo = path.strip_suffix(SUFFIX).unwrap_or(path);
        if repo.is_empty() || repo.contains('/') {
            return None;
        }
        Some(repo.to_string())
    }

    fn is_service_host(&self, host: &str) -> bool {
        let prefix = &self.settings.alias_prefix;
        host == self.settings.service_host
            || host
                .strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.starts_with('.') && rest.len() > 1)
    }

    /// `git@<alias_prefix>.<account>:<repo>.git`
    pub fn canonical_address(&self, account: &ProfileName, repo: &str) -> String {
        format!(
            "git@{}:{repo}{SUFFIX}",
            self.settings.host_alias(account.as_str())
        )
    }

    pub fn rewrite_remote(
        &self,
        context: &Path,
        remote: &str,
        account: &ProfileName,
        repo: &str,
    ) -> Result<String> {
        let address = self.canonical_address(account, repo);
        self.git.set_remote_url(context, remote, &address)?;
        tracing::info!(remote, address = %address, "rewrote remote");
        Ok(address)
    }

    /// Rewrites every service remote in `context`, continuing past failures.
    pub fn bind_all(&self, context: &Path, account: &ProfileName) -> Result<BindReport> {
        let mut report = BindReport::default();

        for (remote, address) in self.discover_remotes(context)? {
            let Some(repo) = self.repo_identifier(&address) else {
                tracing::debug!(remote = %remote, address = %address, "not a service remote");
                report.skipped.push(remote);
                continue;
            };

            match self.rewrite_remote(context, &remote, account, &repo) {
                Ok(address) => report.rewritten.push((remote, address)),
                Err(error) => {
                    tracing::warn!(remote = %remote, %error, "remote rewrite failed");
                    report.failures.push(RemoteFailure { remote, error });
                }
            }
        }

        Ok(report)
    }
}
