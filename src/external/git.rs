//! `git config` shell-out.

use std::collections::BTreeMap;
use std::path::Path;
use std::process::Command;

use super::{ConfigScope, GitBackend, check, output, run};
use crate::error::Result;

const REMOTE_URL_PATTERN: &str = r"^remote\..*\.url$";

/// Messages `git config --local` prints outside a repository, old and new wording.
const NOT_A_REPOSITORY: [&str; 2] = [
    "not in a git directory",
    "can only be used inside a git repository",
];

/// Talks to the `git` executable on `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitCli;

impl GitCli {
    fn command(context: &Path) -> Command {
        let mut cmd = Command::new("git");
        cmd.current_dir(context).env("LC_ALL", "C");
        cmd
    }

    fn config_command(scope: ConfigScope<'_>) -> Command {
        match scope {
            ConfigScope::Global => {
                let mut cmd = Command::new("git");
                cmd.env("LC_ALL", "C").args(["config", "--global"]);
                cmd
            }
            ConfigScope::Local(context) => {
                let mut cmd = Self::command(context);
                cmd.args(["config", "--local"]);
                cmd
            }
        }
    }
}

fn outside_repository(stderr: &[u8]) -> bool {
    let stderr = String::from_utf8_lossy(stderr);
    NOT_A_REPOSITORY.iter().any(|m| stderr.contains(m))
}

/// Parses `git config --get-regexp` output of remote URLs.
fn parse_remote_urls(stdout: &str) -> BTreeMap<String, String> {
    stdout
        .lines()
        .filter_map(|line| {
            let (key, url) = line.split_once(char::is_whitespace)?;
            let name = key.strip_prefix("remote.")?.strip_suffix(".url")?;
            Some((name.to_string(), url.trim().to_string()))
        })
        .collect()
}

impl GitBackend for GitCli {
    fn config_get(&self, scope: ConfigScope<'_>, key: &str) -> Result<Option<String>> {
        let mut cmd = Self::config_command(scope);
        cmd.args(["--get", key]);
        let out = output(&mut cmd)?;

        // Exit 1 means unset.
        if out.status.code() == Some(1) {
            tracing::debug!(key, ?scope, "no value");
            return Ok(None);
        }
        if matches!(scope, ConfigScope::Local(_)) && outside_repository(&out.stderr) {
            tracing::debug!(key, ?scope, "not a repository");
            return Ok(None);
        }
        let out = check(&cmd, out)?;

        let value = String::from_utf8_lossy(&out.stdout).trim().to_string();
        Ok((!value.is_empty()).then_some(value))
    }

    fn config_set(&self, scope: ConfigScope<'_>, key: &str, value: &str) -> Result<()> {
        let mut cmd = Self::config_command(scope);
        cmd.args([key, value]);
        run(&mut cmd)?;
        Ok(())
    }

    fn remotes(&self, context: &Path) -> Result<BTreeMap<String, String>> {
        let mut cmd = Self::config_command(ConfigScope::Local(context));
        cmd.args(["--get-regexp", REMOTE_URL_PATTERN]);
        let out = output(&mut cmd)?;

        if out.status.code() == Some(1) {
            return Ok(BTreeMap::new());
        }
        let out = check(&cmd, out)?;
        Ok(parse_remote_urls(&String::from_utf8_lossy(&out.stdout)))
    }

    fn set_remote_url(&self, context: &Path, remote: &str, url: &str) -> Result<()> {
        self.config_set(ConfigScope::Local(context), &format!("remote.{remote}.url"), url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_remote_urls() {
        let out = "remote.origin.url git@heroku.com:app1.git\n\
                   remote.staging.url git@heroku.com:app2.git\n";
        let remotes = parse_remote_urls(out);
        assert_eq!(remotes.len(), 2);
        assert_eq!(remotes["origin"], "git@heroku.com:app1.git");
        assert_eq!(remotes["staging"], "git@heroku.com:app2.git");
    }

    #[test]
    fn remote_names_may_contain_dots() {
        let remotes = parse_remote_urls("remote.prod.eu.url git@heroku.com:eu.git\n");
        assert_eq!(remotes["prod.eu"], "git@heroku.com:eu.git");
    }

    #[test]
    fn ignores_malformed_lines() {
        assert!(parse_remote_urls("garbage\nbranch.main.remote origin\n").is_empty());
    }

    #[test]
    fn scopes_select_flag() {
        let global = GitCli::config_command(ConfigScope::Global);
        let args: Vec<_> = global.get_args().collect();
        assert_eq!(args, ["config", "--global"]);

        let local = GitCli::config_command(ConfigScope::Local(Path::new("/tmp")));
        assert_eq!(local.get_current_dir(), Some(Path::new("/tmp")));
        let args: Vec<_> = local.get_args().collect();
        assert_eq!(args, ["config", "--local"]);
    }

    #[test]
    fn recognizes_not_a_repository_messages() {
        assert!(outside_repository(b"fatal: not in a git directory\n"));
        assert!(outside_repository(
            b"error: --local can only be used inside a git repository\n"
        ));
        assert!(!outside_repository(
            b"fatal: bad config line 1 in file .git/config\n"
        ));
    }

    fn git_available() -> bool {
        Command::new("git")
            .arg("--version")
            .output()
            .is_ok_and(|o| o.status.success())
    }

    fn init_repo(dir: &Path) {
        let status = Command::new("git")
            .args(["init", "-q"])
            .current_dir(dir)
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .status()
            .unwrap();
        assert!(status.success());
    }

    #[test]
    fn local_get_outside_repository_is_absent() {
        if !git_available() {
            return;
        }
        let temp = tempfile::TempDir::new().unwrap();
        let value = GitCli
            .config_get(ConfigScope::Local(temp.path()), "heroku.account")
            .unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn local_get_reads_repository_value() {
        if !git_available() {
            return;
        }
        let temp = tempfile::TempDir::new().unwrap();
        init_repo(temp.path());
        let scope = ConfigScope::Local(temp.path());

        assert_eq!(GitCli.config_get(scope, "heroku.account").unwrap(), None);
        GitCli.config_set(scope, "heroku.account", "work").unwrap();
        assert_eq!(
            GitCli.config_get(scope, "heroku.account").unwrap().as_deref(),
            Some("work")
        );
    }

    #[test]
    fn local_get_with_corrupt_config_fails() {
        if !git_available() {
            return;
        }
        let temp = tempfile::TempDir::new().unwrap();
        init_repo(temp.path());
        std::fs::write(
            temp.path().join(".git").join("config"),
            "[heroku\n account = work\n",
        )
        .unwrap();

        let result = GitCli.config_get(ConfigScope::Local(temp.path()), "heroku.account");
        assert!(matches!(
            result,
            Err(crate::error::Error::ExternalCommandFailed { .. })
        ));
    }
}
