//! Which account is active, globally and per working context.
//!
//! The selection is a single git config value. A value in the repository's
//! local config overrides the one in the user's global config. Names are
//! stored as given: checking that the account exists is left to the caller,
//! so a selection may outlive the account it names.

use std::path::Path;

use crate::error::Result;
use crate::external::{ConfigScope, GitBackend};

pub struct ActiveSelection<'a> {
    git: &'a dyn GitBackend,
    key: &'a str,
}

impl<'a> ActiveSelection<'a> {
    pub fn new(git: &'a dyn GitBackend, key: &'a str) -> Self {
        Self { git, key }
    }

    pub fn set_global(&self, name: &str) -> Result<()> {
        self.git.config_set(ConfigScope::Global, self.key, name)?;
        tracing::info!(account = name, "set global selection");
        Ok(())
    }

    pub fn set_for_context(&self, context: &Path, name: &str) -> Result<()> {
        self.git
            .config_set(ConfigScope::Local(context), self.key, name)?;
        tracing::info!(account = name, context = %context.display(), "set context selection");
        Ok(())
    }

    pub fn get_effective(&self, context: &Path) -> Result<Option<String>> {
        if let Some(name) = self.git.config_get(ConfigScope::Local(context), self.key)? {
            return Ok(Some(name));
        }
        self.git.config_get(ConfigScope::Global, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeGit;

    const KEY: &str = "heroku.account";

    #[test]
    fn absent_when_nothing_set() {
        let git = FakeGit::default();
        let selection = ActiveSelection::new(&git, KEY);
        assert_eq!(selection.get_effective(Path::new("/repo")).unwrap(), None);
    }

    #[test]
    fn global_applies_without_override() {
        let git = FakeGit::default();
        let selection = ActiveSelection::new(&git, KEY);
        selection.set_global("personal").unwrap();

        assert_eq!(
            selection.get_effective(Path::new("/repo")).unwrap().as_deref(),
            Some("personal")
        );
    }

    #[test]
    fn context_overrides_global() {
        let git = FakeGit::default();
        let selection = ActiveSelection::new(&git, KEY);
        selection.set_global("personal").unwrap();
        selection.set_for_context(Path::new("/repo"), "work").unwrap();

        assert_eq!(
            selection.get_effective(Path::new("/repo")).unwrap().as_deref(),
            Some("work")
        );
        assert_eq!(
            selection.get_effective(Path::new("/other")).unwrap().as_deref(),
            Some("personal")
        );
    }

    #[test]
    fn writes_use_configured_key() {
        let git = FakeGit::default();
        ActiveSelection::new(&git, "svc.account")
            .set_global("work")
            .unwrap();
        assert_eq!(
            git.global.borrow().get("svc.account").map(String::as_str),
            Some("work")
        );
    }

    #[test]
    fn names_are_recorded_without_lookup() {
        let git = FakeGit::default();
        let selection = ActiveSelection::new(&git, KEY);
        selection.set_for_context(Path::new("/repo"), "never-created").unwrap();
        assert_eq!(
            selection.get_effective(Path::new("/repo")).unwrap().as_deref(),
            Some("never-created")
        );
    }
}
