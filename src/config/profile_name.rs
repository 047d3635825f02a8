//! Validated account names.

use std::fmt;

use crate::error::{Error, Result};

/// An account name that is safe to use as a file name inside the store and as
/// a label in an SSH host alias.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProfileName(String);

impl ProfileName {
    pub fn new(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::NameRequired);
        }
        if name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(Error::InvalidName(name.to_string()));
        }
        // The name ends up on a `Host` line of the SSH config and in a remote URL.
        if name
            .chars()
            .any(|c| c.is_control() || c.is_whitespace() || c == ':')
        {
            return Err(Error::InvalidName(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    /// Validates an optional positional argument.
    pub fn from_arg(name: Option<&str>) -> Result<Self> {
        Self::new(name.ok_or(Error::NameRequired)?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProfileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
