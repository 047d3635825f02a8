//! Stored account credentials.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Credential set persisted for one account.
///
/// Keys other than `username` and `password` are kept as-is so that files
/// written by other tools survive a read. Files from the older tool spell the
/// keys `:username` and `:password`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(alias = ":username")]
    pub username: String,
    #[serde(alias = ":password")]
    pub password: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            extra: BTreeMap::new(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("extra", &self.extra.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_password() {
        let creds = Credentials::new("alice", "s3cr3t");
        let out = format!("{creds:?}");
        assert!(out.contains("alice"));
        assert!(!out.contains("s3cr3t"));
    }

    #[test]
    fn unknown_keys_are_preserved() {
        let yaml = "username: alice\npassword: s3cr3t\napi_key: abc\n";
        let creds: Credentials = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            creds.extra.get("api_key"),
            Some(&serde_yaml::Value::String("abc".to_string()))
        );

        let written = serde_yaml::to_string(&creds).unwrap();
        assert!(written.contains("api_key: abc"));
    }

    #[test]
    fn reads_symbol_keyed_files() {
        let yaml = "---\n:username: alice\n:password: s3cr3t\n";
        let creds: Credentials = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(creds, Credentials::new("alice", "s3cr3t"));

        let written = serde_yaml::to_string(&creds).unwrap();
        assert!(written.contains("username: alice"));
        assert!(!written.contains(":username"));
    }
}
