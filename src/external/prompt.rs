//! Interactive credential prompt.

use dialoguer::{Input, Password};

use super::CredentialPrompt;
use crate::config::Credentials;
use crate::error::{Error, Result};

#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl CredentialPrompt for TerminalPrompt {
    fn ask(&self) -> Result<Credentials> {
        eprintln!("Enter your Heroku credentials.");

        let username: String = Input::new()
            .with_prompt("Email")
            .interact_text()
            .map_err(|e| Error::Prompt(e.to_string()))?;

        let password = Password::new()
            .with_prompt("Password (typing will be hidden)")
            .interact()
            .map_err(|e| Error::Prompt(e.to_string()))?;

        Ok(Credentials::new(username.trim(), password))
    }
}
