//! CLI subcommand definitions.

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List stored accounts.
    #[command(visible_alias = "index")]
    List,

    /// Add an account, prompting for its credentials.
    Add {
        /// Account name.
        name: Option<String>,
        /// Generate an SSH key, add a host alias and upload the key.
        #[arg(long)]
        auto: bool,
    },

    /// Remove an account.
    Remove {
        /// Account name.
        name: Option<String>,
    },

    /// Use an account for the current repository.
    Set {
        /// Account name.
        name: Option<String>,
    },

    /// Use an account wherever no repository account is set.
    Default {
        /// Account name.
        name: Option<String>,
    },

    /// Show the account in effect for the current directory.
    Current,

    /// Read or change settings.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print a setting.
    Get {
        /// Setting name.
        key: String,
    },

    /// Change a setting.
    Set {
        /// Setting name.
        key: String,
        /// New value.
        value: String,
    },

    /// Print where settings and accounts are stored.
    Path,
}
