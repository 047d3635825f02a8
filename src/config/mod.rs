//! Accounts on disk and user settings.

mod credentials;
mod profile_name;
mod settings;
mod store;

pub use credentials::Credentials;
pub use profile_name::ProfileName;
pub use settings::{Settings, home_dir};
pub use store::ProfileStore;
