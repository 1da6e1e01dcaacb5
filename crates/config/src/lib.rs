//! Configuration management for the PACS query tools.
//!
//! This crate provides types and loaders for CUBE and pfdcm connection
//! configuration from environment variables and `.env` files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigLoader, env_var_or_none};
pub use types::{Config, ConnectionConfig, PfdcmConfig, PollConfig};

pub use loader::ConfigError;

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
