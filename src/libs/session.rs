//! Explicit session state for the current user.
//!
//! The session is a plain value constructed once from configuration plus
//! the cached portal token, and passed into every constructor that needs
//! it; there is no hidden global to consult or mutate. The token itself
//! is opaque and unsigned, and only the server judges its validity.

use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::record::Employee;
use anyhow::Result;
use std::fs;

const SESSION_FILE: &str = ".portal_session";

/// The current user plus any cached portal token.
#[derive(Debug, Clone)]
pub struct Session {
    pub employee: Employee,
    token: Option<String>,
}

impl Session {
    /// Builds a session from the configured profile and the token cache.
    ///
    /// Fails when no profile is configured; a missing or unreadable token
    /// file just means the next API call logs in first.
    pub fn load(config: &Config) -> Result<Self> {
        let employee = config.profile()?.clone();
        let token = DataStorage::new()
            .get_path(SESSION_FILE)
            .ok()
            .and_then(|path| fs::read_to_string(path).ok())
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Ok(Self { employee, token })
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Stores a freshly issued token in memory and on disk.
    pub fn set_token(&mut self, token: String) -> Result<()> {
        let path = DataStorage::new().get_path(SESSION_FILE)?;
        fs::write(path, &token)?;
        self.token = Some(token);
        Ok(())
    }

    /// Drops the cached token, forcing a fresh login on the next call.
    pub fn clear_token(&mut self) -> Result<()> {
        if let Ok(path) = DataStorage::new().get_path(SESSION_FILE) {
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        self.token = None;
        Ok(())
    }
}
