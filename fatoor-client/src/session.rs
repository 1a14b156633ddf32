//! Admin session gate
//!
//! A single hardcoded credential pair checked synchronously. The flag
//! lives in memory for the session only: not persisted, not expiring, no
//! hashing. This is a placeholder gate for a trusted office, not a
//! security boundary.

use thiserror::Error;
use tracing::info;

use crate::config::Config;

/// Session errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("wrong username or password")]
    InvalidCredentials,
}

/// In-memory admin session state
#[derive(Debug)]
pub struct AdminSession {
    username: String,
    password: String,
    logged_in: bool,
}

impl AdminSession {
    pub fn new(config: &Config) -> Self {
        Self {
            username: config.admin_username.clone(),
            password: config.admin_password.clone(),
            logged_in: false,
        }
    }

    /// Check the credential pair; on success the session becomes admin
    /// until [`Self::logout`].
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), SessionError> {
        if username == self.username && password == self.password {
            self.logged_in = true;
            info!("admin session opened");
            Ok(())
        } else {
            Err(SessionError::InvalidCredentials)
        }
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
    }

    pub fn is_admin(&self) -> bool {
        self.logged_in
    }
}
