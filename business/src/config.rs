use log::{info, warn};
use serde::Deserialize;
use std::env::vars;

/// Users endpoint used when nothing else is configured.
pub const DEFAULT_USERS_URL: &str = "https://dummyjson.com/users";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    users_url: String,
}

/// Environment variables understood by [`BusinessConfig::from_env`].
#[derive(Debug, Deserialize)]
struct RawConfig {
    roster_users_url: Option<String>,
}

impl BusinessConfig {
    pub fn new(users_url: impl Into<String>) -> Self {
        Self {
            users_url: users_url.into(),
        }
    }

    /// Reads `ROSTER_USERS_URL`, falling back to [`DEFAULT_USERS_URL`].
    pub fn from_env() -> Self {
        match serde_env::from_iter(vars()) {
            Ok(raw) => Self::from_raw(raw),
            Err(err) => {
                warn!("Ignoring invalid environment config: {err}");
                Self::default()
            }
        }
    }

    fn from_raw(raw: RawConfig) -> Self {
        match raw.roster_users_url {
            Some(url) if !url.trim().is_empty() => {
                info!("Using users endpoint from ROSTER_USERS_URL: {url}");
                Self::new(url.trim())
            }
            _ => Self::default(),
        }
    }

    pub fn users_url(&self) -> &str {
        &self.users_url
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_USERS_URL)
    }
}
