//! # Client configuration: `userdesk.toml`
//!
//! Defines the TOML file compiled into the web client (filename:
//! [`ClientConfig::filename`] = `"userdesk.toml"`). It tells the client where the
//! user resource lives and how long notifications stay on screen.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! users_path = "/api/users"   # resolved against the page origin
//!
//! [notice]
//! auto_hide_secs = 5
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with builder helpers and TOML (de)serialisation. |
//! | [`ApiConfig`] | Path of the user collection resource. Defaults to **`/api/users`**. |
//! | [`NoticeConfig`] | Banner auto-hide interval. Defaults to **5 seconds**. |
//!
//! All structs implement `Default`, so a missing or empty file is equivalent to
//! the default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid client config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot serialise client config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration stored in `userdesk.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notice: NoticeConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Collection path; single records live at `{users_path}/{id}`.
    #[serde(default = "default_users_path")]
    pub users_path: String,
}

fn default_users_path() -> String {
    "/api/users".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            users_path: default_users_path(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoticeConfig {
    #[serde(default = "default_auto_hide_secs")]
    pub auto_hide_secs: u32,
}

fn default_auto_hide_secs() -> u32 {
    5
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            auto_hide_secs: default_auto_hide_secs(),
        }
    }
}

impl ClientConfig {
    pub fn with_users_path(mut self, path: impl Into<String>) -> Self {
        self.api.users_path = path.into();
        self
    }

    pub fn with_auto_hide_secs(mut self, secs: u32) -> Self {
        self.notice.auto_hide_secs = secs;
        self
    }

    pub fn auto_hide(&self) -> Duration {
        Duration::from_secs(u64::from(self.notice.auto_hide_secs))
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "userdesk.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
