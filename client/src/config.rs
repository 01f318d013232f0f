//! Client configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::ZumError;

/// Base URL of the hosted API.
pub const DEFAULT_BASE_URL: &str = "https://api.zum.services/v1";

/// Per-request timeout used when none (or zero) is configured.
pub const DEFAULT_TIMEOUT_MS: u64 = 2000;

const MISSING_TOKEN: &str =
    "all methods require a JWT access token, see https://zum.services/docs";

/// What a call returns when the transport fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureMode {
    /// Return `ZumError::Transport`.
    #[default]
    Surface,
    /// Log the failure and return an empty body. Matches older integrations
    /// that treat "no bytes" as "request failed".
    Collapse,
}

/// Configuration for a [`ServiceClient`](crate::ServiceClient).
///
/// Can be loaded from a TOML file via [`ClientConfig::from_toml_file`] or
/// built programmatically with [`ClientConfig::new`].
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root; routes are appended after a `/`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// JWT access token issued by ZUM Services.
    #[serde(default)]
    pub access_token: String,

    /// Per-request timeout in milliseconds. Zero means [`DEFAULT_TIMEOUT_MS`].
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default)]
    pub failure_mode: FailureMode,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ClientConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_failure_mode(mut self, failure_mode: FailureMode) -> Self {
        self.failure_mode = failure_mode;
        self
    }

    /// Timeout applied to every request.
    pub fn effective_timeout(&self) -> Duration {
        if self.timeout_ms == 0 {
            Duration::from_millis(DEFAULT_TIMEOUT_MS)
        } else {
            Duration::from_millis(self.timeout_ms)
        }
    }

    /// Check that calls can be made with this configuration.
    pub fn validate(&self) -> Result<(), ZumError> {
        if self.access_token.trim().is_empty() {
            return Err(ZumError::Configuration(MISSING_TOKEN.to_string()));
        }
        Ok(())
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self, ZumError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ZumError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ZumError> {
        toml::from_str(s).map_err(|e| ZumError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ZumError> {
        toml::to_string_pretty(self).map_err(|e| ZumError::Config(e.to_string()))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: String::new(),
            timeout_ms: default_timeout_ms(),
            failure_mode: FailureMode::default(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.access_token.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &token)
            .field("timeout_ms", &self.timeout_ms)
            .field("failure_mode", &self.failure_mode)
            .finish()
    }
}
