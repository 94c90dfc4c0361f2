//! # Client configuration (`sitemanager.toml`)
//!
//! [`ClientConfig`] tells the [`ApiClient`](crate::ApiClient) where the backend
//! lives and how long to wait for it.
//!
//! ```toml
//! base_url = "http://localhost:5000/api"
//! request_timeout_ms = 30000   # every API call
//! restore_timeout_ms = 10000   # profile check at startup
//! remote_logging = true        # ship failed calls to POST /logs
//! ```
//!
//! Native builds read the file from the app data directory with
//! [`ClientConfig::load`]. Browser builds have no filesystem, so
//! [`ClientConfig::from_build_env`] reads `SITEMANAGER_API_URL` at compile time
//! instead. Keys missing from the file keep their defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Connection settings for the backend REST API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Upper bound for a single request, response body included.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
    /// Upper bound for the startup profile check.
    #[serde(default = "default_restore_timeout")]
    pub restore_timeout_ms: u64,
    /// Forward failed calls to the backend log sink.
    #[serde(default = "default_remote_logging")]
    pub remote_logging: bool,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30_000
}

fn default_restore_timeout() -> u64 {
    10_000
}

fn default_remote_logging() -> bool {
    true
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout(),
            restore_timeout_ms: default_restore_timeout(),
            remote_logging: default_remote_logging(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Config baked in at compile time via `SITEMANAGER_API_URL`.
    pub fn from_build_env() -> Self {
        match option_env!("SITEMANAGER_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Builder method to set the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Builder method to set the startup profile-check timeout.
    pub fn with_restore_timeout(mut self, timeout: Duration) -> Self {
        self.restore_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Builder method to toggle log shipping.
    pub fn with_remote_logging(mut self, enabled: bool) -> Self {
        self.remote_logging = enabled;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn restore_timeout(&self) -> Duration {
        Duration::from_millis(self.restore_timeout_ms)
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "sitemanager.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Read `<dir>/sitemanager.toml`. A missing, unreadable or invalid file
    /// falls back to [`ClientConfig::from_build_env`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(dir: &std::path::Path) -> Self {
        let path = dir.join(Self::filename());
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No {}, using built-in settings", path.display());
                return Self::from_build_env();
            }
            Err(e) => {
                tracing::warn!("Cannot read {}: {}", path.display(), e);
                return Self::from_build_env();
            }
        };
        match Self::from_toml(&content) {
            Ok(config) => {
                tracing::info!("Loaded client config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
                Self::from_build_env()
            }
        }
    }
}
