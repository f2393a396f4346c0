use std::path::PathBuf;
use std::time::Duration;

use crate::error::{PsaError, Result};

pub const PSA_API_BASE: &str = "https://api.psacard.com/publicapi";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_STATIC_DIR: &str = "static";

pub const ENV_AUTH_TOKEN: &str = "PSA_AUTH_TOKEN";
pub const ENV_API_BASE: &str = "PSA_API_BASE";
pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_STATIC_DIR: &str = "STATIC_DIR";

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bearer token for the PSA public API. `None` disables cert lookups.
    pub auth_token: Option<String>,
    pub api_base: String,
    pub host: String,
    pub port: u16,
    /// Directory holding `index.html` and the front-end assets.
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth_token: None,
            api_base: PSA_API_BASE.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl AppConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();
        config.auth_token = get(ENV_AUTH_TOKEN);
        if let Some(base) = get(ENV_API_BASE) {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(host) = get(ENV_HOST) {
            config.host = host;
        }
        if let Some(port) = get(ENV_PORT) {
            config.port = port
                .parse()
                .map_err(|_| PsaError::Config(format!("{ENV_PORT} must be a port number, got '{port}'")))?;
        }
        if let Some(dir) = get(ENV_STATIC_DIR) {
            config.static_dir = PathBuf::from(dir);
        }
        Ok(config)
    }

    /// `host:port` string suitable for binding a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
