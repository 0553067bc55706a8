//! Client configuration.
//!
//! The service listens on `http://localhost:8288/kx/api` by default. The
//! defaults can be overridden in code or through environment variables:
//!
//! | Variable | Meaning |
//! |---|---|
//! | `KEEEX_API_URL` | Full API root URL (wins over `KEEEX_API_PORT`) |
//! | `KEEEX_API_PORT` | Port on localhost |
//! | `KEEEX_API_TOKEN` | Initial authorization token |
//! | `KEEEX_API_TIMEOUT_SECS` | Per-request timeout in seconds |

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Default port of the local API.
pub const DEFAULT_PORT: u16 = 8288;

/// Default host of the local API.
pub const DEFAULT_HOST: &str = "localhost";

/// Path of the API root on the host.
pub const API_ROOT_PATH: &str = "/kx/api";

/// Environment variable holding the full API root URL.
pub const ENV_URL: &str = "KEEEX_API_URL";
/// Environment variable holding the port.
pub const ENV_PORT: &str = "KEEEX_API_PORT";
/// Environment variable holding the initial token.
pub const ENV_TOKEN: &str = "KEEEX_API_TOKEN";
/// Environment variable holding the timeout in seconds.
pub const ENV_TIMEOUT: &str = "KEEEX_API_TIMEOUT_SECS";

/// Returns the default API root, `http://localhost:<port>/kx/api`.
pub fn default_base_url(port: u16) -> Url {
    let mut url = Url::parse(&format!("http://{DEFAULT_HOST}{API_ROOT_PATH}"))
        .unwrap_or_else(|_| unreachable!("static URL is valid"));
    // Setting a port on an http URL cannot fail.
    let _ = url.set_port(Some(port));
    url
}

/// Settings used to build a [`KeeexClient`](crate::KeeexClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root; operation routes are appended below it.
    pub base_url: Url,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Token to start with.
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(DEFAULT_PORT),
            timeout: None,
            token: None,
        }
    }
}

impl ClientConfig {
    /// Replaces the port of the base URL.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if the URL cannot carry a port.
    pub fn with_port(mut self, port: u16) -> Result<Self, ConfigError> {
        self.base_url
            .set_port(Some(port))
            .map_err(|()| ConfigError::InvalidPort {
                url: self.base_url.to_string(),
            })?;
        Ok(self)
    }

    /// Reads overrides from the process environment.
    ///
    /// ## Errors
    ///
    /// Returns a [`ConfigError`] if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads overrides through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// ## Errors
    ///
    /// Returns a [`ConfigError`] if a variable is set to an unparseable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_URL) {
            config.base_url = Url::parse(url.trim())?;
        } else if let Some(port) = lookup(ENV_PORT) {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::invalid_env(ENV_PORT, port.clone()))?;
            config = config.with_port(port)?;
        }

        if let Some(secs) = lookup(ENV_TIMEOUT) {
            let secs = secs
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::invalid_env(ENV_TIMEOUT, secs.clone()))?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        config.token = lookup(ENV_TOKEN);
        Ok(config)
    }
}
