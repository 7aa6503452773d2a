//! Process configuration read from the environment.

use std::net::SocketAddr;

use crate::turvo::TurvoConfig;

/// Listen address used when `LOAD_SERVER_ADDR` is unset.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub turvo: TurvoConfig,
    pub addr: SocketAddr,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let mut turvo = TurvoConfig::new(required("TURVO_BASE_URL")?, required("TURVO_API_KEY")?)
            .with_client(required("TURVO_CLIENT_ID")?, required("TURVO_CLIENT_SECRET")?)
            .with_user(required("TURVO_USERNAME")?, required("TURVO_PASSWORD")?);

        if let Some(raw) = lookup("TURVO_TIMEOUT_SECS") {
            let secs = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "TURVO_TIMEOUT_SECS",
                value: raw.clone(),
            })?;
            turvo = turvo.with_timeout(secs);
        }

        let raw_addr = lookup("LOAD_SERVER_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr.trim().parse().map_err(|_| ConfigError::Invalid {
            name: "LOAD_SERVER_ADDR",
            value: raw_addr.clone(),
        })?;

        Ok(Self { turvo, addr })
    }
}
