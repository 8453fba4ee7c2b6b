//! Server configuration from environment variables.

use thiserror::Error;
use typing_core::{AutocorrectSettings, DiffAlgorithm};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} is not a valid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime configuration for the race server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Used by autocorrect requests that don't choose their own algorithm or limit.
    pub autocorrect: AutocorrectSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            autocorrect: AutocorrectSettings::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// Recognized env vars:
    /// - HOST: Bind address (default "0.0.0.0")
    /// - PORT: Bind port (default 3000)
    /// - DIFF_ALGORITHM: sphinx_swaps, minimum_mewtations or final_diff
    /// - AUTOCORRECT_LIMIT: Maximum diff cost accepted by autocorrect
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration using `lookup` to read variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            None => defaults.port,
        };

        let algorithm = match lookup("DIFF_ALGORITHM") {
            Some(value) => DiffAlgorithm::from_str(&value).ok_or(ConfigError::Invalid {
                name: "DIFF_ALGORITHM",
                value,
            })?,
            None => defaults.autocorrect.algorithm,
        };

        let limit = match lookup("AUTOCORRECT_LIMIT") {
            Some(value) => Some(value.parse().map_err(|_| ConfigError::Invalid {
                name: "AUTOCORRECT_LIMIT",
                value,
            })?),
            None => None,
        };

        Ok(Self {
            host,
            port,
            autocorrect: AutocorrectSettings::for_algorithm(algorithm).merge(None, limit),
        })
    }

    /// Address to bind, as `host:port`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
