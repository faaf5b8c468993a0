use std::env;

use crate::{error::ConfigError, utils::rate_table};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub default_network_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            default_network_id: rate_table::PRIMARY_NETWORK.to_string(),
        }
    }
}

impl Config {
    /// Reads `HOST`, `PORT` and `DEFAULT_NETWORK_ID` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        let default_network_id = lookup("DEFAULT_NETWORK_ID")
            .map(|id| id.trim().to_string())
            .unwrap_or(defaults.default_network_id);

        if !rate_table::has_network(&default_network_id) {
            return Err(ConfigError::UnknownDefaultNetwork(default_network_id));
        }

        Ok(Config {
            host,
            port,
            default_network_id,
        })
    }
}
