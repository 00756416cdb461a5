use chrono_tz::Tz;
use std::env;

use crate::services::{DEFAULT_OPTION_DAYS, MAX_OPTION_DAYS};

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub business_timezone: Tz,
    pub delivery_option_days: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value source, applying defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let timezone_name =
            lookup("BUSINESS_TIMEZONE").unwrap_or_else(|| "Asia/Manila".to_string());
        let business_timezone = timezone_name
            .parse::<Tz>()
            .map_err(|_| ConfigError::InvalidTimezone(timezone_name))?;

        let delivery_option_days = match lookup("DELIVERY_OPTION_DAYS") {
            None => DEFAULT_OPTION_DAYS,
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|days| (1..=MAX_OPTION_DAYS).contains(days))
                .ok_or(ConfigError::InvalidOptionDays(raw))?,
        };

        Ok(Config {
            server_host,
            server_port,
            business_timezone,
            delivery_option_days,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 3000,
            business_timezone: chrono_tz::Asia::Manila,
            delivery_option_days: DEFAULT_OPTION_DAYS,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid business timezone: {0}")]
    InvalidTimezone(String),

    #[error(
        "DELIVERY_OPTION_DAYS must be a whole number from 1 to {}, got {:?}",
        MAX_OPTION_DAYS,
        .0
    )]
    InvalidOptionDays(String),
}
