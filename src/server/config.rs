use std::time::Duration;

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

/// Request timeout used when `BOT_API_TIMEOUT_SECS` is not set.
const DEFAULT_BOT_API_TIMEOUT_SECS: u64 = 10;

pub struct Config {
    /// Base URL of the bot's web API, always ending in `/`.
    pub bot_api_url: Url,
    pub bot_api_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|key| std::env::var(key).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_api_url = lookup("BOT_API_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("BOT_API_URL".to_string()))?;

        let bot_api_timeout = match lookup("BOT_API_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|source| ConfigError::InvalidNumber {
                    var: "BOT_API_TIMEOUT_SECS".to_string(),
                    value,
                    source,
                })?,
            None => DEFAULT_BOT_API_TIMEOUT_SECS,
        };

        Ok(Self {
            bot_api_url: parse_base_url("BOT_API_URL", &bot_api_url)?,
            bot_api_timeout: Duration::from_secs(bot_api_timeout),
        })
    }
}

/// Parses an http(s) base URL and makes sure its path ends in `/` so that
/// relative joins append to it instead of replacing the last segment.
fn parse_base_url(var: &str, value: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(value.trim()).map_err(|source| ConfigError::InvalidUrl {
        var: var.to_string(),
        value: value.to_string(),
        source,
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme {
            var: var.to_string(),
            scheme: url.scheme().to_string(),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
