// ABOUTME: Runtime configuration for AdStudio, read from the environment
// ABOUTME: Resolves the recommendation service base URL and submit/UI settings

pub mod constants;

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;
use url::Url;

use constants::*;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("Invalid boolean for {name}: {value}")]
    InvalidBool { name: &'static str, value: String },
    #[error("{name} must be greater than zero")]
    Zero { name: &'static str },
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base of the recommendation service, absolute or relative to `api_origin`
    pub api_base: String,
    /// Origin used to resolve a relative `api_base`
    pub api_origin: String,
    /// Overall request timeout; `None` leaves it to the transport
    pub http_timeout: Option<Duration>,
    /// Drop responses from submits superseded by a newer one
    pub discard_stale_responses: bool,
    pub tick_rate_ms: u64,
    /// Log file used while the terminal UI owns stdout
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: build_time_api_base().to_string(),
            api_origin: DEFAULT_API_ORIGIN.to_string(),
            http_timeout: None,
            discard_stale_responses: false,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            log_file: None,
        }
    }
}

/// API base baked in at compile time, else `/api`
pub fn build_time_api_base() -> &'static str {
    option_env!("ADSTUDIO_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let api_base = non_empty_var(ADSTUDIO_API_BASE).unwrap_or(defaults.api_base);
        let api_origin = non_empty_var(ADSTUDIO_API_ORIGIN).unwrap_or(defaults.api_origin);

        let http_timeout = match non_empty_var(ADSTUDIO_HTTP_TIMEOUT_SECS) {
            Some(raw) => {
                let secs = parse_u64(ADSTUDIO_HTTP_TIMEOUT_SECS, &raw)?;
                if secs == 0 {
                    return Err(ConfigError::Zero {
                        name: ADSTUDIO_HTTP_TIMEOUT_SECS,
                    });
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let discard_stale_responses = match non_empty_var(ADSTUDIO_DISCARD_STALE_RESPONSES) {
            Some(raw) => parse_bool(ADSTUDIO_DISCARD_STALE_RESPONSES, &raw)?,
            None => defaults.discard_stale_responses,
        };

        let tick_rate_ms = match non_empty_var(ADSTUDIO_TICK_RATE_MS) {
            Some(raw) => parse_u64(ADSTUDIO_TICK_RATE_MS, &raw)?,
            None => defaults.tick_rate_ms,
        };
        if tick_rate_ms == 0 {
            return Err(ConfigError::Zero {
                name: ADSTUDIO_TICK_RATE_MS,
            });
        }

        let log_file = non_empty_var(ADSTUDIO_LOG_FILE).map(PathBuf::from);

        let config = Config {
            api_base,
            api_origin,
            http_timeout,
            discard_stale_responses,
            tick_rate_ms,
            log_file,
        };
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Absolute base URL of the service, without a trailing slash
    ///
    /// A relative `api_base` such as `/api` is joined onto `api_origin`.
    pub fn api_base_url(&self) -> Result<String, ConfigError> {
        let base = self.api_base.trim();
        let url = match Url::parse(base) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let origin = parse_url(self.api_origin.trim())?;
                origin.join(base).map_err(|source| ConfigError::InvalidUrl {
                    url: base.to_string(),
                    source,
                })?
            }
            Err(source) => {
                return Err(ConfigError::InvalidUrl {
                    url: base.to_string(),
                    source,
                })
            }
        };

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }

        Ok(url.as_str().trim_end_matches('/').to_string())
    }
}

fn parse_url(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_u64(name: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
        name,
        value: raw.to_string(),
    })
}

fn parse_bool(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: raw.to_string(),
        }),
    }
}
