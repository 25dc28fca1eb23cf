use dotenv::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("invalid API key header: {0}")]
    InvalidApiKey(String),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct CoinGeckoConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub per_page: u32,
    pub timeout: Duration,
}

impl CoinGeckoConfig {
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        CoinGeckoConfig {
            base_url: base_url.into(),
            api_key: None,
            per_page: 100,
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub coingecko: CoinGeckoConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let base_url = env::var("COINGECKO_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_COINGECKO_BASE_URL.to_string());
        let api_key = env::var("COINGECKO_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let per_page = parse_var("COINGECKO_PER_PAGE", 100)?;
        let timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", 10)?;
        let host = env::var("BIND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_var("PORT", 3000)?;

        Ok(Config {
            host,
            port,
            coingecko: CoinGeckoConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                api_key,
                per_page,
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

fn parse_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => parse_value(key, &value),
        Err(_) => Ok(default),
    }
}

pub(crate) fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        })
}
