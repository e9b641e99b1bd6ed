use std::time::Duration;
use reqwest::Url;
use tracing::warn;

pub const DEFAULT_QUOTE_API_URL: &str = "https://stock-price-checker-proxy.freecodecamp.rocks/v1/stock";
pub const DEFAULT_QUOTE_TIMEOUT_SECS: u64 = 10;

pub const QUOTE_API_URL_KEY: &str = "QUOTE_API_URL";
pub const QUOTE_TIMEOUT_KEY: &str = "QUOTE_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct Config {
    pub quote_api_url: Url,
    pub quote_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quote_api_url: default_quote_url(),
            quote_timeout: Duration::from_secs(DEFAULT_QUOTE_TIMEOUT_SECS),
        }
    }
}

fn default_quote_url() -> Url {
    Url::parse(DEFAULT_QUOTE_API_URL).expect("default quote URL is valid")
}

impl Config {
    /// Builds the config from a key lookup such as the shuttle secret store.
    /// Bad values fall back to the defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let quote_api_url = match lookup(QUOTE_API_URL_KEY) {
            Some(raw) => match Url::parse(raw.trim()) {
                Ok(url) if !url.cannot_be_a_base() => url,
                _ => {
                    warn!("{} is not a usable base URL ({}), using default", QUOTE_API_URL_KEY, raw);
                    default_quote_url()
                }
            },
            None => default_quote_url(),
        };

        let timeout_secs = match lookup(QUOTE_TIMEOUT_KEY) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    warn!("{} must be a positive number of seconds, got {:?}", QUOTE_TIMEOUT_KEY, raw);
                    DEFAULT_QUOTE_TIMEOUT_SECS
                }
            },
            None => DEFAULT_QUOTE_TIMEOUT_SECS,
        };

        Self {
            quote_api_url,
            quote_timeout: Duration::from_secs(timeout_secs),
        }
    }
}
