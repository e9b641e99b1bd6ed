use reqwest::{Client, Url};
use serde::Deserialize;
use shared::models::StockQuote;
use tracing::{debug, warn};
use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("Quote request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Quote service answered {0} for {1}")]
    Status(reqwest::StatusCode, String),
    #[error("Unusable quote for {0}: {1}")]
    Decode(String, String),
    #[error("Cannot build quote URL for {0}")]
    InvalidUrl(String),
}

/// Source of latest prices. The server only needs one quote per symbol.
#[rocket::async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_quote(&self, symbol: &str) -> Result<StockQuote, QuoteError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpstreamQuote {
    symbol: String,
    latest_price: f64,
}

pub struct ProxyQuoteClient {
    client: Client,
    base_url: Url,
}

impl ProxyQuoteClient {
    pub fn new(config: &Config) -> Result<Self, QuoteError> {
        let client = Client::builder()
            .timeout(config.quote_timeout)
            .build()?;
        Ok(Self { client, base_url: config.quote_api_url.clone() })
    }

    /// `{base}/{symbol}/quote`, with the symbol escaped as a single segment.
    pub fn quote_url(&self, symbol: &str) -> Result<Url, QuoteError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| QuoteError::InvalidUrl(symbol.to_string()))?
            .pop_if_empty()
            .push(symbol)
            .push("quote");
        Ok(url)
    }
}

#[rocket::async_trait]
impl QuoteSource for ProxyQuoteClient {
    async fn fetch_quote(&self, symbol: &str) -> Result<StockQuote, QuoteError> {
        let url = self.quote_url(symbol)?;
        debug!("Fetching quote from {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Quote service returned {} for {}", status, symbol);
            return Err(QuoteError::Status(status, symbol.to_string()));
        }

        let body = response.text().await?;
        parse_quote(symbol, &body)
    }
}

/// Decodes a quote body. Unknown tickers come back as a bare JSON string
/// such as `"Unknown symbol"` rather than an object.
pub fn parse_quote(symbol: &str, body: &str) -> Result<StockQuote, QuoteError> {
    let quote: UpstreamQuote = serde_json::from_str(body).map_err(|e| {
        warn!("Failed to decode quote for {}: {}", symbol, e);
        QuoteError::Decode(symbol.to_string(), e.to_string())
    })?;

    Ok(StockQuote {
        symbol: quote.symbol,
        price: quote.latest_price,
    })
}
