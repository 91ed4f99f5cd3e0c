//! Alpha Vantage market data provider implementation.
//!
//! Quotes are fetched via the GLOBAL_QUOTE endpoint, one HTTP GET per call.
//! Toronto-listed equities use the provider's `.TRT` exchange code; the
//! translation happens here so callers only ever see canonical `.TO` symbols.
//!
//! Note: Alpha Vantage free tier is limited to 5 API calls per minute. The
//! rate-limit marker arrives in-band as a "Note" field with HTTP 200.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::MarketDataError;
use crate::models::{MarketStatus, RealTimeQuote};
use crate::provider::QuoteProvider;
use crate::symbols::{normalize_tsx, provider_symbol};

const BASE_URL: &str = "https://www.alphavantage.co/query";
const PROVIDER_ID: &str = "ALPHA_VANTAGE";

/// Environment variable holding the Alpha Vantage API key.
pub const API_KEY_ENV: &str = "ALPHA_VANTAGE_API_KEY";

/// Bounded request timeout; a timed-out request is treated as provider failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Alpha Vantage quote provider for TSX equities.
pub struct AlphaVantageProvider {
    client: Client,
    api_key: Option<String>,
}

// ============================================================================
// Response structures for the GLOBAL_QUOTE endpoint
// ============================================================================

#[derive(Debug, Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuote>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GlobalQuote {
    #[serde(rename = "05. price")]
    price: Option<String>,
    #[serde(rename = "08. previous close")]
    previous_close: Option<String>,
    #[serde(rename = "09. change")]
    change: Option<String>,
    #[serde(rename = "10. change percent")]
    change_percent: Option<String>,
}

impl AlphaVantageProvider {
    /// Create a new provider. A missing key is not an error here: it surfaces
    /// as [`MarketDataError::ApiKeyMissing`] on first use, never at startup.
    pub fn new(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, api_key }
    }

    /// Create a provider configured from the `ALPHA_VANTAGE_API_KEY`
    /// environment variable.
    pub fn from_env() -> Self {
        Self::new(env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()))
    }

    fn api_key(&self) -> Result<&str, MarketDataError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| MarketDataError::ApiKeyMissing {
                provider: PROVIDER_ID.to_string(),
            })
    }

    /// Make a request to the Alpha Vantage API.
    async fn fetch(&self, params: &[(&str, &str)]) -> Result<String, MarketDataError> {
        let api_key = self.api_key()?.to_string();
        let mut all_params: Vec<(&str, &str)> = params.to_vec();
        all_params.push(("apikey", &api_key));

        let url = reqwest::Url::parse_with_params(BASE_URL, &all_params).map_err(|e| {
            MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to build URL: {}", e),
            }
        })?;

        debug!(
            "Alpha Vantage request: {}",
            url.as_str().replace(&api_key, "***")
        );

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::Network(e)
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })
    }

    /// Check for API-level errors in the response envelope.
    fn check_api_error(
        symbol: &str,
        error_message: &Option<String>,
        note: &Option<String>,
        information: &Option<String>,
    ) -> Result<(), MarketDataError> {
        if let Some(msg) = error_message {
            if msg.contains("Invalid API call") || msg.contains("not found") {
                return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
            }
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: msg.clone(),
            });
        }

        // "Note" usually indicates rate limiting
        if let Some(msg) = note {
            if msg.contains("API call frequency") || msg.contains("rate limit") {
                return Err(MarketDataError::RateLimited {
                    provider: PROVIDER_ID.to_string(),
                });
            }
            warn!("Alpha Vantage note: {}", msg);
        }

        if let Some(msg) = information {
            if msg.contains("API call frequency") || msg.contains("rate limit") {
                return Err(MarketDataError::RateLimited {
                    provider: PROVIDER_ID.to_string(),
                });
            }
            warn!("Alpha Vantage info: {}", msg);
        }

        Ok(())
    }

    fn parse_decimal(field: &str, value: &Option<String>) -> Result<Decimal, MarketDataError> {
        let raw = value.as_deref().ok_or_else(|| {
            MarketDataError::InvalidResponse(format!("missing field '{}'", field))
        })?;
        Decimal::from_str(raw.trim()).map_err(|_| {
            MarketDataError::InvalidResponse(format!("unparseable {} '{}'", field, raw))
        })
    }

    /// Parse a GLOBAL_QUOTE response body into a [`RealTimeQuote`].
    ///
    /// `symbol` is the canonical TSX symbol the quote was requested for; the
    /// provider echoes its own format, which we do not propagate.
    fn parse_global_quote(symbol: &str, body: &str) -> Result<RealTimeQuote, MarketDataError> {
        let response: GlobalQuoteResponse = serde_json::from_str(body)
            .map_err(|e| MarketDataError::InvalidResponse(e.to_string()))?;

        Self::check_api_error(
            symbol,
            &response.error_message,
            &response.note,
            &response.information,
        )?;

        let quote = response.global_quote.ok_or_else(|| {
            MarketDataError::InvalidResponse("missing 'Global Quote' object".to_string())
        })?;

        let current_price = Self::parse_decimal("price", &quote.price)?;
        // A valid equity quote always has a positive trade price.
        if current_price <= Decimal::ZERO {
            return Err(MarketDataError::InvalidResponse(format!(
                "non-positive price '{}' for {}",
                current_price, symbol
            )));
        }
        let previous_close = Self::parse_decimal("previous close", &quote.previous_close)?;
        let day_change = Self::parse_decimal("change", &quote.change)?;
        let change_percent = quote
            .change_percent
            .as_deref()
            .map(|s| s.trim().trim_end_matches('%').to_string());
        let day_change_percent = Self::parse_decimal("change percent", &change_percent)?;

        Ok(RealTimeQuote {
            symbol: symbol.to_string(),
            current_price,
            previous_close,
            day_change,
            day_change_percent,
            market_status: MarketStatus::Open,
            fetched_at: Utc::now(),
        })
    }
}

#[async_trait]
impl QuoteProvider for AlphaVantageProvider {
    async fn fetch_quote(&self, symbol: &str) -> Result<RealTimeQuote, MarketDataError> {
        let tsx_symbol = normalize_tsx(symbol);
        let api_symbol = provider_symbol(&tsx_symbol);

        let body = self
            .fetch(&[("function", "GLOBAL_QUOTE"), ("symbol", &api_symbol)])
            .await?;

        Self::parse_global_quote(&tsx_symbol, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn quote_body(price: &str) -> String {
        format!(
            r#"{{"Global Quote": {{
                "01. symbol": "SHOP.TRT",
                "05. price": "{}",
                "08. previous close": "85.0300",
                "09. change": "3.2200",
                "10. change percent": "3.7869%"
            }}}}"#,
            price
        )
    }

    #[test]
    fn parses_global_quote() {
        let quote =
            AlphaVantageProvider::parse_global_quote("SHOP.TO", &quote_body("88.2500")).unwrap();
        assert_eq!(quote.symbol, "SHOP.TO");
        assert_eq!(quote.current_price, dec!(88.25));
        assert_eq!(quote.previous_close, dec!(85.03));
        assert_eq!(quote.day_change, dec!(3.22));
        assert_eq!(quote.day_change_percent, dec!(3.7869));
        assert_eq!(quote.market_status, MarketStatus::Open);
    }

    #[test]
    fn missing_quote_object_is_invalid_response() {
        let err = AlphaVantageProvider::parse_global_quote("SHOP.TO", "{}").unwrap_err();
        assert!(matches!(err, MarketDataError::InvalidResponse(_)));
    }

    #[test]
    fn empty_quote_object_is_invalid_response() {
        let err = AlphaVantageProvider::parse_global_quote("SHOP.TO", r#"{"Global Quote": {}}"#)
            .unwrap_err();
        assert!(matches!(err, MarketDataError::InvalidResponse(_)));
    }

    #[test]
    fn note_field_is_rate_limited() {
        let body = r#"{"Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute."}"#;
        let err = AlphaVantageProvider::parse_global_quote("SHOP.TO", body).unwrap_err();
        assert!(matches!(err, MarketDataError::RateLimited { .. }));
    }

    #[test]
    fn error_message_for_invalid_call_is_symbol_not_found() {
        let body = r#"{"Error Message": "Invalid API call. Please retry or visit the documentation."}"#;
        let err = AlphaVantageProvider::parse_global_quote("NOPE.TO", body).unwrap_err();
        assert!(matches!(err, MarketDataError::SymbolNotFound(s) if s == "NOPE.TO"));
    }

    #[test]
    fn zero_price_is_invalid_response() {
        let err =
            AlphaVantageProvider::parse_global_quote("SHOP.TO", &quote_body("0.0000")).unwrap_err();
        assert!(matches!(err, MarketDataError::InvalidResponse(_)));
    }

    #[test]
    fn negative_price_is_invalid_response() {
        let err =
            AlphaVantageProvider::parse_global_quote("SHOP.TO", &quote_body("-1.2500")).unwrap_err();
        assert!(matches!(err, MarketDataError::InvalidResponse(_)));
    }

    #[test]
    fn garbage_body_is_invalid_response() {
        let err = AlphaVantageProvider::parse_global_quote("SHOP.TO", "not json").unwrap_err();
        assert!(matches!(err, MarketDataError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_network() {
        let provider = AlphaVantageProvider::new(None);
        let err = provider.fetch_quote("SHOP.TO").await.unwrap_err();
        assert!(err.is_configuration());
    }

    #[tokio::test]
    async fn empty_api_key_fails_before_network() {
        let provider = AlphaVantageProvider::new(Some(String::new()));
        let err = provider.fetch_quote("SHOP").await.unwrap_err();
        assert!(matches!(err, MarketDataError::ApiKeyMissing { .. }));
    }
}
