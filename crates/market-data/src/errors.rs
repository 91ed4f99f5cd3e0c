//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching data from the upstream provider.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// No API key is configured for the provider.
    /// Surfaced before any network call is attempted.
    #[error("API key is not configured for provider {provider}")]
    ApiKeyMissing {
        /// The provider that requires a key
        provider: String,
    },

    /// The requested symbol was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider rate limited the request (HTTP 429 or an in-band
    /// call-frequency marker in the response body).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider responded but the payload did not contain the expected
    /// quote object or a parseable price.
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    /// A network error occurred while communicating with the provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns true if this error is a configuration problem (missing or
    /// invalid credentials) rather than a transient upstream failure.
    ///
    /// Configuration errors are surfaced to the caller immediately; they are
    /// never masked by a stale-cache fallback.
    pub fn is_configuration(&self) -> bool {
        matches!(self, MarketDataError::ApiKeyMissing { .. })
    }

    /// Returns true if this error means the symbol itself is unknown to the
    /// provider, as opposed to the provider being unreachable.
    pub fn is_not_found(&self) -> bool {
        matches!(self, MarketDataError::SymbolNotFound(_))
    }
}
