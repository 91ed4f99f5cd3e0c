//! Market data access for the classroom trading simulator.
//!
//! This crate owns everything that talks to the upstream quote provider:
//!
//! - [`provider`] - The [`QuoteProvider`] trait and the Alpha Vantage
//!   implementation used for TSX-listed equities
//! - [`models`] - Real-time quote and market status types
//! - [`symbols`] - TSX symbol normalization and provider symbol mapping
//! - [`errors`] - Provider error taxonomy
//!
//! Persistence and freshness decisions live in the core crate; this crate is
//! stateless I/O plus response parsing.

pub mod errors;
pub mod models;
pub mod provider;
pub mod symbols;

pub use errors::MarketDataError;
pub use models::{MarketStatus, RealTimeQuote};
pub use provider::{AlphaVantageProvider, QuoteProvider};
pub use symbols::{normalize_tsx, provider_symbol};
