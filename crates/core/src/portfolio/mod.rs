//! Portfolio module.
//!
//! A portfolio here is a single-shot investment: one holding per student,
//! bought once, never averaged, added to, or sold.
//!
//! - [`model`] - Holding and valuation models
//! - [`store`] - Storage trait for holdings
//! - [`valuation`] - Pure valuation calculations
//! - [`service`] - Investment eligibility and performance reads
//! - [`errors`] - Portfolio error taxonomy

pub mod errors;
pub mod model;
pub mod service;
pub mod store;
pub mod valuation;


pub use errors::PortfolioError;
pub use model::{Holding, InvestmentPlan, NewHolding, Valuation};
pub use service::{PortfolioService, PortfolioServiceTrait};
pub use store::HoldingStore;
pub use valuation::valuate;
