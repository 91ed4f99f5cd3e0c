//! Leaderboard module.
//!
//! Rankings are derived data: recomputed per query from holdings and fresh
//! prices, never persisted.

pub mod model;
pub mod service;


pub use model::LeaderboardEntry;
pub use service::{rank_valuations, LeaderboardService, LeaderboardServiceTrait};
