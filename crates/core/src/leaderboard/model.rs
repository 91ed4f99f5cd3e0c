//! Leaderboard models.

use serde::{Deserialize, Serialize};

use crate::portfolio::Valuation;

/// One row of a leaderboard: a valuation with its assigned position.
///
/// Ranks are strictly sequential 1..N in sort order; exact ties on return
/// percentage still receive distinct ranks, ordered by user id for
/// reproducibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based position in the ranking.
    pub rank: u32,
    #[serde(flatten)]
    pub valuation: Valuation,
}
