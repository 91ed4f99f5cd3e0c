//! Simulation-wide constants.

use rust_decimal::Decimal;

/// Simulated funds every student starts with, in dollars.
///
/// Doubles as the budget ceiling for the single-shot investment: the total
/// cost of a new holding may never exceed this amount.
pub const STARTING_BALANCE: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);
