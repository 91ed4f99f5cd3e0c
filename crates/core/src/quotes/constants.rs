//! Price cache configuration constants.

/// Maximum age of a cached quote before it is considered stale and refetched.
///
/// Matches the "delayed quote" disclaimer shown to students: prices may lag
/// the market by up to this long.
pub const STALE_THRESHOLD_MINUTES: i64 = 15;

/// Default result cap for stock catalog listings.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Default result cap for symbol/company searches.
pub const DEFAULT_SEARCH_LIMIT: i64 = 20;
