//! TSX symbol handling.
//!
//! All symbols in this system carry the Toronto Stock Exchange suffix
//! (`SHOP.TO`). The upstream provider uses its own exchange code (`SHOP.TRT`),
//! so symbols are translated at the adapter boundary and nowhere else.

/// Canonical TSX suffix carried by every symbol in the system.
pub const TSX_SUFFIX: &str = ".TO";

/// Exchange code the provider expects for Toronto-listed equities.
pub const PROVIDER_TSX_SUFFIX: &str = ".TRT";

/// Normalizes a user-supplied symbol to the canonical exchange-suffixed form.
///
/// Appends `.TO` when the suffix is absent and uppercases the base symbol.
///
/// # Examples
///
/// ```
/// use classtrade_market_data::symbols::normalize_tsx;
///
/// assert_eq!(normalize_tsx("SHOP"), "SHOP.TO");
/// assert_eq!(normalize_tsx("shop"), "SHOP.TO");
/// assert_eq!(normalize_tsx("SHOP.TO"), "SHOP.TO");
/// ```
pub fn normalize_tsx(symbol: &str) -> String {
    let upper = symbol.trim().to_uppercase();
    if upper.ends_with(TSX_SUFFIX) {
        upper
    } else {
        format!("{}{}", upper, TSX_SUFFIX)
    }
}

/// Derives the provider-side symbol from a canonical TSX symbol.
///
/// Strips the `.TO` suffix and appends the provider's Toronto exchange code.
pub fn provider_symbol(tsx_symbol: &str) -> String {
    let base = tsx_symbol.strip_suffix(TSX_SUFFIX).unwrap_or(tsx_symbol);
    format!("{}{}", base, PROVIDER_TSX_SUFFIX)
}
