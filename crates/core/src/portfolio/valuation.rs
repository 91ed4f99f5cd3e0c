//! Pure valuation calculations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::errors::PortfolioError;
use super::model::{Holding, Valuation};
use crate::quotes::StockQuote;

/// Computes the current performance of a holding against a quote.
///
/// Pure function of its inputs; no rounding is applied beyond `Decimal`'s
/// natural precision (display formatting is a UI concern).
///
/// # Errors
///
/// - [`PortfolioError::SymbolMismatch`] if the quote is for a different
///   symbol than the holding (caller contract violation)
/// - [`PortfolioError::ZeroInitialValue`] if the holding's initial value is
///   zero (a return percentage would divide by it)
pub fn valuate(
    holding: &Holding,
    quote: &StockQuote,
    now: DateTime<Utc>,
) -> Result<Valuation, PortfolioError> {
    if holding.stock_symbol != quote.symbol {
        return Err(PortfolioError::SymbolMismatch {
            holding: holding.stock_symbol.clone(),
            quote: quote.symbol.clone(),
        });
    }
    if holding.initial_value.is_zero() {
        return Err(PortfolioError::ZeroInitialValue);
    }

    let current_value = Decimal::from(holding.shares) * quote.current_price;
    let total_return = current_value - holding.initial_value;
    let return_percentage = total_return / holding.initial_value * Decimal::ONE_HUNDRED;
    let days_held = (now - holding.purchase_date).num_days();

    Ok(Valuation {
        user_id: holding.user_id,
        stock_symbol: holding.stock_symbol.clone(),
        shares: holding.shares,
        initial_value: holding.initial_value,
        current_price: quote.current_price,
        current_value,
        total_return,
        return_percentage,
        days_held,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use classtrade_market_data::MarketStatus;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn holding(shares: i64, purchase_price: Decimal, purchase_date: DateTime<Utc>) -> Holding {
        Holding {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            stock_symbol: "SHOP.TO".to_string(),
            purchase_price,
            shares,
            initial_value: Decimal::from(shares) * purchase_price,
            purchase_date,
        }
    }

    fn quote(symbol: &str, price: Decimal) -> StockQuote {
        StockQuote {
            symbol: symbol.to_string(),
            company_name: None,
            current_price: price,
            previous_close: price,
            day_change: Decimal::ZERO,
            day_change_percent: Decimal::ZERO,
            market_status: MarketStatus::Open,
            last_updated: Some(Utc::now()),
        }
    }

    #[test]
    fn computes_value_return_and_percentage() {
        // 1170 shares bought at 85.50 (initial 100035.00), now at 88.25.
        let now = Utc::now();
        let h = holding(1170, dec!(85.50), now - Duration::days(10));
        let v = valuate(&h, &quote("SHOP.TO", dec!(88.25)), now).unwrap();

        assert_eq!(v.current_value, dec!(103252.50));
        assert_eq!(v.total_return, dec!(3217.50));
        // ~3.22%
        assert_eq!(v.return_percentage.round_dp(2), dec!(3.22));
        assert_eq!(v.days_held, 10);
    }

    #[test]
    fn negative_return_when_price_drops() {
        let now = Utc::now();
        let h = holding(100, dec!(50.00), now - Duration::days(3));
        let v = valuate(&h, &quote("SHOP.TO", dec!(45.00)), now).unwrap();

        assert_eq!(v.current_value, dec!(4500.00));
        assert_eq!(v.total_return, dec!(-500.00));
        assert_eq!(v.return_percentage, dec!(-10.00));
    }

    #[test]
    fn days_held_floors_partial_days() {
        let now = Utc::now();
        let h = holding(10, dec!(10.00), now - Duration::hours(47));
        let v = valuate(&h, &quote("SHOP.TO", dec!(10.00)), now).unwrap();
        assert_eq!(v.days_held, 1);
    }

    #[test]
    fn symbol_mismatch_is_rejected() {
        let now = Utc::now();
        let h = holding(10, dec!(10.00), now);
        let err = valuate(&h, &quote("RY.TO", dec!(10.00)), now).unwrap_err();
        assert!(matches!(err, PortfolioError::SymbolMismatch { .. }));
    }

    #[test]
    fn zero_initial_value_is_rejected() {
        let now = Utc::now();
        let mut h = holding(10, dec!(10.00), now);
        h.initial_value = Decimal::ZERO;
        let err = valuate(&h, &quote("SHOP.TO", dec!(10.00)), now).unwrap_err();
        assert!(matches!(err, PortfolioError::ZeroInitialValue));
    }
}
