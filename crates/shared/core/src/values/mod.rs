use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

/// Unit price - uses Decimal for precision
pub type Price = Decimal;

/// Currency amount (line totals, grand totals, interest)
pub type Money = Decimal;

/// Number of units sold or ordered
pub type Units = u32;

/// Stock on hand. Signed: negative levels are accepted as-is.
pub type StockLevel = i64;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Format an amount with exactly two decimal places.
///
/// Midpoints round away from zero, so `0.125` prints as `0.13`.
pub fn fixed_2dp(amount: Money) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}
