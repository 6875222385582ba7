//! Currency rounding policy.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to the nearest whole currency unit, with ties
/// rounded away from zero.
///
/// Every derived figure the engine emits (salary, bonus, tax due) passes
/// through this function exactly once; fractional units are never produced.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::round_to_unit;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_to_unit(Decimal::from_str("2.4").unwrap()), Decimal::from(2));
/// assert_eq!(round_to_unit(Decimal::from_str("2.5").unwrap()), Decimal::from(3));
/// assert_eq!(round_to_unit(Decimal::from_str("3000.0").unwrap()), Decimal::from(3000));
/// ```
pub fn round_to_unit(value: Decimal) -> Decimal {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}
