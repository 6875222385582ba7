//! Progressive (marginal) tax accumulation.
//!
//! This module computes the cumulative amount owed over an ordered table of
//! rate brackets: each bracket's rate applies only to the tranche of the
//! taxable base that falls within that bracket. The same accumulator is
//! reused for corporate tax (base = net profit) and wealth tax (base =
//! declared balance); only the configured table differs.

use rust_decimal::Decimal;

use crate::models::{BracketTable, RateBracket, TaxResult};

use super::rounding::round_to_unit;

/// Accumulates progressive tax over a taxable base.
///
/// Brackets are consumed in ascending order. For each bracket the tranche
/// `min(remaining, bracket width)` is taxed at the bracket's rate; an
/// open-ended final bracket consumes the whole remainder. Accumulation
/// stops once the base is exhausted. The final amount due is rounded to a
/// whole currency unit.
///
/// The accumulator assumes the table is contiguous and anchored at zero;
/// the configuration loader enforces this at load time (a mis-configured
/// table yields an approximation, never a panic). An empty table yields
/// zero due. Negative amounts are a caller precondition violation; callers
/// clamp to zero before calling.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::accumulate_progressive_tax;
/// use compensation_engine::models::{BracketTable, RateBracket};
/// use rust_decimal::Decimal;
///
/// let table = BracketTable::new(vec![
///     RateBracket { min: 0.into(), max: Some(50000.into()), rate: 15.into() },
///     RateBracket { min: 50000.into(), max: None, rate: 25.into() },
/// ]).unwrap();
///
/// // 50000 * 15% + 10000 * 25% = 7500 + 2500
/// let result = accumulate_progressive_tax(60000.into(), &table);
/// assert_eq!(result.amount_due, Decimal::from(10000));
/// ```
pub fn accumulate_progressive_tax(
    amount: Decimal,
    table: &BracketTable<RateBracket>,
) -> TaxResult {
    let mut remaining = amount;
    let mut amount_due = Decimal::ZERO;
    let percent = Decimal::from(100);

    for bracket in table.brackets() {
        if remaining <= Decimal::ZERO {
            break;
        }

        let tranche = match bracket.width() {
            Some(width) => remaining.min(width),
            None => remaining,
        };
        amount_due += tranche * bracket.rate / percent;
        remaining -= tranche;
    }

    TaxResult {
        taxable_amount: amount,
        amount_due: round_to_unit(amount_due),
    }
}
