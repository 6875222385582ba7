//! Compensation resolution by bracket interpolation.
//!
//! This module resolves a single revenue amount against a compensation
//! bracket table and a role class, producing a salary and a bonus by
//! linear interpolation between the containing bracket's bounds.

use rust_decimal::Decimal;

use crate::models::{BracketLookup, BracketTable, CompensationBracket, RoleClass};

use super::rounding::round_to_unit;

/// The salary and bonus resolved for one revenue amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompensationOutcome {
    /// The resolved salary, a non-negative whole currency amount.
    pub salary: Decimal,
    /// The resolved bonus, a non-negative whole currency amount.
    pub bonus: Decimal,
}

impl CompensationOutcome {
    /// The zero outcome produced for an empty bracket table.
    pub const ZERO: Self = Self {
        salary: Decimal::ZERO,
        bonus: Decimal::ZERO,
    };
}

/// Resolves a revenue amount into a salary and a bonus.
///
/// The amount is looked up in the table; within its bracket, salary and
/// bonus are linearly interpolated between the role class's bound pair:
///
/// ```text
/// ratio  = (amount - min) / (max - min)      (0 when max == min)
/// salary = round(salary_min + ratio * (salary_max - salary_min))
/// ```
///
/// Amounts below the first bracket clamp to the first bracket's `min`-side
/// values; amounts above the last bracket clamp to the last bracket's
/// `max`-side values (no extrapolation). An empty table yields zero salary
/// and zero bonus. The function is total: it never fails and never panics.
///
/// Negative amounts are a caller precondition violation; callers clamp to
/// zero before calling.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::resolve_compensation;
/// use compensation_engine::models::{BracketTable, RoleClass};
///
/// let table = BracketTable::empty();
/// let outcome = resolve_compensation(50000.into(), &table, RoleClass::Employee);
/// assert_eq!(outcome.salary, 0.into());
/// assert_eq!(outcome.bonus, 0.into());
/// ```
pub fn resolve_compensation(
    amount: Decimal,
    table: &BracketTable<CompensationBracket>,
    role: RoleClass,
) -> CompensationOutcome {
    match table.find(amount) {
        BracketLookup::BelowRange => match table.first() {
            Some(first) => {
                let (salary_min, _) = first.salary_bounds(role);
                let (bonus_min, _) = first.bonus_bounds(role);
                CompensationOutcome {
                    salary: round_to_unit(salary_min),
                    bonus: round_to_unit(bonus_min),
                }
            }
            None => CompensationOutcome::ZERO,
        },
        BracketLookup::AboveRange(last) => {
            let (_, salary_max) = last.salary_bounds(role);
            let (_, bonus_max) = last.bonus_bounds(role);
            CompensationOutcome {
                salary: round_to_unit(salary_max),
                bonus: round_to_unit(bonus_max),
            }
        }
        BracketLookup::Within(bracket) => {
            let ratio = interpolation_ratio(amount, bracket);
            let (salary_min, salary_max) = bracket.salary_bounds(role);
            let (bonus_min, bonus_max) = bracket.bonus_bounds(role);
            CompensationOutcome {
                salary: round_to_unit(salary_min + ratio * (salary_max - salary_min)),
                bonus: round_to_unit(bonus_min + ratio * (bonus_max - bonus_min)),
            }
        }
    }
}

/// Computes the position of `amount` within `bracket` as a ratio in `[0, 1]`.
///
/// A degenerate bracket (`max == min`) yields `0`. Amounts attached to a
/// bracket from a configuration gap clamp to `0`.
fn interpolation_ratio(amount: Decimal, bracket: &CompensationBracket) -> Decimal {
    let width = bracket.max - bracket.min;
    if width.is_zero() {
        return Decimal::ZERO;
    }
    let ratio = (amount - bracket.min) / width;
    ratio.clamp(Decimal::ZERO, Decimal::ONE)
}
