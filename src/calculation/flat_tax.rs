//! Legacy flat-bracket tax variant.
//!
//! Applies the containing bracket's rate to the whole taxable base instead
//! of accumulating per tranche. Kept for parity with display widgets that
//! still show a single headline rate; new callers use
//! [`accumulate_progressive_tax`](super::accumulate_progressive_tax).

use rust_decimal::Decimal;

use crate::models::{BracketLookup, BracketTable, RateBracket, TaxResult};

use super::rounding::round_to_unit;

/// Computes tax by applying a single bracket's rate to the entire base.
///
/// The base is looked up in the table and the containing bracket's rate is
/// applied to the whole amount. Bases above the last bracket use the last
/// bracket's rate; bases below the first bracket (or an empty table) owe
/// nothing. The amount due is rounded to a whole currency unit.
///
/// Unlike the marginal accumulator, this variant is discontinuous at
/// bracket boundaries: a base one unit into the next bracket jumps to the
/// higher rate on the full amount.
pub fn flat_bracket_tax(amount: Decimal, table: &BracketTable<RateBracket>) -> TaxResult {
    let percent = Decimal::from(100);
    let amount_due = match table.find(amount) {
        BracketLookup::BelowRange => Decimal::ZERO,
        BracketLookup::Within(bracket) | BracketLookup::AboveRange(bracket) => {
            amount * bracket.rate / percent
        }
    };

    TaxResult {
        taxable_amount: amount,
        amount_due: round_to_unit(amount_due),
    }
}
