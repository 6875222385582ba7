//! Batch aggregation of revenue entries.
//!
//! Resolves compensation for every entry in a batch and accumulates the
//! exact element-wise totals alongside the per-entry results.

use rust_decimal::Decimal;

use crate::models::{
    BatchTotals, BracketTable, CompensationBracket, CompensationResult, ComponentTotals,
    RevenueEntry, RoleClass,
};

use super::compensation::resolve_compensation;

/// One entry of a batch together with the role class it resolves under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRow {
    /// The revenue entry to resolve.
    pub entry: RevenueEntry,
    /// The role class governing which bound pairs apply.
    pub role: RoleClass,
}

/// Per-entry results and exact totals for one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// One result per input row, in input order.
    pub results: Vec<CompensationResult>,
    /// Element-wise sums over the results and revenue components.
    pub totals: BatchTotals,
}

/// Resolves every row of a batch and aggregates the totals.
///
/// Each row's revenue total is resolved through the compensation table
/// under the row's role class. Totals are exact sums of the emitted
/// per-entry figures, so `totals.salary_total` always equals the sum of
/// `results[i].salary` and `totals.revenue_total` the sum of the entry
/// revenues. An empty batch yields empty results and all-zero totals.
pub fn aggregate_batch(
    rows: &[BatchRow],
    table: &BracketTable<CompensationBracket>,
) -> BatchOutcome {
    let mut results = Vec::with_capacity(rows.len());
    let mut revenue_total = Decimal::ZERO;
    let mut salary_total = Decimal::ZERO;
    let mut bonus_total = Decimal::ZERO;
    let mut components = ComponentTotals {
        activity: Decimal::ZERO,
        invoice: Decimal::ZERO,
        sales: Decimal::ZERO,
    };

    for row in rows {
        let revenue = row.entry.revenue_total();
        let outcome = resolve_compensation(revenue, table, row.role);

        revenue_total += revenue;
        salary_total += outcome.salary;
        bonus_total += outcome.bonus;
        components.activity += row.entry.activity_income;
        components.invoice += row.entry.invoice_income;
        components.sales += row.entry.sales_income;

        results.push(CompensationResult {
            entry_id: row.entry.id.clone(),
            revenue_total: revenue,
            salary: outcome.salary,
            bonus: outcome.bonus,
        });
    }

    BatchOutcome {
        results,
        totals: BatchTotals {
            revenue_total,
            salary_total,
            bonus_total,
            components,
        },
    }
}
