//! Report snapshot assembly.
//!
//! Combines a batch outcome, the configured tax tables, and the externally
//! supplied balance-sheet figures into one immutable [`ReportSnapshot`].

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{BracketTable, RateBracket, ReportSnapshot, TaxKind, TaxLine};

use super::batch::BatchOutcome;
use super::progressive_tax::accumulate_progressive_tax;

/// Externally supplied scalar figures a snapshot is assembled from.
///
/// These are declared values, not derived ones: the engine passes them
/// through unchanged and uses them only to derive profit and balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SnapshotFigures {
    /// The declared bank balance; the wealth tax base (clamped at zero).
    pub declared_balance: Decimal,
    /// Deductible expenses subtracted when deriving profit.
    pub deductible_expenses: Decimal,
    /// Withdrawals subtracted when deriving the net balance.
    pub withdrawals: Decimal,
    /// Commissions subtracted when deriving the net balance.
    pub commissions: Decimal,
    /// Inter-company invoices subtracted when deriving the net balance.
    pub inter_invoices: Decimal,
}

/// Assembles the immutable snapshot for one report computation.
///
/// Profit is revenue minus salaries, bonuses, and deductible expenses, and
/// may be negative; the corporate tax base clamps it at zero, as does the
/// wealth tax base for a negative declared balance. Two tax lines are
/// always emitted, corporate first. The snapshot is stamped with a fresh
/// report ID, the generation instant, and the engine version.
pub fn build_report_snapshot(
    batch: BatchOutcome,
    corporate_table: &BracketTable<RateBracket>,
    wealth_table: &BracketTable<RateBracket>,
    figures: SnapshotFigures,
) -> ReportSnapshot {
    let totals = batch.totals;
    let compensation_outflow = totals.salary_total + totals.bonus_total;

    let profit = totals.revenue_total - compensation_outflow - figures.deductible_expenses;
    let corporate_base = profit.max(Decimal::ZERO);
    let wealth_base = figures.declared_balance.max(Decimal::ZERO);

    let taxes = vec![
        TaxLine {
            kind: TaxKind::Corporate,
            result: accumulate_progressive_tax(corporate_base, corporate_table),
        },
        TaxLine {
            kind: TaxKind::Wealth,
            result: accumulate_progressive_tax(wealth_base, wealth_table),
        },
    ];

    let balance_after_salaries = figures.declared_balance - totals.salary_total;
    let net_balance = totals.revenue_total
        - compensation_outflow
        - figures.deductible_expenses
        - figures.withdrawals
        - figures.commissions
        - figures.inter_invoices;

    ReportSnapshot {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        totals,
        results: batch.results,
        taxes,
        declared_balance: figures.declared_balance,
        deductible_expenses: figures.deductible_expenses,
        withdrawals: figures.withdrawals,
        commissions: figures.commissions,
        inter_invoices: figures.inter_invoices,
        profit,
        balance_after_salaries,
        net_balance,
    }
}
