//! Report models for the Compensation and Progressive Taxation Engine.
//!
//! This module contains the derived, immutable result types produced by the
//! calculation modules: per-entry [`CompensationResult`]s, batch-level
//! [`BatchTotals`], per-base [`TaxResult`]s, and the [`ReportSnapshot`]
//! consumed by reporting collaborators.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The compensation derived for a single revenue entry.
///
/// One result is produced per entry, in input order. Results are pure
/// computation outputs: they carry no identity of their own and are
/// recomputed from scratch on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationResult {
    /// The ID of the entry this result was derived from.
    pub entry_id: String,
    /// The entry's total revenue (sum of its three components).
    pub revenue_total: Decimal,
    /// The resolved salary, a non-negative whole currency amount.
    pub salary: Decimal,
    /// The resolved bonus, a non-negative whole currency amount.
    pub bonus: Decimal,
}

/// Per-component revenue sums across a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentTotals {
    /// Sum of recurring-activity income across all entries.
    pub activity: Decimal,
    /// Sum of billed-invoice income across all entries.
    pub invoice: Decimal,
    /// Sum of sales income across all entries.
    pub sales: Decimal,
}

/// Aggregated totals for a batch of revenue entries.
///
/// Totals are element-wise sums of the per-entry results and components;
/// `revenue_total` always equals the sum of each entry's revenue exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchTotals {
    /// Sum of every entry's total revenue.
    pub revenue_total: Decimal,
    /// Sum of every resolved salary.
    pub salary_total: Decimal,
    /// Sum of every resolved bonus.
    pub bonus_total: Decimal,
    /// Per-component revenue breakdown.
    pub components: ComponentTotals,
}

/// The outcome of a tax accumulation over one taxable base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// The taxable base the accumulation ran over.
    pub taxable_amount: Decimal,
    /// The cumulative amount owed, rounded to a whole currency unit.
    pub amount_due: Decimal,
}

impl TaxResult {
    /// Returns the effective rate as a percentage of the taxable base, or
    /// zero when the base is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use compensation_engine::models::TaxResult;
    /// use rust_decimal::Decimal;
    ///
    /// let result = TaxResult {
    ///     taxable_amount: Decimal::from(200000),
    ///     amount_due: Decimal::from(20000),
    /// };
    /// assert_eq!(result.effective_rate(), Decimal::from(10));
    /// ```
    pub fn effective_rate(&self) -> Decimal {
        if self.taxable_amount.is_zero() {
            Decimal::ZERO
        } else {
            self.amount_due / self.taxable_amount * Decimal::from(100)
        }
    }
}

/// The taxable base a [`TaxLine`] applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxKind {
    /// Corporate tax on net profit.
    Corporate,
    /// Wealth tax on the declared bank balance.
    Wealth,
}

/// One named tax outcome inside a report snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLine {
    /// Which taxable base this line covers.
    pub kind: TaxKind,
    /// The accumulation outcome for that base.
    pub result: TaxResult,
}

/// The complete, immutable result of one report computation.
///
/// A snapshot assembles the batch totals, the per-entry compensation
/// results, the tax lines, and the externally supplied scalars into one
/// value object. Construction is the only operation; any change to the
/// inputs requires recomputation from scratch.
///
/// # Example
///
/// ```
/// use compensation_engine::models::{
///     BatchTotals, ComponentTotals, ReportSnapshot,
/// };
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let snapshot = ReportSnapshot {
///     report_id: Uuid::new_v4(),
///     generated_at: Utc::now(),
///     engine_version: "1.0.0".to_string(),
///     totals: BatchTotals {
///         revenue_total: Decimal::ZERO,
///         salary_total: Decimal::ZERO,
///         bonus_total: Decimal::ZERO,
///         components: ComponentTotals {
///             activity: Decimal::ZERO,
///             invoice: Decimal::ZERO,
///             sales: Decimal::ZERO,
///         },
///     },
///     results: vec![],
///     taxes: vec![],
///     declared_balance: Decimal::ZERO,
///     deductible_expenses: Decimal::ZERO,
///     withdrawals: Decimal::ZERO,
///     commissions: Decimal::ZERO,
///     inter_invoices: Decimal::ZERO,
///     profit: Decimal::ZERO,
///     balance_after_salaries: Decimal::ZERO,
///     net_balance: Decimal::ZERO,
/// };
/// assert!(snapshot.results.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSnapshot {
    /// Unique identifier for this report computation.
    pub report_id: Uuid,
    /// When the report was computed.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that computed the report.
    pub engine_version: String,
    /// Batch totals across all entries.
    pub totals: BatchTotals,
    /// Per-entry compensation results, in input order.
    pub results: Vec<CompensationResult>,
    /// Tax lines, one per configured taxable base.
    pub taxes: Vec<TaxLine>,
    /// The declared bank balance supplied by the caller.
    pub declared_balance: Decimal,
    /// Deductible expenses supplied by the caller.
    pub deductible_expenses: Decimal,
    /// Withdrawals supplied by the caller.
    pub withdrawals: Decimal,
    /// Commissions supplied by the caller.
    pub commissions: Decimal,
    /// Inter-company invoices supplied by the caller.
    pub inter_invoices: Decimal,
    /// Net profit: revenue minus salaries, bonuses, and deductible expenses.
    /// May be negative; the corporate tax base is clamped at zero.
    pub profit: Decimal,
    /// The declared balance minus total salaries.
    pub balance_after_salaries: Decimal,
    /// Running balance after every outflow: revenue minus salaries, bonuses,
    /// expenses, withdrawals, commissions, and inter-company invoices.
    pub net_balance: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_totals() -> BatchTotals {
        BatchTotals {
            revenue_total: dec("60000"),
            salary_total: dec("7300"),
            bonus_total: dec("1850"),
            components: ComponentTotals {
                activity: dec("25000"),
                invoice: dec("15000"),
                sales: dec("20000"),
            },
        }
    }

    #[test]
    fn test_effective_rate_of_zero_base_is_zero() {
        let result = TaxResult {
            taxable_amount: Decimal::ZERO,
            amount_due: Decimal::ZERO,
        };
        assert_eq!(result.effective_rate(), Decimal::ZERO);
    }

    #[test]
    fn test_effective_rate_is_percentage_of_base() {
        let result = TaxResult {
            taxable_amount: dec("50000"),
            amount_due: dec("7500"),
        };
        assert_eq!(result.effective_rate(), dec("15"));
    }

    #[test]
    fn test_tax_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&TaxKind::Corporate).unwrap(),
            "\"corporate\""
        );
        assert_eq!(serde_json::to_string(&TaxKind::Wealth).unwrap(), "\"wealth\"");
    }

    #[test]
    fn test_compensation_result_serialization() {
        let result = CompensationResult {
            entry_id: "row_001".to_string(),
            revenue_total: dec("35000"),
            salary: dec("3200"),
            bonus: dec("850"),
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"entry_id\":\"row_001\""));
        assert!(json.contains("\"revenue_total\":\"35000\""));
        assert!(json.contains("\"salary\":\"3200\""));
        assert!(json.contains("\"bonus\":\"850\""));
    }

    #[test]
    fn test_batch_totals_deserialization() {
        let json = r#"{
            "revenue_total": "60000",
            "salary_total": "7300",
            "bonus_total": "1850",
            "components": {
                "activity": "25000",
                "invoice": "15000",
                "sales": "20000"
            }
        }"#;

        let totals: BatchTotals = serde_json::from_str(json).unwrap();
        assert_eq!(totals, create_sample_totals());
    }

    #[test]
    fn test_report_snapshot_serialization() {
        let snapshot = ReportSnapshot {
            report_id: Uuid::nil(),
            generated_at: DateTime::parse_from_rfc3339("2026-01-15T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "1.0.0".to_string(),
            totals: create_sample_totals(),
            results: vec![CompensationResult {
                entry_id: "row_001".to_string(),
                revenue_total: dec("35000"),
                salary: dec("3200"),
                bonus: dec("850"),
            }],
            taxes: vec![TaxLine {
                kind: TaxKind::Corporate,
                result: TaxResult {
                    taxable_amount: dec("45850"),
                    amount_due: dec("6878"),
                },
            }],
            declared_balance: dec("120000"),
            deductible_expenses: dec("5000"),
            withdrawals: dec("2000"),
            commissions: dec("0"),
            inter_invoices: dec("0"),
            profit: dec("45850"),
            balance_after_salaries: dec("112700"),
            net_balance: dec("43850"),
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"report_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"engine_version\":\"1.0.0\""));
        assert!(json.contains("\"taxes\":["));
        assert!(json.contains("\"kind\":\"corporate\""));
        assert!(json.contains("\"profit\":\"45850\""));
    }

    #[test]
    fn test_report_snapshot_deserialization() {
        let json = r#"{
            "report_id": "12345678-1234-1234-1234-123456789012",
            "generated_at": "2026-01-15T10:00:00Z",
            "engine_version": "1.0.0",
            "totals": {
                "revenue_total": "0",
                "salary_total": "0",
                "bonus_total": "0",
                "components": { "activity": "0", "invoice": "0", "sales": "0" }
            },
            "results": [],
            "taxes": [],
            "declared_balance": "0",
            "deductible_expenses": "0",
            "withdrawals": "0",
            "commissions": "0",
            "inter_invoices": "0",
            "profit": "0",
            "balance_after_salaries": "0",
            "net_balance": "0"
        }"#;

        let snapshot: ReportSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.engine_version, "1.0.0");
        assert!(snapshot.results.is_empty());
        assert!(snapshot.taxes.is_empty());
    }

    #[test]
    fn test_totals_equal_sum_of_results() {
        let results = vec![
            CompensationResult {
                entry_id: "row_001".to_string(),
                revenue_total: dec("35000"),
                salary: dec("3200"),
                bonus: dec("850"),
            },
            CompensationResult {
                entry_id: "row_002".to_string(),
                revenue_total: dec("25000"),
                salary: dec("3000"),
                bonus: dec("750"),
            },
        ];

        let salary_sum: Decimal = results.iter().map(|r| r.salary).sum();
        let revenue_sum: Decimal = results.iter().map(|r| r.revenue_total).sum();
        assert_eq!(salary_sum, dec("6200"));
        assert_eq!(revenue_sum, dec("60000"));
    }
}
