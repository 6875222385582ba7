//! Request types for the compensation engine API.
//!
//! This module defines the JSON request structures for the `/report` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::BatchRow;
use crate::models::{RevenueEntry, RoleClass};

/// Request body for the `/report` endpoint.
///
/// Contains the revenue rows to resolve and the declared balance-sheet
/// figures the report is derived from. Every omitted figure defaults to
/// zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The revenue rows for the reporting period.
    pub rows: Vec<RowRequest>,
    /// The declared bank balance.
    pub declared_balance: Decimal,
    /// Deductible expenses for the period.
    #[serde(default)]
    pub deductible_expenses: Decimal,
    /// Withdrawals taken during the period.
    #[serde(default)]
    pub withdrawals: Decimal,
    /// Commissions paid out during the period.
    #[serde(default)]
    pub commissions: Decimal,
    /// Inter-company invoices settled during the period.
    #[serde(default)]
    pub inter_invoices: Decimal,
}

/// One revenue row in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowRequest {
    /// Unique identifier for the row.
    pub id: String,
    /// Display name for the row.
    pub name: String,
    /// The role class governing which compensation bounds apply.
    pub role_class: RoleClass,
    /// Income from recurring activity.
    #[serde(default)]
    pub activity_income: Decimal,
    /// Income from billed invoices.
    #[serde(default)]
    pub invoice_income: Decimal,
    /// Income from sales.
    #[serde(default)]
    pub sales_income: Decimal,
}

impl From<RowRequest> for BatchRow {
    fn from(req: RowRequest) -> Self {
        BatchRow {
            entry: RevenueEntry {
                id: req.id,
                name: req.name,
                activity_income: req.activity_income,
                invoice_income: req.invoice_income,
                sales_income: req.sales_income,
            },
            role: req.role_class,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_report_request() {
        let json = r#"{
            "rows": [
                {
                    "id": "row_001",
                    "name": "Alice",
                    "role_class": "employee",
                    "activity_income": "15000",
                    "invoice_income": "5000",
                    "sales_income": "5000"
                }
            ],
            "declared_balance": "120000",
            "deductible_expenses": "5000"
        }"#;

        let request: ReportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.rows.len(), 1);
        assert_eq!(request.rows[0].id, "row_001");
        assert_eq!(request.rows[0].role_class, RoleClass::Employee);
        assert_eq!(request.declared_balance, dec("120000"));
        assert_eq!(request.deductible_expenses, dec("5000"));
    }

    #[test]
    fn test_omitted_figures_default_to_zero() {
        let json = r#"{
            "rows": [],
            "declared_balance": "0"
        }"#;

        let request: ReportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.deductible_expenses, Decimal::ZERO);
        assert_eq!(request.withdrawals, Decimal::ZERO);
        assert_eq!(request.commissions, Decimal::ZERO);
        assert_eq!(request.inter_invoices, Decimal::ZERO);
    }

    #[test]
    fn test_omitted_income_components_default_to_zero() {
        let json = r#"{
            "id": "row_002",
            "name": "Bob",
            "role_class": "patron",
            "sales_income": "10000"
        }"#;

        let row: RowRequest = serde_json::from_str(json).unwrap();
        assert_eq!(row.activity_income, Decimal::ZERO);
        assert_eq!(row.invoice_income, Decimal::ZERO);
        assert_eq!(row.sales_income, dec("10000"));
    }

    #[test]
    fn test_row_conversion() {
        let req = RowRequest {
            id: "row_001".to_string(),
            name: "Alice".to_string(),
            role_class: RoleClass::Patron,
            activity_income: dec("15000"),
            invoice_income: dec("5000"),
            sales_income: dec("5000"),
        };

        let row: BatchRow = req.into();
        assert_eq!(row.entry.id, "row_001");
        assert_eq!(row.entry.revenue_total(), dec("25000"));
        assert_eq!(row.role, RoleClass::Patron);
    }
}
