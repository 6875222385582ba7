//! Revenue entry model.
//!
//! This module defines the [`RevenueEntry`] struct representing one
//! individual's reported income for a period, split into three additive
//! components.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One individual's reported revenue for a period.
///
/// Revenue is split into three additive components: recurring-activity
/// income, billed-invoice income, and sales income. The entry total is
/// always the sum of the three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// Display name of the individual the entry belongs to.
    pub name: String,
    /// Recurring-activity income for the period.
    pub activity_income: Decimal,
    /// Billed-invoice income for the period.
    pub invoice_income: Decimal,
    /// Sales income for the period.
    pub sales_income: Decimal,
}

impl RevenueEntry {
    /// Returns the total revenue for this entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use compensation_engine::models::RevenueEntry;
    /// use rust_decimal::Decimal;
    ///
    /// let entry = RevenueEntry {
    ///     id: "row_001".to_string(),
    ///     name: "Jean Dupont".to_string(),
    ///     activity_income: Decimal::from(15000),
    ///     invoice_income: Decimal::from(8000),
    ///     sales_income: Decimal::from(12000),
    /// };
    /// assert_eq!(entry.revenue_total(), Decimal::from(35000));
    /// ```
    pub fn revenue_total(&self) -> Decimal {
        self.activity_income + self.invoice_income + self.sales_income
    }
}
