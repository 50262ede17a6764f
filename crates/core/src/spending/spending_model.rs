//! Aggregation output models.
//!
//! Plain data consumed by the presentation layer: numbers, ordered
//! sequences, and month-keyed mappings. No rendering logic lives here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Overall balance summary across all transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSummary {
    pub income: Decimal,
    pub expenses: Decimal,
    /// Always exactly `income - expenses`.
    pub balance: Decimal,
}

impl BalanceSummary {
    pub fn zero() -> Self {
        BalanceSummary {
            income: Decimal::ZERO,
            expenses: Decimal::ZERO,
            balance: Decimal::ZERO,
        }
    }
}

/// Expense total for one category.
///
/// Sequences of these keep first-encounter order, so chart labels stay
/// stable as transactions are added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
    pub transaction_count: i32,
}

/// Income/expense totals for one calendar month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotals {
    pub income: Decimal,
    pub expenses: Decimal,
}
