//! Budget domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A per-category spending ceiling.
///
/// The category is the unique key: setting an existing category overwrites
/// its limit, never duplicates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub category: String,
    pub limit: Decimal,
}

/// Progress status thresholds for budget display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    /// At or under 80% of the limit.
    Good,
    /// Over 80% but not over the limit.
    Warning,
    /// Over the limit.
    Over,
}

/// Spent-vs-budget evaluation for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProgress {
    pub category: String,
    pub spent: Decimal,
    pub limit: Decimal,
    /// `spent / limit * 100`, rounded to display precision.
    pub percentage: Decimal,
    pub status: BudgetStatus,
}
