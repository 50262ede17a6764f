//! Goal domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A savings target with accumulated progress.
///
/// `current` is clamped to `[0, target]` on creation and on every update;
/// the clamp is an enforcement, not a validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Millisecond timestamp taken at creation; unique within a store.
    pub id: i64,
    pub name: String,
    pub target: Decimal,
    pub current: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Clamps a candidate progress amount into `[0, target]`.
    pub fn clamp_amount(&self, amount: Decimal) -> Decimal {
        amount.max(Decimal::ZERO).min(self.target)
    }
}

/// Input model for creating a new goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub target: Decimal,
    /// Optional starting progress, clamped into `[0, target]`.
    #[serde(default)]
    pub initial: Option<Decimal>,
}

/// Completion evaluation for one goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: i64,
    pub name: String,
    pub current: Decimal,
    pub target: Decimal,
    /// `current / target * 100`, always in `[0, 100]` given the clamp.
    pub percentage: Decimal,
}
