use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::budgets::Budget;
use crate::goals::Goal;
use crate::transactions::Transaction;

/// Full application state serialized as a single JSON document, produced
/// for download and accepted back on import.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub exported_at: DateTime<Utc>,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<Goal>,
}
