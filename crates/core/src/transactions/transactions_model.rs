//! Transaction domain models.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a transaction adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

/// A single dated income or expense entry.
///
/// Immutable once created, except for deletion. The collection is ordered
/// newest-first by insertion, which is not necessarily date order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Millisecond timestamp taken at creation; unique within a store.
    pub id: i64,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }
}

/// Input model for creating a new transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub date: NaiveDate,
}

impl NewTransaction {
    /// Materializes the input into a transaction stamped with the current
    /// time as its id.
    pub fn into_transaction(self) -> Transaction {
        Transaction {
            id: Utc::now().timestamp_millis(),
            description: self.description,
            amount: self.amount,
            category: self.category,
            transaction_type: self.transaction_type,
            date: self.date,
        }
    }
}
