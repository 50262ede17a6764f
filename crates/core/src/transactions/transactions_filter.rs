//! Transaction filter engine.
//!
//! Each populated field is an independent predicate; populated fields are
//! ANDed together. Filtering preserves the relative order of the input, and
//! an empty filter returns the input unchanged.

use serde::{Deserialize, Serialize};

use super::transactions_model::{Transaction, TransactionType};

/// Filter criteria for a transaction list view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilter {
    /// Exact category match.
    pub category: Option<String>,
    /// Exact type match.
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    /// Case-insensitive substring match against description or category.
    pub search: Option<String>,
}

impl TransactionFilter {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.transaction_type.is_none() && self.search.is_none()
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(ref category) = self.category {
            if transaction.category != *category {
                return false;
            }
        }

        if let Some(transaction_type) = self.transaction_type {
            if transaction.transaction_type != transaction_type {
                return false;
            }
        }

        if let Some(ref search) = self.search {
            let term = search.to_lowercase();
            let in_description = transaction.description.to_lowercase().contains(&term);
            let in_category = transaction.category.to_lowercase().contains(&term);
            if !in_description && !in_category {
                return false;
            }
        }

        true
    }
}

/// Applies the filter, preserving the original relative order.
pub fn filter_transactions(
    transactions: &[Transaction],
    filter: &TransactionFilter,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect()
}
