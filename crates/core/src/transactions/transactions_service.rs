use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::transactions_filter::{filter_transactions, TransactionFilter};
use super::transactions_model::{NewTransaction, Transaction};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::ValidationError;
use crate::Result;

/// Service for managing transactions.
pub struct TransactionService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    pub fn new(transaction_repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self {
            transaction_repository,
        }
    }

    fn validate(new_transaction: &NewTransaction) -> Result<()> {
        if new_transaction.amount <= Decimal::zero() {
            return Err(ValidationError::InvalidAmount(format!(
                "transaction amount must be positive, got {}",
                new_transaction.amount
            ))
            .into());
        }
        Ok(())
    }
}

impl TransactionServiceTrait for TransactionService {
    fn get_transactions(&self) -> Result<Vec<Transaction>> {
        self.transaction_repository.load_transactions()
    }

    fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        Self::validate(&new_transaction)?;
        let transaction = new_transaction.into_transaction();
        debug!(
            "Creating transaction {} ({} {})",
            transaction.id, transaction.category, transaction.amount
        );
        self.transaction_repository.insert_transaction(transaction)
    }

    fn delete_transaction(&self, transaction_id: i64) -> Result<()> {
        let removed = self
            .transaction_repository
            .delete_transaction(transaction_id)?;
        if removed == 0 {
            debug!("Delete for unknown transaction id {}", transaction_id);
        }
        Ok(())
    }

    fn search_transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        let transactions = self.transaction_repository.load_transactions()?;

        // Blank filter fields coming from UI inputs impose no constraint.
        let normalized = TransactionFilter {
            category: filter.category.clone().filter(|c| !c.is_empty()),
            transaction_type: filter.transaction_type,
            search: filter.search.clone().filter(|s| !s.is_empty()),
        };

        if normalized.is_empty() {
            return Ok(transactions);
        }
        Ok(filter_transactions(&transactions, &normalized))
    }
}
