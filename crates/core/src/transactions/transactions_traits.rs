use super::transactions_filter::TransactionFilter;
use super::transactions_model::{NewTransaction, Transaction};
use crate::Result;

/// Trait defining the contract for transaction repository operations.
///
/// Implementations persist the full collection through to storage on every
/// mutation. The collection is kept newest-first by insertion.
pub trait TransactionRepositoryTrait: Send + Sync {
    fn load_transactions(&self) -> Result<Vec<Transaction>>;
    /// Prepends the transaction so the newest entry comes first.
    fn insert_transaction(&self, transaction: Transaction) -> Result<Transaction>;
    /// Returns the number of records removed (0 when the id is unknown).
    fn delete_transaction(&self, transaction_id: i64) -> Result<usize>;
    /// Replaces the entire collection, preserving the given order.
    fn replace_transactions(&self, transactions: Vec<Transaction>) -> Result<()>;
}

/// Trait defining the contract for transaction service operations.
pub trait TransactionServiceTrait: Send + Sync {
    fn get_transactions(&self) -> Result<Vec<Transaction>>;
    fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;
    /// Deleting an unknown id is a silent no-op.
    fn delete_transaction(&self, transaction_id: i64) -> Result<()>;
    fn search_transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>>;
}
