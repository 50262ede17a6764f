use std::sync::Arc;

use tally_core::transactions::{Transaction, TransactionRepositoryTrait};
use tally_core::Result;

use crate::store::{load_collection, save_collection, KeyValueStore};

const STORE_KEY: &str = "transactions";

/// Transaction collection persisted as a single JSON array, newest first.
pub struct TransactionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl TransactionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        TransactionRepository { store }
    }
}

impl TransactionRepositoryTrait for TransactionRepository {
    fn load_transactions(&self) -> Result<Vec<Transaction>> {
        load_collection(self.store.as_ref(), STORE_KEY)
    }

    fn insert_transaction(&self, transaction: Transaction) -> Result<Transaction> {
        let mut transactions: Vec<Transaction> = load_collection(self.store.as_ref(), STORE_KEY)?;
        transactions.insert(0, transaction.clone());
        save_collection(self.store.as_ref(), STORE_KEY, &transactions)?;
        Ok(transaction)
    }

    fn delete_transaction(&self, transaction_id: i64) -> Result<usize> {
        let mut transactions: Vec<Transaction> = load_collection(self.store.as_ref(), STORE_KEY)?;
        let before = transactions.len();
        transactions.retain(|t| t.id != transaction_id);
        let removed = before - transactions.len();
        if removed > 0 {
            save_collection(self.store.as_ref(), STORE_KEY, &transactions)?;
        }
        Ok(removed)
    }

    fn replace_transactions(&self, transactions: Vec<Transaction>) -> Result<()> {
        save_collection(self.store.as_ref(), STORE_KEY, &transactions)
    }
}
