//! Keyed JSON blob storage implementation for Tally.
//!
//! The core crate only depends on a key-value contract: `load(key)` returns
//! a previously saved JSON value (or nothing), `save(key, value)` writes it
//! through immediately. This crate provides that contract
//! ([`KeyValueStore`]) with a file-backed implementation plus the
//! repository implementations of the `tally-core` traits. Each collection
//! lives under its own key, so one corrupt blob cannot take down the
//! others.

pub mod budgets;
pub mod errors;
pub mod goals;
pub mod settings;
pub mod store;
pub mod transactions;

pub use budgets::BudgetRepository;
pub use errors::StorageError;
pub use goals::GoalRepository;
pub use settings::SettingsRepository;
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use transactions::TransactionRepository;

use std::sync::Arc;
use tally_core::ServiceContext;

/// Wires a full service context over the given store.
pub fn build_context(store: Arc<dyn KeyValueStore>) -> ServiceContext {
    ServiceContext::new(
        Arc::new(TransactionRepository::new(store.clone())),
        Arc::new(BudgetRepository::new(store.clone())),
        Arc::new(GoalRepository::new(store.clone())),
        Arc::new(SettingsRepository::new(store)),
    )
}
