//! Transactions module - domain models, services, and traits.

mod transactions_filter;
mod transactions_model;
mod transactions_service;
mod transactions_traits;


pub use transactions_filter::{filter_transactions, TransactionFilter};
pub use transactions_model::{NewTransaction, Transaction, TransactionType};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
