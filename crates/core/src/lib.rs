//! Tally Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Tally: transaction,
//! budget, goal, and settings stores, the spending aggregator, and the
//! snapshot export/import service. It is storage-agnostic and defines
//! traits that are implemented by the `storage-json` crate.

pub mod budgets;
pub mod constants;
pub mod context;
pub mod errors;
pub mod goals;
pub mod settings;
pub mod snapshot;
pub mod spending;
pub mod transactions;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

pub use context::ServiceContext;
