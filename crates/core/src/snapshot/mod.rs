//! Snapshot module - full-state JSON export and import.

mod snapshot_model;
mod snapshot_service;

#[cfg(test)]
mod snapshot_service_tests;

pub use snapshot_model::Snapshot;
pub use snapshot_service::{SnapshotService, SnapshotServiceTrait};
