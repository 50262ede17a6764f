use chrono::Utc;
use log::debug;
use std::sync::Arc;

use super::snapshot_model::Snapshot;
use crate::budgets::BudgetRepositoryTrait;
use crate::goals::GoalRepositoryTrait;
use crate::transactions::TransactionRepositoryTrait;
use crate::Result;

/// Trait defining the contract for snapshot export/import.
pub trait SnapshotServiceTrait: Send + Sync {
    fn export(&self) -> Result<Snapshot>;
    fn export_json(&self) -> Result<String>;
    /// Replaces all collections with the snapshot contents.
    fn restore(&self, snapshot: Snapshot) -> Result<()>;
    fn import_json(&self, json: &str) -> Result<Snapshot>;
}

pub struct SnapshotService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    goal_repository: Arc<dyn GoalRepositoryTrait>,
}

impl SnapshotService {
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
    ) -> Self {
        SnapshotService {
            transaction_repository,
            budget_repository,
            goal_repository,
        }
    }
}

impl SnapshotServiceTrait for SnapshotService {
    fn export(&self) -> Result<Snapshot> {
        Ok(Snapshot {
            exported_at: Utc::now(),
            transactions: self.transaction_repository.load_transactions()?,
            budgets: self.budget_repository.load_budgets()?,
            goals: self.goal_repository.load_goals()?,
        })
    }

    fn export_json(&self) -> Result<String> {
        let snapshot = self.export()?;
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }

    fn restore(&self, snapshot: Snapshot) -> Result<()> {
        debug!(
            "Restoring snapshot from {} ({} transactions, {} budgets, {} goals)",
            snapshot.exported_at,
            snapshot.transactions.len(),
            snapshot.budgets.len(),
            snapshot.goals.len()
        );
        self.transaction_repository
            .replace_transactions(snapshot.transactions)?;
        self.budget_repository.replace_budgets(snapshot.budgets)?;
        self.goal_repository.replace_goals(snapshot.goals)?;
        Ok(())
    }

    fn import_json(&self, json: &str) -> Result<Snapshot> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        self.restore(snapshot.clone())?;
        Ok(snapshot)
    }
}
