//! Service wiring.
//!
//! All state lives behind the repositories; the context is constructed once
//! at startup from those repositories and handed to callers. There is no
//! ambient global access.

use std::sync::Arc;

use crate::budgets::{BudgetRepositoryTrait, BudgetService, BudgetServiceTrait};
use crate::goals::{GoalRepositoryTrait, GoalService, GoalServiceTrait};
use crate::settings::{SettingsRepositoryTrait, SettingsService, SettingsServiceTrait};
use crate::snapshot::{SnapshotService, SnapshotServiceTrait};
use crate::spending::{SpendingService, SpendingServiceTrait};
use crate::transactions::{TransactionRepositoryTrait, TransactionService, TransactionServiceTrait};

/// The application's service graph.
pub struct ServiceContext {
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub spending_service: Arc<dyn SpendingServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub settings_service: Arc<dyn SettingsServiceTrait>,
    pub snapshot_service: Arc<dyn SnapshotServiceTrait>,
}

impl ServiceContext {
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        settings_repository: Arc<dyn SettingsRepositoryTrait>,
    ) -> Self {
        let spending_service: Arc<dyn SpendingServiceTrait> =
            Arc::new(SpendingService::new(transaction_repository.clone()));

        ServiceContext {
            transaction_service: Arc::new(TransactionService::new(transaction_repository.clone())),
            budget_service: Arc::new(BudgetService::new(
                budget_repository.clone(),
                spending_service.clone(),
            )),
            goal_service: Arc::new(GoalService::new(goal_repository.clone())),
            settings_service: Arc::new(SettingsService::new(settings_repository)),
            snapshot_service: Arc::new(SnapshotService::new(
                transaction_repository,
                budget_repository,
                goal_repository,
            )),
            spending_service,
        }
    }
}
