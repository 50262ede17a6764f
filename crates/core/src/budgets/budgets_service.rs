use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use super::budgets_model::{Budget, BudgetProgress, BudgetStatus};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::ValidationError;
use crate::spending::SpendingServiceTrait;
use crate::Result;

pub struct BudgetService {
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    spending_service: Arc<dyn SpendingServiceTrait>,
}

impl BudgetService {
    pub fn new(
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        spending_service: Arc<dyn SpendingServiceTrait>,
    ) -> Self {
        BudgetService {
            budget_repository,
            spending_service,
        }
    }

    /// Evaluates one budget against the amount already spent.
    ///
    /// A non-positive stored limit makes the percentage undefined and is
    /// reported as a validation error rather than a silent infinity;
    /// `set_budget` rejects such limits so this only fires on tampered data.
    pub fn evaluate(budget: &Budget, spent: Decimal) -> Result<BudgetProgress> {
        if budget.limit <= Decimal::zero() {
            return Err(ValidationError::InvalidAmount(format!(
                "budget limit for '{}' must be positive, got {}",
                budget.category, budget.limit
            ))
            .into());
        }

        // Status comes from the exact ratio; rounding is display-only and
        // must not pull a value back under a threshold.
        let percentage = spent / budget.limit * dec!(100);
        let status = if percentage > dec!(100) {
            BudgetStatus::Over
        } else if percentage > dec!(80) {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Good
        };

        Ok(BudgetProgress {
            category: budget.category.clone(),
            spent,
            limit: budget.limit,
            percentage: percentage.round_dp(DISPLAY_DECIMAL_PRECISION),
            status,
        })
    }
}

impl BudgetServiceTrait for BudgetService {
    fn get_budgets(&self) -> Result<Vec<Budget>> {
        self.budget_repository.load_budgets()
    }

    fn set_budget(&self, category: &str, limit: Decimal) -> Result<Budget> {
        if category.trim().is_empty() {
            return Err(ValidationError::MissingField("category".to_string()).into());
        }
        if limit <= Decimal::zero() {
            return Err(ValidationError::InvalidAmount(format!(
                "budget limit must be positive, got {}",
                limit
            ))
            .into());
        }

        debug!("Setting budget {} = {}", category, limit);
        self.budget_repository.upsert_budget(Budget {
            category: category.to_string(),
            limit,
        })
    }

    fn remove_budget(&self, category: &str) -> Result<()> {
        let removed = self.budget_repository.delete_budget(category)?;
        if removed == 0 {
            debug!("Remove for unknown budget category '{}'", category);
        }
        Ok(())
    }

    fn get_budget_progress(&self) -> Result<Vec<BudgetProgress>> {
        let budgets = self.budget_repository.load_budgets()?;
        let totals = self.spending_service.get_category_totals()?;

        budgets
            .iter()
            .map(|budget| {
                let spent = totals
                    .iter()
                    .find(|t| t.category == budget.category)
                    .map(|t| t.amount)
                    .unwrap_or(Decimal::ZERO);
                Self::evaluate(budget, spent)
            })
            .collect()
    }
}
