use super::budgets_model::{Budget, BudgetProgress};
use crate::Result;

/// Trait defining the contract for budget repository operations.
pub trait BudgetRepositoryTrait: Send + Sync {
    fn load_budgets(&self) -> Result<Vec<Budget>>;
    /// Inserts or overwrites the budget for its category.
    fn upsert_budget(&self, budget: Budget) -> Result<Budget>;
    /// Returns the number of records removed (0 when the category is unknown).
    fn delete_budget(&self, category: &str) -> Result<usize>;
    fn replace_budgets(&self, budgets: Vec<Budget>) -> Result<()>;
}

/// Trait defining the contract for budget service operations.
pub trait BudgetServiceTrait: Send + Sync {
    fn get_budgets(&self) -> Result<Vec<Budget>>;
    fn set_budget(&self, category: &str, limit: rust_decimal::Decimal) -> Result<Budget>;
    /// Removing an unknown category is a silent no-op.
    fn remove_budget(&self, category: &str) -> Result<()>;
    /// Evaluates every budget against current expense totals.
    fn get_budget_progress(&self) -> Result<Vec<BudgetProgress>>;
}
