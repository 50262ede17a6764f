//! Budgets module - per-category spending ceilings and their evaluation.

mod budgets_model;
mod budgets_service;
mod budgets_traits;

#[cfg(test)]
mod budgets_service_tests;

pub use budgets_model::{Budget, BudgetProgress, BudgetStatus};
pub use budgets_service::BudgetService;
pub use budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
