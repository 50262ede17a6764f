//! Spending module - aggregated summaries derived from the transaction list.

mod spending_model;
mod spending_service;


pub use spending_model::{BalanceSummary, CategoryTotal, MonthlyTotals};
pub use spending_service::{
    balance, category_totals, expense_total_between, monthly_series, most_frequent_category,
    top_categories, SpendingService, SpendingServiceTrait,
};
