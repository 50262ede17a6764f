//! Spending aggregator.
//!
//! The free functions are pure recomputations over a transaction slice;
//! there is no cached incremental state to keep consistent. The service
//! wraps them behind the transaction repository for callers that hold a
//! [`ServiceContext`](crate::ServiceContext).

use chrono::{Datelike, Days, Months, NaiveDate};
use log::debug;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use super::spending_model::{BalanceSummary, CategoryTotal, MonthlyTotals};
use crate::constants::WEEK_WINDOW_DAYS;
use crate::transactions::{Transaction, TransactionRepositoryTrait};
use crate::{Error, Result};

/// Sums income and expenses and their difference. Empty input yields zeros.
pub fn balance(transactions: &[Transaction]) -> BalanceSummary {
    let mut summary = BalanceSummary::zero();
    for transaction in transactions {
        if transaction.is_income() {
            summary.income += transaction.amount;
        } else {
            summary.expenses += transaction.amount;
        }
    }
    summary.balance = summary.income - summary.expenses;
    summary
}

/// Per-category expense totals in first-encounter order.
///
/// Income transactions are ignored; the result feeds the category breakdown
/// and chart data.
pub fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        match positions.get(&transaction.category) {
            Some(&index) => {
                totals[index].amount += transaction.amount;
                totals[index].transaction_count += 1;
            }
            None => {
                positions.insert(transaction.category.clone(), totals.len());
                totals.push(CategoryTotal {
                    category: transaction.category.clone(),
                    amount: transaction.amount,
                    transaction_count: 1,
                });
            }
        }
    }

    totals
}

/// Top `n` expense categories, descending by total.
///
/// Ties keep first-encounter order (stable sort).
pub fn top_categories(transactions: &[Transaction], n: usize) -> Vec<CategoryTotal> {
    let mut totals = category_totals(transactions);
    totals.sort_by(|a, b| b.amount.cmp(&a.amount));
    totals.truncate(n);
    totals
}

/// Income/expense totals bucketed by calendar month of the transaction
/// date, keyed `YYYY-MM`. The `BTreeMap` keeps keys in lexicographic order,
/// which is chronological for zero-padded ISO month keys.
pub fn monthly_series(transactions: &[Transaction]) -> BTreeMap<String, MonthlyTotals> {
    let mut series: BTreeMap<String, MonthlyTotals> = BTreeMap::new();
    for transaction in transactions {
        let entry = series.entry(month_key(transaction.date)).or_default();
        if transaction.is_income() {
            entry.income += transaction.amount;
        } else {
            entry.expenses += transaction.amount;
        }
    }
    series
}

/// Sum of expense amounts with `start <= date <= end` (both inclusive).
pub fn expense_total_between(
    transactions: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.is_expense() && t.date >= start && t.date <= end)
        .map(|t| t.amount)
        .sum()
}

/// Category with the most transactions of either type, ties broken by
/// first-encounter order. `None` for an empty list.
pub fn most_frequent_category(transactions: &[Transaction]) -> Option<String> {
    let mut counts: Vec<(String, u32)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for transaction in transactions {
        match positions.get(&transaction.category) {
            Some(&index) => counts[index].1 += 1,
            None => {
                positions.insert(transaction.category.clone(), counts.len());
                counts.push((transaction.category.clone(), 1));
            }
        }
    }

    counts
        .into_iter()
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
        .map(|(category, _)| category)
}

fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Trait defining the contract for the spending service.
pub trait SpendingServiceTrait: Send + Sync {
    fn get_balance(&self) -> Result<BalanceSummary>;
    fn get_category_totals(&self) -> Result<Vec<CategoryTotal>>;
    fn get_top_categories(&self, n: usize) -> Result<Vec<CategoryTotal>>;
    fn get_monthly_series(&self) -> Result<BTreeMap<String, MonthlyTotals>>;
    fn spent_last_week(&self, today: NaiveDate) -> Result<Decimal>;
    fn spent_last_month(&self, today: NaiveDate) -> Result<Decimal>;
    fn get_most_frequent_category(&self) -> Result<Option<String>>;
}

pub struct SpendingService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl SpendingService {
    pub fn new(transaction_repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        SpendingService {
            transaction_repository,
        }
    }
}

impl SpendingServiceTrait for SpendingService {
    fn get_balance(&self) -> Result<BalanceSummary> {
        debug!("Computing balance summary");
        let transactions = self.transaction_repository.load_transactions()?;
        Ok(balance(&transactions))
    }

    fn get_category_totals(&self) -> Result<Vec<CategoryTotal>> {
        let transactions = self.transaction_repository.load_transactions()?;
        Ok(category_totals(&transactions))
    }

    fn get_top_categories(&self, n: usize) -> Result<Vec<CategoryTotal>> {
        let transactions = self.transaction_repository.load_transactions()?;
        Ok(top_categories(&transactions, n))
    }

    fn get_monthly_series(&self) -> Result<BTreeMap<String, MonthlyTotals>> {
        let transactions = self.transaction_repository.load_transactions()?;
        Ok(monthly_series(&transactions))
    }

    fn spent_last_week(&self, today: NaiveDate) -> Result<Decimal> {
        let start = today
            .checked_sub_days(Days::new(WEEK_WINDOW_DAYS as u64))
            .ok_or_else(|| Error::Unexpected(format!("date out of range: {}", today)))?;
        let transactions = self.transaction_repository.load_transactions()?;
        Ok(expense_total_between(&transactions, start, today))
    }

    /// Window start is the same day-of-month one month earlier. When that
    /// day does not exist in the target month (e.g. March 31), the start is
    /// clamped to the last valid day of that month, which is what
    /// `checked_sub_months` does.
    fn spent_last_month(&self, today: NaiveDate) -> Result<Decimal> {
        let start = today
            .checked_sub_months(Months::new(1))
            .ok_or_else(|| Error::Unexpected(format!("date out of range: {}", today)))?;
        let transactions = self.transaction_repository.load_transactions()?;
        Ok(expense_total_between(&transactions, start, today))
    }

    fn get_most_frequent_category(&self) -> Result<Option<String>> {
        let transactions = self.transaction_repository.load_transactions()?;
        Ok(most_frequent_category(&transactions))
    }
}
