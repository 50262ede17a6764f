#[cfg(test)]
mod tests {
    use crate::budgets::{
        Budget, BudgetRepositoryTrait, BudgetService, BudgetServiceTrait, BudgetStatus,
    };
    use crate::errors::Error;
    use crate::spending::SpendingService;
    use crate::transactions::{Transaction, TransactionRepositoryTrait, TransactionType};
    use crate::Result;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MockBudgetRepository {
        budgets: Mutex<Vec<Budget>>,
    }

    impl BudgetRepositoryTrait for MockBudgetRepository {
        fn load_budgets(&self) -> Result<Vec<Budget>> {
            Ok(self.budgets.lock().unwrap().clone())
        }

        fn upsert_budget(&self, budget: Budget) -> Result<Budget> {
            let mut budgets = self.budgets.lock().unwrap();
            match budgets.iter_mut().find(|b| b.category == budget.category) {
                Some(existing) => existing.limit = budget.limit,
                None => budgets.push(budget.clone()),
            }
            Ok(budget)
        }

        fn delete_budget(&self, category: &str) -> Result<usize> {
            let mut budgets = self.budgets.lock().unwrap();
            let before = budgets.len();
            budgets.retain(|b| b.category != category);
            Ok(before - budgets.len())
        }

        fn replace_budgets(&self, budgets: Vec<Budget>) -> Result<()> {
            *self.budgets.lock().unwrap() = budgets;
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockTransactionRepository {
        transactions: Mutex<Vec<Transaction>>,
    }

    impl TransactionRepositoryTrait for MockTransactionRepository {
        fn load_transactions(&self) -> Result<Vec<Transaction>> {
            Ok(self.transactions.lock().unwrap().clone())
        }

        fn insert_transaction(&self, transaction: Transaction) -> Result<Transaction> {
            self.transactions
                .lock()
                .unwrap()
                .insert(0, transaction.clone());
            Ok(transaction)
        }

        fn delete_transaction(&self, transaction_id: i64) -> Result<usize> {
            let mut transactions = self.transactions.lock().unwrap();
            let before = transactions.len();
            transactions.retain(|t| t.id != transaction_id);
            Ok(before - transactions.len())
        }

        fn replace_transactions(&self, transactions: Vec<Transaction>) -> Result<()> {
            *self.transactions.lock().unwrap() = transactions;
            Ok(())
        }
    }

    fn expense(id: i64, amount: Decimal, category: &str) -> Transaction {
        Transaction {
            id,
            description: format!("tx-{}", id),
            amount,
            category: category.to_string(),
            transaction_type: TransactionType::Expense,
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        }
    }

    fn service_with(
        budgets: Vec<Budget>,
        transactions: Vec<Transaction>,
    ) -> (BudgetService, Arc<MockBudgetRepository>) {
        let budget_repo = Arc::new(MockBudgetRepository {
            budgets: Mutex::new(budgets),
        });
        let transaction_repo = Arc::new(MockTransactionRepository {
            transactions: Mutex::new(transactions),
        });
        let spending = Arc::new(SpendingService::new(transaction_repo));
        (
            BudgetService::new(budget_repo.clone(), spending),
            budget_repo,
        )
    }

    #[test]
    fn test_over_budget_scenario() {
        let (service, _) = service_with(
            vec![Budget {
                category: "food".to_string(),
                limit: dec!(50),
            }],
            vec![
                expense(1, dec!(40), "food"),
                expense(2, dec!(20), "food"),
                expense(3, dec!(15), "transport"),
            ],
        );

        let progress = service.get_budget_progress().unwrap();
        assert_eq!(progress.len(), 1);
        assert_eq!(progress[0].spent, dec!(60));
        assert_eq!(progress[0].limit, dec!(50));
        assert_eq!(progress[0].percentage, dec!(120));
        assert_eq!(progress[0].status, BudgetStatus::Over);
    }

    #[test]
    fn test_status_thresholds() {
        let budget = Budget {
            category: "food".to_string(),
            limit: dec!(100),
        };

        // Exactly 80% is still good; warning starts above 80.
        let cases = [
            (dec!(80), BudgetStatus::Good),
            (dec!(80.01), BudgetStatus::Warning),
            (dec!(100), BudgetStatus::Warning),
            (dec!(100.01), BudgetStatus::Over),
        ];
        for (spent, expected) in cases {
            let progress = BudgetService::evaluate(&budget, spent).unwrap();
            assert_eq!(progress.status, expected, "spent {}", spent);
        }
    }

    #[test]
    fn test_status_uses_exact_ratio_not_rounded_percentage() {
        let budget = Budget {
            category: "food".to_string(),
            limit: dec!(300),
        };

        // 240.01 / 300 = 80.0033...%; the displayed percentage rounds down
        // to 80.00 but the status must still flip to Warning.
        let warning = BudgetService::evaluate(&budget, dec!(240.01)).unwrap();
        assert_eq!(warning.status, BudgetStatus::Warning);
        assert_eq!(warning.percentage, dec!(80.00));

        // Same at the over-budget boundary: 300.01 / 300 rounds to 100.00.
        let over = BudgetService::evaluate(&budget, dec!(300.01)).unwrap();
        assert_eq!(over.status, BudgetStatus::Over);
        assert_eq!(over.percentage, dec!(100.00));
    }

    #[test]
    fn test_evaluate_rejects_non_positive_limit() {
        let budget = Budget {
            category: "food".to_string(),
            limit: Decimal::ZERO,
        };
        let result = BudgetService::evaluate(&budget, dec!(10));
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_set_budget_upserts_by_category() {
        let (service, repo) = service_with(vec![], vec![]);

        service.set_budget("food", dec!(50)).unwrap();
        service.set_budget("food", dec!(75)).unwrap();

        let budgets = repo.load_budgets().unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].limit, dec!(75));
    }

    #[test]
    fn test_set_budget_validation() {
        let (service, _) = service_with(vec![], vec![]);

        assert!(matches!(
            service.set_budget("", dec!(50)),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            service.set_budget("food", dec!(0)),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            service.set_budget("food", dec!(-1)),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_remove_unknown_budget_is_noop() {
        let (service, repo) = service_with(
            vec![Budget {
                category: "food".to_string(),
                limit: dec!(50),
            }],
            vec![],
        );

        service.remove_budget("nope").unwrap();
        assert_eq!(repo.load_budgets().unwrap().len(), 1);

        service.remove_budget("food").unwrap();
        service.remove_budget("food").unwrap();
        assert!(repo.load_budgets().unwrap().is_empty());
    }

    #[test]
    fn test_category_without_spend_is_zero_percent() {
        let (service, _) = service_with(
            vec![Budget {
                category: "fun".to_string(),
                limit: dec!(30),
            }],
            vec![expense(1, dec!(10), "food")],
        );

        let progress = service.get_budget_progress().unwrap();
        assert_eq!(progress[0].spent, Decimal::ZERO);
        assert_eq!(progress[0].percentage, Decimal::ZERO);
        assert_eq!(progress[0].status, BudgetStatus::Good);
    }
}
