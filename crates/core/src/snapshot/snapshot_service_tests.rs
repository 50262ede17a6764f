#[cfg(test)]
mod tests {
    use crate::budgets::{Budget, BudgetRepositoryTrait};
    use crate::goals::{Goal, GoalRepositoryTrait};
    use crate::snapshot::{SnapshotService, SnapshotServiceTrait};
    use crate::transactions::{Transaction, TransactionRepositoryTrait, TransactionType};
    use crate::Result;
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MockStore {
        transactions: Mutex<Vec<Transaction>>,
        budgets: Mutex<Vec<Budget>>,
        goals: Mutex<Vec<Goal>>,
    }

    impl TransactionRepositoryTrait for MockStore {
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

    impl BudgetRepositoryTrait for MockStore {
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

    impl GoalRepositoryTrait for MockStore {
        fn load_goals(&self) -> Result<Vec<Goal>> {
            Ok(self.goals.lock().unwrap().clone())
        }

        fn insert_goal(&self, goal: Goal) -> Result<Goal> {
            self.goals.lock().unwrap().push(goal.clone());
            Ok(goal)
        }

        fn update_goal(&self, goal: &Goal) -> Result<usize> {
            let mut goals = self.goals.lock().unwrap();
            match goals.iter_mut().find(|g| g.id == goal.id) {
                Some(existing) => {
                    *existing = goal.clone();
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        fn delete_goal(&self, goal_id: i64) -> Result<usize> {
            let mut goals = self.goals.lock().unwrap();
            let before = goals.len();
            goals.retain(|g| g.id != goal_id);
            Ok(before - goals.len())
        }

        fn replace_goals(&self, goals: Vec<Goal>) -> Result<()> {
            *self.goals.lock().unwrap() = goals;
            Ok(())
        }
    }

    fn seeded_store() -> Arc<MockStore> {
        Arc::new(MockStore {
            transactions: Mutex::new(vec![Transaction {
                id: 11,
                description: "Groceries".to_string(),
                amount: dec!(42.50),
                category: "food".to_string(),
                transaction_type: TransactionType::Expense,
                date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            }]),
            budgets: Mutex::new(vec![Budget {
                category: "food".to_string(),
                limit: dec!(200),
            }]),
            goals: Mutex::new(vec![Goal {
                id: 22,
                name: "Vacation".to_string(),
                target: dec!(1200),
                current: dec!(300),
                created_at: Utc::now(),
            }]),
        })
    }

    fn snapshot_service(store: Arc<MockStore>) -> SnapshotService {
        SnapshotService::new(store.clone(), store.clone(), store)
    }

    #[test]
    fn test_export_includes_all_collections() {
        let service = snapshot_service(seeded_store());
        let snapshot = service.export().unwrap();

        assert_eq!(snapshot.transactions.len(), 1);
        assert_eq!(snapshot.budgets.len(), 1);
        assert_eq!(snapshot.goals.len(), 1);
        assert!(snapshot.exported_at <= Utc::now());
    }

    #[test]
    fn test_export_json_uses_camel_case_timestamp_field() {
        let service = snapshot_service(seeded_store());
        let json = service.export_json().unwrap();
        assert!(json.contains("\"exportedAt\""));
        assert!(json.contains("\"transactions\""));
    }

    #[test]
    fn test_json_round_trip_reproduces_state() {
        let source = seeded_store();
        let json = snapshot_service(source.clone()).export_json().unwrap();

        let destination = Arc::new(MockStore::default());
        let restored = snapshot_service(destination.clone())
            .import_json(&json)
            .unwrap();

        assert_eq!(
            destination.transactions.lock().unwrap().clone(),
            source.transactions.lock().unwrap().clone()
        );
        assert_eq!(
            destination.budgets.lock().unwrap().clone(),
            source.budgets.lock().unwrap().clone()
        );
        let restored_goals = destination.goals.lock().unwrap().clone();
        let source_goals = source.goals.lock().unwrap().clone();
        assert_eq!(restored_goals.len(), source_goals.len());
        assert_eq!(restored_goals[0].id, source_goals[0].id);
        assert_eq!(restored_goals[0].current, source_goals[0].current);
        assert_eq!(restored.transactions.len(), 1);
    }

    #[test]
    fn test_import_rejects_malformed_json() {
        let destination = Arc::new(MockStore::default());
        let service = snapshot_service(destination.clone());

        assert!(service.import_json("{not json").is_err());
        assert!(destination.transactions.lock().unwrap().is_empty());
    }
}
