use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;

use tally_core::budgets::{Budget, BudgetRepositoryTrait};
use tally_core::Result;

use crate::store::{load_collection, save_collection, KeyValueStore};

const STORE_KEY: &str = "budgets";

/// Budgets persisted as a category → limit JSON mapping, the category
/// being the unique key. The `BTreeMap` keeps the listing order stable
/// across reloads.
pub struct BudgetRepository {
    store: Arc<dyn KeyValueStore>,
}

impl BudgetRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        BudgetRepository { store }
    }

    fn load_map(&self) -> Result<BTreeMap<String, Decimal>> {
        load_collection(self.store.as_ref(), STORE_KEY)
    }

    fn save_map(&self, map: &BTreeMap<String, Decimal>) -> Result<()> {
        save_collection(self.store.as_ref(), STORE_KEY, map)
    }
}

impl BudgetRepositoryTrait for BudgetRepository {
    fn load_budgets(&self) -> Result<Vec<Budget>> {
        Ok(self
            .load_map()?
            .into_iter()
            .map(|(category, limit)| Budget { category, limit })
            .collect())
    }

    fn upsert_budget(&self, budget: Budget) -> Result<Budget> {
        let mut map = self.load_map()?;
        map.insert(budget.category.clone(), budget.limit);
        self.save_map(&map)?;
        Ok(budget)
    }

    fn delete_budget(&self, category: &str) -> Result<usize> {
        let mut map = self.load_map()?;
        if map.remove(category).is_none() {
            return Ok(0);
        }
        self.save_map(&map)?;
        Ok(1)
    }

    fn replace_budgets(&self, budgets: Vec<Budget>) -> Result<()> {
        let map: BTreeMap<String, Decimal> = budgets
            .into_iter()
            .map(|b| (b.category, b.limit))
            .collect();
        self.save_map(&map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use rust_decimal_macros::dec;

    #[test]
    fn test_upsert_overwrites_existing_category() {
        let repo = BudgetRepository::new(Arc::new(MemoryStore::new()));

        repo.upsert_budget(Budget {
            category: "food".to_string(),
            limit: dec!(50),
        })
        .unwrap();
        repo.upsert_budget(Budget {
            category: "food".to_string(),
            limit: dec!(80),
        })
        .unwrap();

        let budgets = repo.load_budgets().unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].limit, dec!(80));
    }

    #[test]
    fn test_delete_unknown_category_removes_nothing() {
        let repo = BudgetRepository::new(Arc::new(MemoryStore::new()));
        assert_eq!(repo.delete_budget("nope").unwrap(), 0);

        repo.upsert_budget(Budget {
            category: "rent".to_string(),
            limit: dec!(900),
        })
        .unwrap();
        assert_eq!(repo.delete_budget("rent").unwrap(), 1);
        assert!(repo.load_budgets().unwrap().is_empty());
    }
}
