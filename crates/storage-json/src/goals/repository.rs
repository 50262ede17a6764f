use std::sync::Arc;

use tally_core::goals::{Goal, GoalRepositoryTrait};
use tally_core::Result;

use crate::store::{load_collection, save_collection, KeyValueStore};

const STORE_KEY: &str = "goals";

/// Goal collection persisted as a single JSON array in creation order.
pub struct GoalRepository {
    store: Arc<dyn KeyValueStore>,
}

impl GoalRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        GoalRepository { store }
    }
}

impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self) -> Result<Vec<Goal>> {
        load_collection(self.store.as_ref(), STORE_KEY)
    }

    fn insert_goal(&self, goal: Goal) -> Result<Goal> {
        let mut goals: Vec<Goal> = load_collection(self.store.as_ref(), STORE_KEY)?;
        goals.push(goal.clone());
        save_collection(self.store.as_ref(), STORE_KEY, &goals)?;
        Ok(goal)
    }

    fn update_goal(&self, goal: &Goal) -> Result<usize> {
        let mut goals: Vec<Goal> = load_collection(self.store.as_ref(), STORE_KEY)?;
        match goals.iter_mut().find(|g| g.id == goal.id) {
            Some(existing) => {
                *existing = goal.clone();
                save_collection(self.store.as_ref(), STORE_KEY, &goals)?;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_goal(&self, goal_id: i64) -> Result<usize> {
        let mut goals: Vec<Goal> = load_collection(self.store.as_ref(), STORE_KEY)?;
        let before = goals.len();
        goals.retain(|g| g.id != goal_id);
        let removed = before - goals.len();
        if removed > 0 {
            save_collection(self.store.as_ref(), STORE_KEY, &goals)?;
        }
        Ok(removed)
    }

    fn replace_goals(&self, goals: Vec<Goal>) -> Result<()> {
        save_collection(self.store.as_ref(), STORE_KEY, &goals)
    }
}
