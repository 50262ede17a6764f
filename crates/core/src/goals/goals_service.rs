use chrono::Utc;
use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use super::goals_model::{Goal, GoalProgress, NewGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::ValidationError;
use crate::Result;

/// Service for managing savings goals.
pub struct GoalService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repository: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { goal_repository }
    }
}

impl GoalServiceTrait for GoalService {
    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.goal_repository.load_goals()
    }

    fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        if new_goal.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if new_goal.target <= Decimal::zero() {
            return Err(ValidationError::InvalidAmount(format!(
                "goal target must be positive, got {}",
                new_goal.target
            ))
            .into());
        }

        let now = Utc::now();
        let mut goal = Goal {
            id: now.timestamp_millis(),
            name: new_goal.name,
            target: new_goal.target,
            current: Decimal::ZERO,
            created_at: now,
        };
        goal.current = goal.clamp_amount(new_goal.initial.unwrap_or(Decimal::ZERO));

        debug!("Creating goal {} '{}'", goal.id, goal.name);
        self.goal_repository.insert_goal(goal)
    }

    fn update_goal_progress(&self, goal_id: i64, delta: Decimal) -> Result<Option<Goal>> {
        let goals = self.goal_repository.load_goals()?;
        let Some(mut goal) = goals.into_iter().find(|g| g.id == goal_id) else {
            debug!("Update for unknown goal id {}", goal_id);
            return Ok(None);
        };

        goal.current = goal.clamp_amount(goal.current + delta);
        self.goal_repository.update_goal(&goal)?;
        Ok(Some(goal))
    }

    fn delete_goal(&self, goal_id: i64) -> Result<()> {
        let removed = self.goal_repository.delete_goal(goal_id)?;
        if removed == 0 {
            debug!("Delete for unknown goal id {}", goal_id);
        }
        Ok(())
    }

    fn get_goal_progress(&self) -> Result<Vec<GoalProgress>> {
        let goals = self.goal_repository.load_goals()?;
        Ok(goals
            .into_iter()
            .map(|goal| {
                let percentage =
                    (goal.current / goal.target * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION);
                GoalProgress {
                    goal_id: goal.id,
                    name: goal.name,
                    current: goal.current,
                    target: goal.target,
                    percentage,
                }
            })
            .collect())
    }
}
