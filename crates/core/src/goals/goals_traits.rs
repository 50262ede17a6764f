use super::goals_model::{Goal, GoalProgress, NewGoal};
use crate::Result;
use rust_decimal::Decimal;

/// Trait defining the contract for goal repository operations.
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<Goal>>;
    fn insert_goal(&self, goal: Goal) -> Result<Goal>;
    /// Overwrites the stored goal matching `goal.id`; unknown ids write
    /// nothing and return 0.
    fn update_goal(&self, goal: &Goal) -> Result<usize>;
    /// Returns the number of records removed (0 when the id is unknown).
    fn delete_goal(&self, goal_id: i64) -> Result<usize>;
    fn replace_goals(&self, goals: Vec<Goal>) -> Result<()>;
}

/// Trait defining the contract for goal service operations.
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<Goal>>;
    fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    /// Adds `delta` (which may be negative) to the goal's progress, clamped
    /// into `[0, target]`. An unknown id is a silent no-op returning
    /// `Ok(None)`.
    fn update_goal_progress(&self, goal_id: i64, delta: Decimal) -> Result<Option<Goal>>;
    /// Deleting an unknown id is a silent no-op.
    fn delete_goal(&self, goal_id: i64) -> Result<()>;
    fn get_goal_progress(&self) -> Result<Vec<GoalProgress>>;
}
