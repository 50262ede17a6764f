//! Goals module - savings targets with accumulated progress.

mod goals_model;
mod goals_service;
mod goals_traits;


pub use goals_model::{Goal, GoalProgress, NewGoal};
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
