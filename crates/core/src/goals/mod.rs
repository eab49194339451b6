//! Goals module - the goals summary supplied by the dashboard API.

mod goals_model;

pub use goals_model::GoalsSummary;
