use thiserror::Error;

/// Boundary failures surfaced by the report facade. The analytical
/// functions themselves never error; preconditions are checked once, here.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("No budget configured")]
    BudgetNotConfigured,
    #[error("Budget amount must be positive, got {0}")]
    InvalidBudget(f64),
}
