//! The single monthly spending ceiling.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The monthly budget. At most one is active at a time; reconfiguring
/// replaces the prior value wholesale, no history is retained.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    /// Strictly positive monthly ceiling.
    pub amount: f64,
    /// Instant of the last (re)configuration.
    pub created_at: DateTime<Utc>,
}

impl Budget {
    /// Builds a validated budget. Rejecting `amount <= 0` here is what lets
    /// the services divide by the amount without re-checking it.
    pub fn new(amount: f64, created_at: DateTime<Utc>) -> Result<Self, BudgetError> {
        if amount <= 0.0 || !amount.is_finite() {
            return Err(BudgetError::NonPositiveAmount(amount));
        }
        Ok(Self { amount, created_at })
    }
}

/// Validation failures when constructing a [`Budget`].
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetError {
    NonPositiveAmount(f64),
}

impl fmt::Display for BudgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetError::NonPositiveAmount(amount) => {
                write!(f, "budget amount must be positive, got {amount}")
            }
        }
    }
}

impl std::error::Error for BudgetError {}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn accepts_positive_amounts() {
        let created = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let budget = Budget::new(1000.0, created).expect("valid budget");
        assert_eq!(budget.amount, 1000.0);
    }

    #[test]
    fn rejects_zero_and_negative_amounts() {
        let created = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert!(matches!(
            Budget::new(0.0, created),
            Err(BudgetError::NonPositiveAmount(_))
        ));
        assert!(matches!(
            Budget::new(-50.0, created),
            Err(BudgetError::NonPositiveAmount(_))
        ));
        assert!(matches!(
            Budget::new(f64::NAN, created),
            Err(BudgetError::NonPositiveAmount(_))
        ));
    }
}
