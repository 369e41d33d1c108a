//! Domain model for a single dated, categorised expense.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::Category;
use crate::common::{Amounted, Displayable, Identifiable};

/// A recorded expense. Immutable once created; the analytics services only
/// ever read these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    /// Strictly positive, two-decimal currency semantics by convention.
    pub amount: f64,
    pub category: Category,
    /// The single resolved occurrence instant. When no explicit date was
    /// supplied at creation this holds the creation timestamp, so windowing
    /// never has to re-resolve a fallback.
    pub occurred_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
}

impl Expense {
    /// Builds a validated expense, resolving the effective date once.
    ///
    /// `occurred_at` falls back to `created_at` when the caller supplied no
    /// explicit date. Both are caller-provided instants; nothing here reads
    /// a system clock.
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        category: Category,
        occurred_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ExpenseError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ExpenseError::EmptyDescription);
        }
        if amount <= 0.0 || !amount.is_finite() {
            return Err(ExpenseError::NonPositiveAmount(amount));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            description,
            amount,
            category,
            occurred_at: occurred_at.unwrap_or(created_at),
            recurrence: None,
        })
    }

    pub fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = Some(recurrence);
        self
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!("{} [{}]", self.description, self.category)
    }
}

/// Validation failures when constructing an [`Expense`].
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseError {
    EmptyDescription,
    NonPositiveAmount(f64),
}

impl fmt::Display for ExpenseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpenseError::EmptyDescription => f.write_str("expense description must not be empty"),
            ExpenseError::NonPositiveAmount(amount) => {
                write!(f, "expense amount must be positive, got {amount}")
            }
        }
    }
}

impl std::error::Error for ExpenseError {}

/// Informational recurrence marker attached to an expense.
///
/// The analytics core never expands these into future instances; the field
/// rides along so collaborators can surface "repeats monthly" style hints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recurrence {
    pub frequency: Frequency,
    pub next_occurrence: DateTime<Utc>,
}

/// Supported recurrence cadences.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Yearly => "Yearly",
        };
        f.write_str(label)
    }
}
