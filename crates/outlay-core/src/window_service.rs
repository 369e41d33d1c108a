//! Window selection over the expense snapshot.

use chrono::{DateTime, Utc};

use outlay_domain::{Expense, TimeWindow};

pub struct WindowService;

impl WindowService {
    /// Returns borrows of the expenses whose occurrence falls inside
    /// `window`, preserving the original relative order. The input is never
    /// mutated or copied; an empty input yields an empty output.
    pub fn select<'a>(
        expenses: &'a [Expense],
        window: TimeWindow,
        now: DateTime<Utc>,
    ) -> Vec<&'a Expense> {
        expenses
            .iter()
            .filter(|expense| window.contains(expense.occurred_at, now))
            .collect()
    }
}
