//! Sums, grouping, ranking, and the statistics-panel overview.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use outlay_domain::{Amounted, Category, CategoryTotal, Expense, StatsOverview, TimeWindow};

use crate::window_service::WindowService;

pub struct StatsService;

impl StatsService {
    /// Sum of amounts; zero for empty input. Accepts anything yielding
    /// borrowed expenses, so window selections feed in without copying.
    pub fn total<'a, I>(expenses: I) -> f64
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        expenses.into_iter().map(Amounted::amount).sum()
    }

    /// Per-category totals. Categories with no expenses are absent from the
    /// map, not zero-filled. The BTreeMap iterates in declaration order of
    /// [`Category`], which is what makes ranking ties deterministic.
    pub fn group_by_category<'a, I>(expenses: I) -> BTreeMap<Category, f64>
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut totals = BTreeMap::new();
        for expense in expenses {
            *totals.entry(expense.category).or_insert(0.0) += expense.amount;
        }
        totals
    }

    /// All present categories ranked by total, descending. Equal totals keep
    /// category declaration order (stable sort over the grouped map).
    pub fn ranked_categories<'a, I>(expenses: I) -> Vec<CategoryTotal>
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut ranked: Vec<CategoryTotal> = Self::group_by_category(expenses)
            .into_iter()
            .map(|(category, total)| CategoryTotal { category, total })
            .collect();
        ranked.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
        ranked
    }

    /// At most `n` top-spending categories; fewer when fewer exist.
    pub fn top_categories<'a, I>(expenses: I, n: usize) -> Vec<CategoryTotal>
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut ranked = Self::ranked_categories(expenses);
        ranked.truncate(n);
        ranked
    }

    /// Mean amount; zero for empty input (explicit guard, no division
    /// fault).
    pub fn average<'a, I>(expenses: I) -> f64
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut count = 0usize;
        let mut sum = 0.0;
        for expense in expenses {
            count += 1;
            sum += expense.amount;
        }
        if count == 0 {
            return 0.0;
        }
        sum / count as f64
    }

    /// `value` as a percentage of `budget_amount`. Not clamped; clamping to
    /// [0, 100] is a presentation concern. The caller guarantees
    /// `budget_amount > 0` (the Budget invariant).
    pub fn percent_of(value: f64, budget_amount: f64) -> f64 {
        (value / budget_amount) * 100.0
    }

    /// The statistics panel in one call: month totals, month-over-month
    /// change, trailing-week figures, top category, and lifetime averages.
    pub fn overview(expenses: &[Expense], now: DateTime<Utc>) -> StatsOverview {
        let current = WindowService::select(expenses, TimeWindow::CurrentMonth, now);
        let previous = WindowService::select(expenses, TimeWindow::PreviousMonth, now);
        let trailing = WindowService::select(expenses, TimeWindow::TrailingDays(7), now);

        let current_month_total = Self::total(current.iter().copied());
        let previous_month_total = Self::total(previous);
        let monthly_change_percent = if previous_month_total > 0.0 {
            ((current_month_total - previous_month_total) / previous_month_total) * 100.0
        } else {
            0.0
        };
        let trailing_week_total = Self::total(trailing);

        StatsOverview {
            current_month_total,
            previous_month_total,
            monthly_change_percent,
            trailing_week_total,
            trailing_week_daily_average: trailing_week_total / 7.0,
            top_category: Self::top_categories(current, 1).into_iter().next(),
            expense_count: expenses.len(),
            average_expense: Self::average(expenses),
        }
    }
}
