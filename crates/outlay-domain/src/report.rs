//! Derived result types handed to the presentation layer.
//!
//! These carry numbers and categorical values only; currency symbols, locale
//! date strings, and colors are layered on by the consumer.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::window::month_start;

/// A category paired with its summed spend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

/// One day of a fixed-length trend series. The date is the label; consumers
/// derive weekday names or locale strings from it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub total: f64,
}

/// Whether the month-to-date pace is above or below the budgeted pace.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpendTrend {
    High,
    Low,
}

impl fmt::Display for SpendTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SpendTrend::High => "High",
            SpendTrend::Low => "Low",
        };
        f.write_str(label)
    }
}

/// Outcome of a forecast run. Insufficient data is the one recoverable
/// condition and arrives as a variant, never as an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Forecast {
    /// No expenses in the current month; nothing to extrapolate from.
    InsufficientData,
    Projection(SpendProjection),
}

impl Forecast {
    pub fn projection(&self) -> Option<&SpendProjection> {
        match self {
            Forecast::InsufficientData => None,
            Forecast::Projection(projection) => Some(projection),
        }
    }
}

/// Month-end projection derived from the month-to-date daily average.
///
/// The model assumes uniform spend from day 1 of the month. For users who
/// started tracking mid-month the early averages run high; that is the
/// inherited modeling choice, kept as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpendProjection {
    /// 1-indexed day-of-month of the reference instant.
    pub day_of_month: u32,
    pub days_in_month: u32,
    pub month_to_date: f64,
    pub daily_average: f64,
    pub projected_month_total: f64,
    pub will_exceed_budget: bool,
    /// Days of spending at the current pace until the budget is consumed.
    /// `None` means never: a zero daily average, or a horizon too large to
    /// represent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_until_exceed: Option<f64>,
    /// Calendar date on which the budget is consumed at the current pace;
    /// rolls over into following months when the pace outlasts this one.
    /// `None` when the horizon is "never" or lands beyond the calendar's
    /// range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projected_exceed_date: Option<NaiveDate>,
    /// Budget minus month-to-date spend; negative once over budget.
    pub remaining: f64,
    pub days_remaining: u32,
    /// Spendable per remaining day. On the last day of the month there are
    /// no days to spread over, so this is the whole remaining amount.
    pub daily_budget_remaining: f64,
    pub trend: SpendTrend,
}

impl SpendProjection {
    /// Derives the full projection from the month-to-date total, the budget
    /// ceiling, and the reference date.
    pub fn from_parts(
        month_to_date: f64,
        budget_amount: f64,
        today: NaiveDate,
        days_in_month: u32,
    ) -> Self {
        let day_of_month = today.day();
        let daily_average = month_to_date / f64::from(day_of_month);
        let projected_month_total = daily_average * f64::from(days_in_month);
        let will_exceed_budget = projected_month_total > budget_amount;

        let days_until_exceed = if daily_average > 0.0 {
            let days = budget_amount / daily_average;
            days.is_finite().then_some(days)
        } else {
            None
        };
        let projected_exceed_date = days_until_exceed.and_then(|days| {
            // Day N of the month is the first plus N-1 days; ceil past the
            // month length rolls into the next month as a valid date. The
            // cast saturates for oversized horizons and the checked chrono
            // arithmetic turns those into None, i.e. "never".
            let offset = days.ceil().max(1.0) as i64 - 1;
            Duration::try_days(offset)
                .and_then(|span| month_start(today).checked_add_signed(span))
        });

        let remaining = budget_amount - month_to_date;
        let days_remaining = days_in_month.saturating_sub(day_of_month);
        let daily_budget_remaining = if days_remaining > 0 {
            remaining / f64::from(days_remaining)
        } else {
            remaining
        };
        let trend = if daily_average > budget_amount / f64::from(days_in_month) {
            SpendTrend::High
        } else {
            SpendTrend::Low
        };

        Self {
            day_of_month,
            days_in_month,
            month_to_date,
            daily_average,
            projected_month_total,
            will_exceed_budget,
            days_until_exceed,
            projected_exceed_date,
            remaining,
            days_remaining,
            daily_budget_remaining,
            trend,
        }
    }
}

/// Spend-percentage bucket backing the dashboard's status colors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BudgetHealth {
    Healthy,
    Elevated,
    Warning,
    Critical,
}

impl BudgetHealth {
    /// Buckets a spent-percentage (already clamped by the caller).
    pub fn from_percent(spent_percent: f64) -> Self {
        if spent_percent >= 90.0 {
            BudgetHealth::Critical
        } else if spent_percent >= 75.0 {
            BudgetHealth::Warning
        } else if spent_percent >= 50.0 {
            BudgetHealth::Elevated
        } else {
            BudgetHealth::Healthy
        }
    }
}

impl fmt::Display for BudgetHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetHealth::Healthy => "Healthy",
            BudgetHealth::Elevated => "Elevated",
            BudgetHealth::Warning => "Warning",
            BudgetHealth::Critical => "Critical",
        };
        f.write_str(label)
    }
}

/// Summary panel for the dashboard: current-month spend against the budget
/// plus the top spending categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardReport {
    pub budget_amount: f64,
    pub month_to_date: f64,
    /// May be negative once over budget.
    pub remaining: f64,
    /// Clamped to [0, 100] for display, unlike the raw percentage.
    pub spent_percent: f64,
    pub status: BudgetHealth,
    pub top_categories: Vec<CategoryTotal>,
}

/// Statistics panel: short-term and month-over-month figures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsOverview {
    pub current_month_total: f64,
    pub previous_month_total: f64,
    /// Percent change versus the previous month; zero when there is no
    /// previous-month spend to compare against.
    pub monthly_change_percent: f64,
    pub trailing_week_total: f64,
    pub trailing_week_daily_average: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_category: Option<CategoryTotal>,
    pub expense_count: usize,
    /// Mean amount across every recorded expense, zero when none exist.
    pub average_expense: f64,
}
