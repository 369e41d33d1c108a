//! Facade mapping raw analytics into display-ready report structures.
//!
//! This is the one place where presentation rules apply: the spent
//! percentage is clamped, the health bucket is assigned, and the absence of
//! a configured budget is turned into a typed error before any analytical
//! function runs.

use chrono::{DateTime, Utc};
use tracing::warn;

use outlay_domain::{
    Budget, BudgetHealth, DashboardReport, Expense, Forecast, TimeWindow,
};

use crate::error::CoreError;
use crate::forecast_service::ForecastService;
use crate::stats_service::StatsService;
use crate::window_service::WindowService;

/// How many ranked categories the dashboard shows.
const DASHBOARD_TOP_CATEGORIES: usize = 5;

pub struct ReportService;

impl ReportService {
    /// Builds the dashboard summary for the current month.
    pub fn dashboard(
        expenses: &[Expense],
        budget: Option<&Budget>,
        now: DateTime<Utc>,
    ) -> Result<DashboardReport, CoreError> {
        let budget = Self::require_budget(budget)?;
        let current_month = WindowService::select(expenses, TimeWindow::CurrentMonth, now);
        let month_to_date = StatsService::total(current_month.iter().copied());
        let spent_percent =
            StatsService::percent_of(month_to_date, budget.amount).clamp(0.0, 100.0);

        Ok(DashboardReport {
            budget_amount: budget.amount,
            month_to_date,
            remaining: budget.amount - month_to_date,
            spent_percent,
            status: BudgetHealth::from_percent(spent_percent),
            top_categories: StatsService::top_categories(
                current_month,
                DASHBOARD_TOP_CATEGORIES,
            ),
        })
    }

    /// Entry point for the prediction panel; forwards to the forecast once
    /// the budget precondition holds.
    pub fn prediction(
        expenses: &[Expense],
        budget: Option<&Budget>,
        now: DateTime<Utc>,
    ) -> Result<Forecast, CoreError> {
        let budget = Self::require_budget(budget)?;
        Ok(ForecastService::forecast(expenses, budget, now))
    }

    fn require_budget(budget: Option<&Budget>) -> Result<&Budget, CoreError> {
        let budget = budget.ok_or(CoreError::BudgetNotConfigured)?;
        if budget.amount <= 0.0 {
            warn!(amount = budget.amount, "rejecting non-positive budget");
            return Err(CoreError::InvalidBudget(budget.amount));
        }
        Ok(budget)
    }
}
