//! Month-end projection by daily-average extrapolation.

use chrono::{DateTime, Utc};
use tracing::debug;

use outlay_domain::{days_in_month, Budget, Expense, Forecast, SpendProjection, TimeWindow};

use crate::stats_service::StatsService;
use crate::window_service::WindowService;

pub struct ForecastService;

impl ForecastService {
    /// Projects month-end spend from the current month-to-date pace.
    ///
    /// With no current-month expenses there is nothing to extrapolate from
    /// and the result is [`Forecast::InsufficientData`]; every other input
    /// produces a full projection. Pure: identical inputs give identical
    /// output. The budget invariant (`amount > 0`) is assumed, not
    /// re-validated here.
    pub fn forecast(expenses: &[Expense], budget: &Budget, now: DateTime<Utc>) -> Forecast {
        let current_month = WindowService::select(expenses, TimeWindow::CurrentMonth, now);
        if current_month.is_empty() {
            debug!("no current-month expenses, forecast unavailable");
            return Forecast::InsufficientData;
        }

        let today = now.date_naive();
        let projection = SpendProjection::from_parts(
            StatsService::total(current_month),
            budget.amount,
            today,
            days_in_month(today),
        );
        if projection.will_exceed_budget {
            debug!(
                projected = projection.projected_month_total,
                budget = budget.amount,
                "projected month-end spend exceeds budget"
            );
        }
        Forecast::Projection(projection)
    }
}
