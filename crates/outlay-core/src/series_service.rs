//! Fixed-length daily series and category slices for charting.

use chrono::{DateTime, Duration, Utc};

use outlay_domain::{CategoryTotal, DailyPoint, Expense, TimeWindow};

use crate::stats_service::StatsService;
use crate::window_service::WindowService;

pub struct SeriesService;

impl SeriesService {
    /// Totals for each of the `days` consecutive calendar dates ending at
    /// `now`'s date, oldest first. The length is exactly `days` no matter
    /// the input; dates without expenses carry a zero total. Chart consumers
    /// rely on the fixed length, so days are never omitted.
    pub fn daily_series(expenses: &[Expense], days: u32, now: DateTime<Utc>) -> Vec<DailyPoint> {
        let today = now.date_naive();
        (0..i64::from(days))
            .rev()
            .map(|offset| {
                let date = today - Duration::days(offset);
                let on_day = WindowService::select(expenses, TimeWindow::ExactDay(date), now);
                DailyPoint {
                    date,
                    total: StatsService::total(on_day),
                }
            })
            .collect()
    }

    /// Per-category totals over the given expenses, descending by total,
    /// ties in category declaration order. Covers every present category.
    pub fn category_series(expenses: &[Expense]) -> Vec<CategoryTotal> {
        StatsService::ranked_categories(expenses)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};

    use outlay_domain::Category;

    use super::*;

    fn instant(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(amount: f64, category: Category, occurred: DateTime<Utc>) -> Expense {
        Expense::new("expense", amount, category, Some(occurred), occurred)
            .expect("valid expense")
    }

    #[test]
    fn seven_day_series_is_always_seven_long() {
        let now = instant(2025, 3, 15);
        let series = SeriesService::daily_series(&[], 7, now);
        assert_eq!(series.len(), 7);
        assert!(series.iter().all(|point| point.total == 0.0));
        assert_eq!(series[0].date, date(2025, 3, 9));
        assert_eq!(series[6].date, date(2025, 3, 15));
    }

    #[test]
    fn totals_land_on_their_calendar_day() {
        let now = instant(2025, 3, 15);
        let expenses = vec![
            expense(10.0, Category::Food, instant(2025, 3, 13)),
            expense(5.0, Category::Food, instant(2025, 3, 13)),
            expense(8.0, Category::Shopping, instant(2025, 3, 15)),
            // outside the window, ignored
            expense(99.0, Category::Other, instant(2025, 3, 1)),
        ];
        let series = SeriesService::daily_series(&expenses, 7, now);
        assert_eq!(series[4].date, date(2025, 3, 13));
        assert_eq!(series[4].total, 15.0);
        assert_eq!(series[6].total, 8.0);
        assert_eq!(series[5].total, 0.0);
    }

    #[test]
    fn series_crosses_month_boundaries() {
        let now = instant(2025, 3, 2);
        let expenses = vec![expense(7.0, Category::Food, instant(2025, 2, 27))];
        let series = SeriesService::daily_series(&expenses, 7, now);
        assert_eq!(series[0].date, date(2025, 2, 24));
        assert_eq!(series[3].date, date(2025, 2, 27));
        assert_eq!(series[3].total, 7.0);
    }

    #[test]
    fn category_series_ranks_descending() {
        let expenses = vec![
            expense(10.0, Category::Food, instant(2025, 3, 3)),
            expense(30.0, Category::Utilities, instant(2025, 3, 4)),
            expense(20.0, Category::Food, instant(2025, 3, 5)),
        ];
        let series = SeriesService::category_series(&expenses);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].category, Category::Food);
        assert_eq!(series[0].total, 30.0);
        assert_eq!(series[1].category, Category::Utilities);
    }
}
