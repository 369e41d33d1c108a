use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use outlay_core::ForecastService;
use outlay_domain::{Budget, Category, Expense, Forecast, SpendTrend};

fn instant(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn expense(amount: f64, occurred: DateTime<Utc>) -> Expense {
    Expense::new("expense", amount, Category::Other, Some(occurred), occurred)
        .expect("valid expense")
}

fn budget(amount: f64) -> Budget {
    Budget::new(amount, instant(2025, 1, 1)).expect("valid budget")
}

#[test]
fn over_pace_month_projects_an_exceed() {
    // Day 10 of April (30 days), 400 spent against a 1000 budget.
    let now = instant(2025, 4, 10);
    let expenses = vec![
        expense(150.0, instant(2025, 4, 2)),
        expense(150.0, instant(2025, 4, 5)),
        expense(100.0, instant(2025, 4, 9)),
    ];

    let forecast = ForecastService::forecast(&expenses, &budget(1000.0), now);
    let p = forecast.projection().expect("projection present");
    assert_eq!(p.day_of_month, 10);
    assert_eq!(p.days_in_month, 30);
    assert_eq!(p.month_to_date, 400.0);
    assert_eq!(p.daily_average, 40.0);
    assert_eq!(p.projected_month_total, 1200.0);
    assert!(p.will_exceed_budget);
    assert_eq!(p.remaining, 600.0);
    assert_eq!(p.days_remaining, 20);
    assert_eq!(p.daily_budget_remaining, 30.0);
    assert_eq!(p.trend, SpendTrend::High);
    assert_eq!(p.days_until_exceed, Some(25.0));
    assert_eq!(p.projected_exceed_date, Some(sample_date(2025, 4, 25)));
}

#[test]
fn under_pace_month_stays_within_budget() {
    let now = instant(2025, 4, 10);
    let expenses = vec![
        expense(120.0, instant(2025, 4, 3)),
        expense(80.0, instant(2025, 4, 8)),
    ];

    let forecast = ForecastService::forecast(&expenses, &budget(1000.0), now);
    let p = forecast.projection().expect("projection present");
    assert_eq!(p.daily_average, 20.0);
    assert_eq!(p.projected_month_total, 600.0);
    assert!(!p.will_exceed_budget);
    assert_eq!(p.trend, SpendTrend::Low);
    // Exceed day 50 of April rolls into May.
    assert_eq!(p.projected_exceed_date, Some(sample_date(2025, 5, 20)));
}

#[test]
fn empty_current_month_yields_insufficient_data() {
    let now = instant(2025, 4, 10);
    assert_eq!(
        ForecastService::forecast(&[], &budget(1000.0), now),
        Forecast::InsufficientData
    );

    // Expenses from other months do not help.
    let stale = vec![expense(300.0, instant(2025, 3, 10))];
    assert_eq!(
        ForecastService::forecast(&stale, &budget(1000.0), now),
        Forecast::InsufficientData
    );
}

#[test]
fn last_day_of_month_avoids_the_division_fault() {
    let now = instant(2025, 4, 30);
    let expenses = vec![expense(900.0, instant(2025, 4, 15))];

    let forecast = ForecastService::forecast(&expenses, &budget(1000.0), now);
    let p = forecast.projection().expect("projection present");
    assert_eq!(p.days_remaining, 0);
    assert_eq!(p.daily_budget_remaining, p.remaining);
    assert_eq!(p.remaining, 100.0);
}

#[test]
fn february_month_length_tracks_leap_years() {
    let expenses = vec![expense(290.0, instant(2024, 2, 5))];
    let forecast = ForecastService::forecast(&expenses, &budget(1000.0), instant(2024, 2, 10));
    assert_eq!(
        forecast.projection().expect("projection present").days_in_month,
        29
    );

    let expenses = vec![expense(290.0, instant(2025, 2, 5))];
    let forecast = ForecastService::forecast(&expenses, &budget(1000.0), instant(2025, 2, 10));
    assert_eq!(
        forecast.projection().expect("projection present").days_in_month,
        28
    );
}

#[test]
fn forecast_is_idempotent() {
    let now = instant(2025, 4, 18);
    let expenses = vec![
        expense(42.0, instant(2025, 4, 2)),
        expense(58.5, instant(2025, 4, 11)),
    ];
    let b = budget(750.0);

    let first = ForecastService::forecast(&expenses, &b, now);
    let second = ForecastService::forecast(&expenses, &b, now);
    assert_eq!(first, second);
}

#[test]
fn negative_remaining_once_over_budget() {
    let now = instant(2025, 4, 10);
    let expenses = vec![expense(1200.0, instant(2025, 4, 5))];

    let forecast = ForecastService::forecast(&expenses, &budget(1000.0), now);
    let p = forecast.projection().expect("projection present");
    assert_eq!(p.remaining, -200.0);
    assert!(p.daily_budget_remaining < 0.0);
    assert!(p.will_exceed_budget);
}
