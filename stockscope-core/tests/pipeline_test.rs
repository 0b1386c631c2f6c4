//! End-to-end pipeline tests over the public API.

use chrono::NaiveDate;
use stockscope_core::domain::{columns, PriceBar, PriceTable};
use stockscope_core::metrics::{
    compute_daily_returns, compute_moving_averages, compute_volatility, run_pipeline,
    WindowSettings,
};
use stockscope_core::preview::preview_indices;

fn make_table(closes: &[f64]) -> PriceTable {
    let base_date = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PriceBar {
            date: base_date + chrono::Duration::days(i as i64),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 1000,
            adj_close: close,
        })
        .collect();
    PriceTable::from_bars(bars)
}

fn assert_approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-10,
        "actual={actual}, expected={expected}"
    );
}

#[test]
fn full_pipeline_on_five_day_table() {
    let windows = WindowSettings {
        short_window: 2,
        long_window: 3,
        volatility_window: 2,
    };
    let table = run_pipeline(make_table(&[100.0, 102.0, 101.0, 105.0, 110.0]), &windows).unwrap();

    let returns = table.column(columns::DAILY_RETURN).unwrap();
    assert!(returns[0].is_nan());
    assert_approx(returns[1], 0.02);
    assert_approx(returns[2], -1.0 / 102.0);
    assert_approx(returns[3], 4.0 / 101.0);
    assert_approx(returns[4], 5.0 / 105.0);

    let short = table.column(columns::SHORT_MA).unwrap();
    assert!(short[0].is_nan());
    assert_approx(short[1], 101.0);
    assert_approx(short[4], 107.5);

    let long = table.column(columns::LONG_MA).unwrap();
    assert!(long[1].is_nan());
    assert_approx(long[2], 101.0);
    assert_approx(long[4], (101.0 + 105.0 + 110.0) / 3.0);

    let vol = table.column(columns::VOLATILITY).unwrap();
    assert!(vol[0].is_nan());
    assert!(vol[1].is_nan());
    assert!(vol[2].is_finite());
}

#[test]
fn stages_preserve_the_date_index() {
    let base = make_table(&[100.0, 102.0, 101.0, 105.0, 110.0, 108.0]);
    let dates = base.dates();

    let table = compute_daily_returns(base);
    assert_eq!(table.dates(), dates);

    let table = compute_moving_averages(table, 2, 4);
    assert_eq!(table.dates(), dates);

    let table = compute_volatility(table, 3).unwrap();
    assert_eq!(table.dates(), dates);
}

#[test]
fn volatility_before_returns_is_rejected() {
    let table = make_table(&[100.0, 102.0, 101.0]);
    assert!(compute_volatility(table, 2).is_err());
}

#[test]
fn moving_average_warmup_lengths_follow_each_window() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let table = compute_moving_averages(make_table(&closes), 5, 12);

    let short = table.column(columns::SHORT_MA).unwrap();
    let long = table.column(columns::LONG_MA).unwrap();
    assert_eq!(short.iter().take_while(|v| v.is_nan()).count(), 4);
    assert_eq!(long.iter().take_while(|v| v.is_nan()).count(), 11);
}

#[test]
fn preview_of_a_short_range_has_at_least_one_row() {
    let windows = WindowSettings::default();
    let table = run_pipeline(make_table(&[100.0, 101.0, 102.0]), &windows).unwrap();
    let indices = preview_indices(table.row_count(), 20);
    assert!(!indices.is_empty());
    assert!(indices.iter().all(|&i| i < table.row_count()));
}

#[test]
fn default_windows_on_a_year_of_data() {
    // 252 trading days with the 50/200/21 defaults: the long MA warms up
    // for 199 rows and still produces values, volatility for 21.
    let closes: Vec<f64> = (0..252)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
        .collect();
    let table = run_pipeline(make_table(&closes), &WindowSettings::default()).unwrap();

    let long = table.column(columns::LONG_MA).unwrap();
    assert_eq!(long.iter().take_while(|v| v.is_nan()).count(), 199);
    assert!(long[199..].iter().all(|v| v.is_finite()));

    let vol = table.column(columns::VOLATILITY).unwrap();
    assert_eq!(vol.iter().take_while(|v| v.is_nan()).count(), 21);
    assert!(vol[21..].iter().all(|v| v.is_finite()));
}
