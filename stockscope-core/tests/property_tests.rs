//! Property tests for pipeline invariants.
//!
//! Uses proptest to verify:
//! 1. No stage adds or removes rows — the date index is preserved exactly
//! 2. Warm-up lengths match each window
//! 3. Daily returns match the direct formula at every row
//! 4. Column addition is the only mutation — base OHLCV values are untouched

use chrono::NaiveDate;
use proptest::prelude::*;

use stockscope_core::domain::{columns, PriceBar, PriceTable};
use stockscope_core::metrics::{run_pipeline, WindowSettings};
use stockscope_core::preview::preview_indices;

fn make_table(closes: &[f64]) -> PriceTable {
    let base_date = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PriceBar {
            date: base_date + chrono::Duration::days(i as i64),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 1_000_000,
            adj_close: close,
        })
        .collect();
    PriceTable::from_bars(bars)
}

fn arb_closes() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0..500.0_f64, 1..120)
}

fn arb_windows() -> impl Strategy<Value = WindowSettings> {
    (1..30_usize, 1..60_usize, 2..20_usize).prop_map(|(s, l, v)| WindowSettings {
        short_window: s,
        long_window: l,
        volatility_window: v,
    })
}

proptest! {
    /// The pipeline never adds or removes rows.
    #[test]
    fn date_index_is_preserved(closes in arb_closes(), windows in arb_windows()) {
        let base = make_table(&closes);
        let dates = base.dates();
        let table = run_pipeline(base, &windows).unwrap();
        prop_assert_eq!(table.dates(), dates);
        for name in table.column_names() {
            prop_assert_eq!(table.column(name).unwrap().len(), closes.len());
        }
    }

    /// Warm-up NaN counts follow the windows: `w - 1` rows for each moving
    /// average, `w` rows for volatility (its input starts one row late).
    #[test]
    fn warmup_lengths_match_windows(closes in arb_closes(), windows in arb_windows()) {
        let table = run_pipeline(make_table(&closes), &windows).unwrap();
        let n = closes.len();

        let short = table.column(columns::SHORT_MA).unwrap();
        let expected = (windows.short_window - 1).min(n);
        prop_assert_eq!(short.iter().take_while(|v| v.is_nan()).count(), expected);

        let long = table.column(columns::LONG_MA).unwrap();
        let expected = (windows.long_window - 1).min(n);
        prop_assert_eq!(long.iter().take_while(|v| v.is_nan()).count(), expected);

        let vol = table.column(columns::VOLATILITY).unwrap();
        let expected = windows.volatility_window.min(n);
        prop_assert_eq!(vol.iter().take_while(|v| v.is_nan()).count(), expected);
    }

    /// Every defined daily return equals the direct day-over-day formula.
    #[test]
    fn daily_returns_match_formula(closes in arb_closes()) {
        let windows = WindowSettings { short_window: 2, long_window: 3, volatility_window: 2 };
        let table = run_pipeline(make_table(&closes), &windows).unwrap();
        let returns = table.column(columns::DAILY_RETURN).unwrap();

        prop_assert!(returns[0].is_nan());
        for t in 1..closes.len() {
            let expected = (closes[t] - closes[t - 1]) / closes[t - 1];
            prop_assert!((returns[t] - expected).abs() < 1e-12);
        }
    }

    /// Stages only append columns; the base bars are untouched.
    #[test]
    fn base_bars_are_untouched(closes in arb_closes(), windows in arb_windows()) {
        let table = run_pipeline(make_table(&closes), &windows).unwrap();
        for (bar, &close) in table.bars().iter().zip(closes.iter()) {
            prop_assert_eq!(bar.adj_close, close);
            prop_assert_eq!(bar.close, close);
        }
    }

    /// Preview sampling never faults and never leaves the index range.
    #[test]
    fn preview_indices_stay_in_bounds(rows in 0..5000_usize, target in 1..100_usize) {
        let indices = preview_indices(rows, target);
        prop_assert_eq!(indices.is_empty(), rows == 0);
        prop_assert!(indices.iter().all(|&i| i < rows.max(1)));
    }
}
