//! The metric pipeline — pure transformations over a price table.
//!
//! Three stages in a fixed order: daily returns → moving averages → rolling
//! volatility. Each stage consumes the table and returns it with one or more
//! derived columns appended; no stage touches the date index. Warm-up rows
//! are `f64::NAN`, the same convention charts and previews render as gaps.

pub mod moving_average;
pub mod returns;
pub mod volatility;

pub use moving_average::compute_moving_averages;
pub use returns::compute_daily_returns;
pub use volatility::compute_volatility;

use thiserror::Error;

use crate::domain::PriceTable;

/// Errors from pipeline stages.
#[derive(Debug, Error)]
pub enum MetricError {
    #[error("derived column '{0}' has not been computed yet")]
    MissingColumn(&'static str),
}

/// Window parameters for one analysis run.
///
/// This is explicit session state: a shell owns one of these across
/// interactions and passes it into every run. The short/long windows are
/// independent — no ordering between them is required or checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSettings {
    pub short_window: usize,
    pub long_window: usize,
    pub volatility_window: usize,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            short_window: 50,
            long_window: 200,
            volatility_window: 21,
        }
    }
}

/// Run the full pipeline in its fixed order.
///
/// Deterministic: re-running on an identical base table with identical
/// windows yields identical column values.
pub fn run_pipeline(
    table: PriceTable,
    windows: &WindowSettings,
) -> Result<PriceTable, MetricError> {
    let table = compute_daily_returns(table);
    let table = compute_moving_averages(table, windows.short_window, windows.long_window);
    compute_volatility(table, windows.volatility_window)
}

/// Create a table from adjusted-close prices for testing.
#[cfg(test)]
pub fn make_table(closes: &[f64]) -> PriceTable {
    use crate::domain::PriceBar;
    let base_date = chrono::NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
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

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for metric tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
