//! Simple moving averages of adjusted close.
//!
//! Trailing arithmetic mean over a caller-supplied window; the first
//! `window - 1` rows are NaN (warm-up).

use crate::domain::{columns, PriceTable};

/// Adds the `short_ma` and `long_ma` columns.
///
/// The two windows are independent positive integers; nothing requires
/// the short window to be smaller than the long one.
pub fn compute_moving_averages(
    mut table: PriceTable,
    short_window: usize,
    long_window: usize,
) -> PriceTable {
    assert!(short_window >= 1, "moving-average window must be >= 1");
    assert!(long_window >= 1, "moving-average window must be >= 1");

    let closes = table.adj_closes();
    table.add_column(columns::SHORT_MA, rolling_mean(&closes, short_window));
    table.add_column(columns::LONG_MA, rolling_mean(&closes, long_window));
    table
}

/// Rolling mean with a running window sum.
///
/// Any NaN inside the window makes that output NaN; the window is rescanned
/// when a NaN enters or leaves so the running sum cannot go stale.
pub(crate) fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];

    if n < window {
        return result;
    }

    let mut sum = 0.0;
    let mut nan_in_window = false;
    for &v in values.iter().take(window) {
        if v.is_nan() {
            nan_in_window = true;
        }
        sum += v;
    }

    if !nan_in_window {
        result[window - 1] = sum / window as f64;
    }

    for i in window..n {
        let leaving = values[i - window];
        let entering = values[i];
        sum = sum - leaving + entering;

        if entering.is_nan() || leaving.is_nan() || nan_in_window {
            nan_in_window = false;
            sum = 0.0;
            for &v in &values[(i + 1 - window)..=i] {
                if v.is_nan() {
                    nan_in_window = true;
                }
                sum += v;
            }
            if nan_in_window {
                result[i] = f64::NAN;
                continue;
            }
        }

        result[i] = sum / window as f64;
    }

    result
}
