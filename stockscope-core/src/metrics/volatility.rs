//! Rolling volatility — scaled sample standard deviation of daily returns.

use crate::domain::{columns, PriceTable};

use super::MetricError;

/// Adds the `volatility` column.
///
/// `volatility[t]` is the sample standard deviation (N-1 denominator) of
/// `daily_return` over the trailing `window` rows, scaled by `sqrt(window)`.
/// Because the return series itself starts at row 1, the first valid value
/// lands at row index `window`. A window of 1 yields all NaN — the sample
/// standard deviation of one observation is undefined.
///
/// Errors if `daily_return` has not been computed: this stage must run
/// after [`compute_daily_returns`](super::compute_daily_returns).
pub fn compute_volatility(
    mut table: PriceTable,
    window: usize,
) -> Result<PriceTable, MetricError> {
    assert!(window >= 1, "volatility window must be >= 1");

    let returns = table
        .column(columns::DAILY_RETURN)
        .ok_or(MetricError::MissingColumn(columns::DAILY_RETURN))?
        .to_vec();

    let n = returns.len();
    let mut result = vec![f64::NAN; n];
    let scale = (window as f64).sqrt();

    if n >= window {
        for i in (window - 1)..n {
            let slice = &returns[i + 1 - window..=i];
            if slice.iter().any(|v| v.is_nan()) {
                continue;
            }
            let mean = slice.iter().sum::<f64>() / window as f64;
            let variance = slice
                .iter()
                .map(|v| (v - mean) * (v - mean))
                .sum::<f64>()
                / (window as f64 - 1.0);
            result[i] = variance.sqrt() * scale;
        }
    }

    table.add_column(columns::VOLATILITY, result);
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{
        assert_approx, compute_daily_returns, make_table, DEFAULT_EPSILON,
    };

    #[test]
    fn requires_daily_returns() {
        let table = make_table(&[100.0, 102.0, 101.0]);
        let err = compute_volatility(table, 2).unwrap_err();
        assert!(matches!(err, MetricError::MissingColumn("daily_return")));
    }

    #[test]
    fn first_valid_value_at_window_index() {
        // Returns are [NaN, 0.1, -0.1, 0.1]; with window 2 the first window
        // free of the leading NaN ends at row 2.
        let table = compute_daily_returns(make_table(&[100.0, 110.0, 99.0, 108.9]));
        let table = compute_volatility(table, 2).unwrap();
        let vol = table.column(columns::VOLATILITY).unwrap();

        assert!(vol[0].is_nan());
        assert!(vol[1].is_nan());
        // stdev(0.1, -0.1) = sqrt(0.02) ≈ 0.141421; scaled by sqrt(2) = 0.2
        assert_approx(vol[2], 0.2, 1e-9);
        assert_approx(vol[3], 0.2, 1e-9);
    }

    #[test]
    fn constant_returns_have_zero_volatility() {
        // 10% up every day: stdev of a constant series is 0.
        let table = compute_daily_returns(make_table(&[100.0, 110.0, 121.0, 133.1]));
        let table = compute_volatility(table, 2).unwrap();
        let vol = table.column(columns::VOLATILITY).unwrap();
        assert_approx(vol[2], 0.0, DEFAULT_EPSILON);
        assert_approx(vol[3], 0.0, DEFAULT_EPSILON);
    }

    #[test]
    fn window_of_one_is_all_nan() {
        let table = compute_daily_returns(make_table(&[100.0, 102.0, 104.0]));
        let table = compute_volatility(table, 1).unwrap();
        assert!(table
            .column(columns::VOLATILITY)
            .unwrap()
            .iter()
            .all(|v| v.is_nan()));
    }

    #[test]
    fn window_longer_than_series_is_all_nan() {
        let table = compute_daily_returns(make_table(&[100.0, 102.0]));
        let table = compute_volatility(table, 5).unwrap();
        assert!(table
            .column(columns::VOLATILITY)
            .unwrap()
            .iter()
            .all(|v| v.is_nan()));
    }

    #[test]
    fn matches_direct_computation() {
        let closes = [100.0, 104.0, 99.0, 103.0, 108.0, 105.0, 111.0];
        let table = compute_daily_returns(make_table(&closes));
        let returns: Vec<f64> = table.column(columns::DAILY_RETURN).unwrap().to_vec();
        let window = 3;
        let table = compute_volatility(table, window).unwrap();
        let vol = table.column(columns::VOLATILITY).unwrap();

        for i in window..closes.len() {
            let slice = &returns[i + 1 - window..=i];
            let mean = slice.iter().sum::<f64>() / window as f64;
            let expected = (slice
                .iter()
                .map(|v| (v - mean) * (v - mean))
                .sum::<f64>()
                / (window as f64 - 1.0))
                .sqrt()
                * (window as f64).sqrt();
            assert_approx(vol[i], expected, DEFAULT_EPSILON);
        }
    }
}
