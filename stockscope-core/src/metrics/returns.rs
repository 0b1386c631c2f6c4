//! Daily returns — fractional day-over-day change of adjusted close.

use crate::domain::{columns, PriceTable};

/// Adds the `daily_return` column.
///
/// `daily_return[t] = (adj_close[t] - adj_close[t-1]) / adj_close[t-1]`.
/// The first row has no prior close and stays NaN; on a single-row table
/// the whole column is NaN. A NaN close on either side of a pair makes
/// that day's return NaN.
pub fn compute_daily_returns(mut table: PriceTable) -> PriceTable {
    let closes = table.adj_closes();
    let n = closes.len();
    let mut result = vec![f64::NAN; n];

    for t in 1..n {
        let prev = closes[t - 1];
        result[t] = (closes[t] - prev) / prev;
    }

    table.add_column(columns::DAILY_RETURN, result);
    table
}
