//! PriceBar — one trading day of a single ticker.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily OHLCV row as delivered by the data provider.
///
/// `adj_close` (closing price adjusted for dividends and splits) is the
/// canonical series every derived metric is computed from. Fields the
/// provider could not supply for a day are `f64::NAN`; downstream code
/// treats NaN as a gap, never as a crash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub adj_close: f64,
}
