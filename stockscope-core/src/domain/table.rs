//! PriceTable — trading-day bars plus derived metric columns.

use chrono::NaiveDate;

use super::bar::PriceBar;

/// Names of the columns the metric pipeline adds.
pub mod columns {
    pub const DAILY_RETURN: &str = "daily_return";
    pub const SHORT_MA: &str = "short_ma";
    pub const LONG_MA: &str = "long_ma";
    pub const VOLATILITY: &str = "volatility";
}

/// A time-ordered table keyed by trading date.
///
/// The bar vector is the fixed date index: derived columns are numeric
/// series of exactly the same length, with `f64::NAN` marking warm-up rows.
/// Pipeline stages only ever append columns — rows are never added, removed,
/// or reordered after construction.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    bars: Vec<PriceBar>,
    derived: Vec<(String, Vec<f64>)>,
}

impl PriceTable {
    /// Build a table from provider bars. Bars must be date-ascending and
    /// unique, which every provider guarantees.
    pub fn from_bars(bars: Vec<PriceBar>) -> Self {
        debug_assert!(
            bars.windows(2).all(|w| w[0].date < w[1].date),
            "bars must have unique ascending dates"
        );
        Self {
            bars,
            derived: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.bars.len()
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// The date index.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    /// The adjusted-close series, the base of every derived metric.
    pub fn adj_closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.adj_close).collect()
    }

    /// A derived column by name, or `None` if no stage has added it yet.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.derived
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    /// Names of the derived columns, in the order they were added.
    pub fn column_names(&self) -> Vec<&str> {
        self.derived.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Append a derived column, replacing any existing column of that name.
    ///
    /// The series must be index-aligned to the bar vector.
    pub fn add_column(&mut self, name: impl Into<String>, values: Vec<f64>) {
        let name = name.into();
        assert_eq!(
            values.len(),
            self.bars.len(),
            "column '{name}' must match the table's row count"
        );
        match self.derived.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = values,
            None => self.derived.push((name, values)),
        }
    }
}
