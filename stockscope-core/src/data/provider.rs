//! Quote provider trait and structured error types.
//!
//! The trait abstracts the remote data source so shells can be driven by
//! mock providers in tests. An empty table is a successful fetch — "no data
//! for this range" is an answer, not a failure — so callers must check the
//! row count themselves.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::PriceTable;

/// Structured errors for fetch operations.
///
/// Every variant is terminal for the run: one request per trigger, no
/// retries, no fallback provider.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("data error: {0}")]
    Other(String),
}

/// Trait for daily price data sources.
pub trait QuoteProvider {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch daily bars for a ticker over an inclusive date range.
    ///
    /// Returns an empty table when the provider has no rows for the range.
    fn fetch(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceTable, DataError>;
}
