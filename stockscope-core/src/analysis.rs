//! The analysis entry point — one synchronous fetch → pipeline → preview run.

use chrono::NaiveDate;
use thiserror::Error;

use crate::data::{DataError, QuoteProvider};
use crate::domain::PriceTable;
use crate::metrics::{run_pipeline, MetricError, WindowSettings};
use crate::preview::{preview_indices, PREVIEW_TARGET};

/// Parameters for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub ticker: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub windows: WindowSettings,
}

/// Why a run produced nothing to display.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The fetch succeeded but returned zero trading days. Distinct from a
    /// fetch failure: the provider answered, the answer was "nothing here".
    #[error("no data found for {ticker} in the selected date range")]
    NoData { ticker: String },

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Metric(#[from] MetricError),
}

/// Result of a successful run: the augmented table plus preview row indices.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub ticker: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub windows: WindowSettings,
    pub table: PriceTable,
    pub preview_rows: Vec<usize>,
}

/// Fetch, check for an empty result, run the pipeline, sample the preview.
///
/// An empty fetch result aborts the run before the pipeline is invoked.
pub fn run_analysis(
    provider: &dyn QuoteProvider,
    request: &AnalysisRequest,
) -> Result<AnalysisReport, AnalysisError> {
    let table = provider.fetch(&request.ticker, request.start, request.end)?;

    if table.is_empty() {
        return Err(AnalysisError::NoData {
            ticker: request.ticker.clone(),
        });
    }

    let table = run_pipeline(table, &request.windows)?;
    let preview_rows = preview_indices(table.row_count(), PREVIEW_TARGET);

    Ok(AnalysisReport {
        ticker: request.ticker.clone(),
        start: request.start,
        end: request.end,
        windows: request.windows,
        table,
        preview_rows,
    })
}
