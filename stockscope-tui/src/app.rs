//! Application state — single-owner, main-thread only.
//!
//! There is no worker thread: each analysis runs to completion on the UI
//! thread, one trigger at a time. The only state that survives between
//! interactions is the form inputs, including the three window values.

use chrono::NaiveDate;

use stockscope_core::analysis::AnalysisReport;
use stockscope_core::data::{DataError, QuoteProvider};
use stockscope_core::metrics::{run_pipeline, WindowSettings};
use stockscope_core::preview::{preview_indices, PREVIEW_TARGET};

/// Which form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Ticker,
    StartDate,
    EndDate,
    ShortWindow,
    LongWindow,
    VolatilityWindow,
}

impl Field {
    pub fn index(self) -> usize {
        match self {
            Field::Ticker => 0,
            Field::StartDate => 1,
            Field::EndDate => 2,
            Field::ShortWindow => 3,
            Field::LongWindow => 4,
            Field::VolatilityWindow => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Field::Ticker),
            1 => Some(Field::StartDate),
            2 => Some(Field::EndDate),
            3 => Some(Field::ShortWindow),
            4 => Some(Field::LongWindow),
            5 => Some(Field::VolatilityWindow),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Ticker => "Ticker",
            Field::StartDate => "Start date",
            Field::EndDate => "End date",
            Field::ShortWindow => "Short MA window",
            Field::LongWindow => "Long MA window",
            Field::VolatilityWindow => "Volatility window",
        }
    }

    /// Text fields take character input; the rest are sliders.
    pub fn is_text(self) -> bool {
        matches!(self, Field::Ticker | Field::StartDate | Field::EndDate)
    }

    pub fn next(self) -> Field {
        Field::from_index((self.index() + 1) % 6).unwrap()
    }

    pub fn prev(self) -> Field {
        Field::from_index((self.index() + 5) % 6).unwrap()
    }
}

/// Inclusive bounds for one window slider.
#[derive(Debug, Clone, Copy)]
pub struct SliderBounds {
    pub min: usize,
    pub max: usize,
}

impl SliderBounds {
    pub fn clamp(self, value: usize) -> usize {
        value.clamp(self.min, self.max)
    }
}

pub const SHORT_WINDOW_BOUNDS: SliderBounds = SliderBounds { min: 10, max: 100 };
pub const LONG_WINDOW_BOUNDS: SliderBounds = SliderBounds { min: 100, max: 300 };
pub const VOLATILITY_WINDOW_BOUNDS: SliderBounds = SliderBounds { min: 10, max: 50 };

/// Where the current run is in the trigger → display sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Fetching,
    Computing,
    Rendering,
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Top-level application state.
pub struct AppState {
    pub running: bool,
    pub focus: Field,
    pub phase: Phase,

    // Form inputs
    pub ticker_input: String,
    pub start_input: String,
    pub end_input: String,

    /// Window values survive re-renders until explicitly changed.
    pub windows: WindowSettings,

    pub status_message: Option<(String, StatusLevel)>,

    /// The last successful analysis; stays on screen across failed runs.
    pub report: Option<AnalysisReport>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            running: true,
            focus: Field::Ticker,
            phase: Phase::Idle,
            ticker_input: "AAPL".into(),
            start_input: "2023-01-01".into(),
            end_input: "2024-01-01".into(),
            windows: WindowSettings::default(),
            status_message: None,
            report: None,
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }

    /// Parsed form inputs, or a user-facing message for the first bad one.
    fn parse_inputs(&self) -> Result<(String, NaiveDate, NaiveDate), String> {
        let ticker = self.ticker_input.trim().to_uppercase();
        if ticker.is_empty() {
            return Err("Enter a ticker symbol".into());
        }
        let start = NaiveDate::parse_from_str(self.start_input.trim(), "%Y-%m-%d")
            .map_err(|_| format!("Invalid start date '{}' (YYYY-MM-DD)", self.start_input))?;
        let end = NaiveDate::parse_from_str(self.end_input.trim(), "%Y-%m-%d")
            .map_err(|_| format!("Invalid end date '{}' (YYYY-MM-DD)", self.end_input))?;
        Ok((ticker, start, end))
    }

    /// Validate the form and arm a run. The event loop executes it after the
    /// next frame so the Fetching phase is visible before the fetch blocks.
    pub fn trigger_analysis(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        match self.parse_inputs() {
            Ok((ticker, _, _)) => {
                self.phase = Phase::Fetching;
                self.set_status(format!("Fetching {ticker}..."));
            }
            Err(msg) => self.set_error(msg),
        }
    }

    /// The synchronous fetch → pipeline → render sequence for one trigger.
    ///
    /// An empty fetch result aborts before the pipeline runs; any error
    /// returns the shell to Idle with the previous report left on screen.
    pub fn run_analysis(&mut self, provider: &dyn QuoteProvider) {
        let (ticker, start, end) = match self.parse_inputs() {
            Ok(parsed) => parsed,
            Err(msg) => {
                // Unreachable via trigger_analysis, which validates first.
                self.set_error(msg);
                self.phase = Phase::Idle;
                return;
            }
        };

        let table = match provider.fetch(&ticker, start, end) {
            Ok(table) => table,
            Err(e) => {
                self.fail(format_fetch_error(&ticker, &e));
                return;
            }
        };

        if table.is_empty() {
            self.fail(format!(
                "No data found for {ticker} in the selected date range"
            ));
            return;
        }

        self.phase = Phase::Computing;
        let table = match run_pipeline(table, &self.windows) {
            Ok(table) => table,
            Err(e) => {
                self.fail(e.to_string());
                return;
            }
        };

        self.phase = Phase::Rendering;
        let row_count = table.row_count();
        let preview_rows = preview_indices(row_count, PREVIEW_TARGET);
        self.report = Some(AnalysisReport {
            ticker: ticker.clone(),
            start,
            end,
            windows: self.windows,
            table,
            preview_rows,
        });

        if row_count <= self.windows.volatility_window {
            self.set_warning(format!(
                "{ticker}: {row_count} trading days — too few for the volatility window"
            ));
        } else {
            self.set_status(format!("{ticker}: {row_count} trading days loaded"));
        }
        self.phase = Phase::Idle;
    }

    fn fail(&mut self, msg: String) {
        self.set_error(msg);
        self.phase = Phase::Idle;
    }

    /// Adjust the focused slider by `delta`, clamped to its bounds.
    /// No-op on text fields.
    pub fn adjust_focused_window(&mut self, delta: i64) {
        let (value, bounds) = match self.focus {
            Field::ShortWindow => (&mut self.windows.short_window, SHORT_WINDOW_BOUNDS),
            Field::LongWindow => (&mut self.windows.long_window, LONG_WINDOW_BOUNDS),
            Field::VolatilityWindow => {
                (&mut self.windows.volatility_window, VOLATILITY_WINDOW_BOUNDS)
            }
            _ => return,
        };
        let adjusted = value.saturating_add_signed(delta as isize);
        *value = bounds.clamp(adjusted);
    }

    /// The focused text field's buffer, if the focus is on one.
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Ticker => Some(&mut self.ticker_input),
            Field::StartDate => Some(&mut self.start_input),
            Field::EndDate => Some(&mut self.end_input),
            _ => None,
        }
    }
}

fn format_fetch_error(ticker: &str, e: &DataError) -> String {
    match e {
        DataError::SymbolNotFound { .. } => format!("Unknown ticker: {ticker}"),
        other => format!("Fetch failed: {other}"),
    }
}
