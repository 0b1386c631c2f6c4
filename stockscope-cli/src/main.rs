//! StockScope CLI — the analysis pipeline without the TUI.
//!
//! Commands:
//! - `analyze` — fetch a ticker's daily history, derive returns, moving
//!   averages and rolling volatility, print the preview table and the most
//!   recent value of each series

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use stockscope_core::analysis::{run_analysis, AnalysisReport, AnalysisRequest};
use stockscope_core::data::YahooProvider;
use stockscope_core::domain::columns;
use stockscope_core::metrics::WindowSettings;

#[derive(Parser)]
#[command(
    name = "stockscope",
    about = "StockScope CLI — stock price analysis tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch daily history for a ticker and print derived metrics.
    Analyze {
        /// Ticker symbol (e.g., AAPL, MSFT).
        ticker: String,

        /// Start date (YYYY-MM-DD).
        #[arg(long, default_value = "2023-01-01")]
        start: String,

        /// End date (YYYY-MM-DD).
        #[arg(long, default_value = "2024-01-01")]
        end: String,

        /// Short-term moving average window.
        #[arg(long, default_value_t = 50)]
        short_window: usize,

        /// Long-term moving average window.
        #[arg(long, default_value_t = 200)]
        long_window: usize,

        /// Volatility window in trading days.
        #[arg(long, default_value_t = 21)]
        volatility_window: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            ticker,
            start,
            end,
            short_window,
            long_window,
            volatility_window,
        } => run_analyze(
            &ticker,
            &start,
            &end,
            short_window,
            long_window,
            volatility_window,
        ),
    }
}

fn run_analyze(
    ticker: &str,
    start: &str,
    end: &str,
    short_window: usize,
    long_window: usize,
    volatility_window: usize,
) -> Result<()> {
    if short_window == 0 || long_window == 0 || volatility_window == 0 {
        bail!("window sizes must be at least 1");
    }

    let start = NaiveDate::parse_from_str(start, "%Y-%m-%d")?;
    let end = NaiveDate::parse_from_str(end, "%Y-%m-%d")?;

    let provider = YahooProvider::new();
    let request = AnalysisRequest {
        ticker: ticker.trim().to_uppercase(),
        start,
        end,
        windows: WindowSettings {
            short_window,
            long_window,
            volatility_window,
        },
    };

    let report = run_analysis(&provider, &request)?;
    print_preview(&report);
    print_latest(&report);

    Ok(())
}

fn print_preview(report: &AnalysisReport) {
    println!(
        "Showing stock data for {} from {} to {}:",
        report.ticker, report.start, report.end
    );
    println!();
    println!(
        "{:<12} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Date", "Adj Close", "Return", "Short MA", "Long MA", "Volatility"
    );
    println!("{}", "-".repeat(68));

    let table = &report.table;
    let returns = table.column(columns::DAILY_RETURN);
    let short = table.column(columns::SHORT_MA);
    let long = table.column(columns::LONG_MA);
    let vol = table.column(columns::VOLATILITY);

    for &i in &report.preview_rows {
        let bar = &table.bars()[i];
        println!(
            "{:<12} {:>10} {:>10} {:>10} {:>10} {:>10}",
            bar.date.to_string(),
            fmt_value(bar.adj_close, 2),
            fmt_value(value_at(returns, i), 4),
            fmt_value(value_at(short, i), 2),
            fmt_value(value_at(long, i), 2),
            fmt_value(value_at(vol, i), 4),
        );
    }
}

fn print_latest(report: &AnalysisReport) {
    let table = &report.table;
    let last = table.row_count() - 1;
    let bar = &table.bars()[last];

    println!();
    println!("=== Latest ({}) ===", bar.date);
    println!("Adj Close:      {}", fmt_value(bar.adj_close, 2));
    println!(
        "Daily Return:   {}",
        fmt_value(value_at(table.column(columns::DAILY_RETURN), last), 4)
    );
    println!(
        "Short MA ({:>3}): {}",
        report.windows.short_window,
        fmt_value(value_at(table.column(columns::SHORT_MA), last), 2)
    );
    println!(
        "Long MA ({:>4}): {}",
        report.windows.long_window,
        fmt_value(value_at(table.column(columns::LONG_MA), last), 2)
    );
    println!(
        "Volatility:     {}",
        fmt_value(value_at(table.column(columns::VOLATILITY), last), 4)
    );
}

fn value_at(column: Option<&[f64]>, i: usize) -> f64 {
    column.and_then(|c| c.get(i)).copied().unwrap_or(f64::NAN)
}

/// Warm-up values print as a dash, not a number.
fn fmt_value(value: f64, precision: usize) -> String {
    if value.is_nan() {
        "-".to_string()
    } else {
        format!("{value:.precision$}")
    }
}
