//! Yahoo Finance data provider.
//!
//! Fetches daily OHLCV bars from Yahoo's v8 chart API with
//! `includeAdjustedClose=true`. One blocking request per fetch: a failed
//! response is terminal for the run, and a response describing zero trading
//! days parses to an empty table rather than an error.
//!
//! Yahoo Finance has no official API and is subject to unannounced format
//! changes; parse failures surface as `ResponseFormatChanged`.

use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;

use super::provider::{DataError, QuoteProvider};
use crate::domain::{PriceBar, PriceTable};

/// Yahoo Finance v8 chart API response.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
    adjclose: Option<Vec<AdjCloseData>>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<u64>>,
}

#[derive(Debug, Deserialize)]
struct AdjCloseData {
    adjclose: Vec<Option<f64>>,
}

/// Yahoo Finance data provider.
pub struct YahooProvider {
    client: reqwest::blocking::Client,
}

impl YahooProvider {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .expect("failed to build HTTP client");

        Self { client }
    }

    /// Build the chart API URL for a ticker and date range.
    fn chart_url(ticker: &str, start: NaiveDate, end: NaiveDate) -> String {
        let start_ts = start.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp();
        let end_ts = end.and_hms_opt(23, 59, 59).unwrap().and_utc().timestamp();
        format!(
            "https://query2.finance.yahoo.com/v8/finance/chart/{ticker}\
             ?period1={start_ts}&period2={end_ts}&interval=1d\
             &includeAdjustedClose=true"
        )
    }

    /// Parse the chart API response into bars.
    ///
    /// A result with no timestamps means Yahoo knows the ticker but has no
    /// trading days in the range — that is the empty-success case.
    fn parse_response(ticker: &str, resp: ChartResponse) -> Result<Vec<PriceBar>, DataError> {
        let result = resp.chart.result.ok_or_else(|| {
            if let Some(err) = resp.chart.error {
                if err.code == "Not Found" {
                    DataError::SymbolNotFound {
                        symbol: ticker.to_string(),
                    }
                } else {
                    DataError::ResponseFormatChanged(format!("{}: {}", err.code, err.description))
                }
            } else {
                DataError::ResponseFormatChanged("empty result with no error".into())
            }
        })?;

        let data = result
            .into_iter()
            .next()
            .ok_or_else(|| DataError::ResponseFormatChanged("result array is empty".into()))?;

        let timestamps = match data.timestamp {
            Some(ts) => ts,
            None => return Ok(Vec::new()),
        };

        let quote = data
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| DataError::ResponseFormatChanged("no quote data".into()))?;

        let adj_closes = data
            .indicators
            .adjclose
            .and_then(|v| v.into_iter().next())
            .map(|a| a.adjclose);

        let n = timestamps.len();
        let mut bars = Vec::with_capacity(n);

        for (i, &ts) in timestamps.iter().enumerate() {
            let date = chrono::DateTime::from_timestamp(ts, 0)
                .map(|dt| dt.naive_utc().date())
                .ok_or_else(|| {
                    DataError::ResponseFormatChanged(format!("invalid timestamp: {ts}"))
                })?;

            let open = quote.open.get(i).copied().flatten();
            let high = quote.high.get(i).copied().flatten();
            let low = quote.low.get(i).copied().flatten();
            let close = quote.close.get(i).copied().flatten();
            let volume = quote.volume.get(i).copied().flatten();
            let adj_close = adj_closes
                .as_ref()
                .and_then(|v| v.get(i).copied().flatten());

            // Skip rows where all OHLCV are None (holidays/non-trading days)
            if open.is_none()
                && high.is_none()
                && low.is_none()
                && close.is_none()
                && volume.is_none()
            {
                continue;
            }

            bars.push(PriceBar {
                date,
                open: open.unwrap_or(f64::NAN),
                high: high.unwrap_or(f64::NAN),
                low: low.unwrap_or(f64::NAN),
                close: close.unwrap_or(f64::NAN),
                volume: volume.unwrap_or(0),
                adj_close: adj_close.unwrap_or(f64::NAN),
            });
        }

        Ok(bars)
    }
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    fn fetch(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceTable, DataError> {
        let url = Self::chart_url(ticker, start, end);

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| DataError::NetworkUnreachable(e.to_string()))?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DataError::SymbolNotFound {
                symbol: ticker.to_string(),
            });
        }
        if !status.is_success() {
            return Err(DataError::Other(format!("HTTP {status} for {ticker}")));
        }

        let chart: ChartResponse = resp.json().map_err(|e| {
            DataError::ResponseFormatChanged(format!("failed to parse response for {ticker}: {e}"))
        })?;

        let bars = Self::parse_response(ticker, chart)?;
        Ok(PriceTable::from_bars(bars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_fixture(json: &str) -> ChartResponse {
        serde_json::from_str(json).expect("fixture should deserialize")
    }

    #[test]
    fn chart_url_encodes_range() {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let url = YahooProvider::chart_url("AAPL", start, end);
        assert!(url.contains("/chart/AAPL"));
        assert!(url.contains("interval=1d"));
        assert!(url.contains("includeAdjustedClose=true"));
    }

    #[test]
    fn parses_bars_from_fixture() {
        let resp = parse_fixture(
            r#"{"chart":{"result":[{
                "timestamp":[1672756200,1672842600],
                "indicators":{
                    "quote":[{"open":[130.28,126.89],"high":[130.9,128.66],
                              "low":[124.17,125.08],"close":[125.07,126.36],
                              "volume":[112117500,89113600]}],
                    "adjclose":[{"adjclose":[124.22,125.5]}]
                }}],"error":null}}"#,
        );
        let bars = YahooProvider::parse_response("AAPL", resp).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2023, 1, 3).unwrap());
        assert_eq!(bars[0].volume, 112_117_500);
        assert!((bars[0].adj_close - 124.22).abs() < 1e-9);
        assert!(bars[0].date < bars[1].date);
    }

    #[test]
    fn holiday_rows_are_skipped() {
        let resp = parse_fixture(
            r#"{"chart":{"result":[{
                "timestamp":[1672756200,1672842600],
                "indicators":{
                    "quote":[{"open":[130.28,null],"high":[130.9,null],
                              "low":[124.17,null],"close":[125.07,null],
                              "volume":[112117500,null]}],
                    "adjclose":[{"adjclose":[124.22,null]}]
                }}],"error":null}}"#,
        );
        let bars = YahooProvider::parse_response("AAPL", resp).unwrap();
        assert_eq!(bars.len(), 1);
    }

    #[test]
    fn no_timestamps_is_empty_success() {
        let resp = parse_fixture(
            r#"{"chart":{"result":[{
                "indicators":{"quote":[{"open":[],"high":[],"low":[],
                                        "close":[],"volume":[]}]}}],
                "error":null}}"#,
        );
        let bars = YahooProvider::parse_response("AAPL", resp).unwrap();
        assert!(bars.is_empty());
    }

    #[test]
    fn unknown_ticker_is_symbol_not_found() {
        let resp = parse_fixture(
            r#"{"chart":{"result":null,
                "error":{"code":"Not Found","description":"No data found"}}}"#,
        );
        let err = YahooProvider::parse_response("ZZZZZZ", resp).unwrap_err();
        assert!(matches!(err, DataError::SymbolNotFound { .. }));
    }

    #[test]
    fn missing_adjclose_becomes_nan() {
        let resp = parse_fixture(
            r#"{"chart":{"result":[{
                "timestamp":[1672756200],
                "indicators":{
                    "quote":[{"open":[130.28],"high":[130.9],"low":[124.17],
                              "close":[125.07],"volume":[112117500]}]
                }}],"error":null}}"#,
        );
        let bars = YahooProvider::parse_response("AAPL", resp).unwrap();
        assert!(bars[0].adj_close.is_nan());
    }
}
