//! Yahoo Finance chart API client with rate limiting.
//!
//! Fetches daily OHLCV bars from the public `/v8/finance/chart` endpoint and
//! converts them to a `PriceHistory`.

use crate::error::{ProviderError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Days, NaiveDate, Utc};
use governor::{Quota, RateLimiter};
use nonzero_ext::nonzero;
use rae_core::{DailyBar, HistoryProvider, PriceHistory};
use reqwest::Client;
use serde::Deserialize;
use std::num::NonZeroU32;
use std::sync::Arc;

/// Default Yahoo Finance API base URL.
pub const YAHOO_CHART_URL: &str = "https://query1.finance.yahoo.com";

/// The endpoint rejects requests without a browser-like user agent.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) rae/0.1";

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Default, Deserialize)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

impl Quote {
    /// Bar at index `i`, or `None` if any field is null or absent.
    fn bar(&self, i: usize, date: NaiveDate) -> Option<DailyBar> {
        let field = |series: &[Option<f64>]| series.get(i).copied().flatten();
        let bar = DailyBar::new(
            date,
            field(&self.open)?,
            field(&self.high)?,
            field(&self.low)?,
            field(&self.close)?,
            field(&self.volume)?,
        );
        bar.is_finite().then_some(bar)
    }
}

/// Converts a chart payload into a history.
///
/// Bars with any null field are dropped. When two timestamps land on the same
/// UTC date (the live bar during a session) the later one wins.
fn parse_chart(symbol: &str, response: ChartResponse) -> Result<PriceHistory> {
    if let Some(err) = response.chart.error {
        return Err(ProviderError::api(
            404,
            format!("{}: {}", err.code, err.description),
        ));
    }

    let Some(result) = response.chart.result.and_then(|r| r.into_iter().next()) else {
        return Err(ProviderError::no_data(symbol));
    };
    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();

    let mut bars: Vec<DailyBar> = Vec::with_capacity(result.timestamp.len());
    let mut dropped = 0usize;

    for (i, ts) in result.timestamp.iter().enumerate() {
        let Some(date) = DateTime::<Utc>::from_timestamp(*ts, 0).map(|dt| dt.date_naive()) else {
            return Err(ProviderError::Parse(format!("invalid timestamp {ts}")));
        };
        let Some(bar) = quote.bar(i, date) else {
            dropped += 1;
            continue;
        };

        match bars.last_mut() {
            Some(last) if last.date == date => *last = bar,
            _ => bars.push(bar),
        }
    }

    if dropped > 0 {
        tracing::debug!("{}: dropped {} bars with null fields", symbol, dropped);
    }
    if bars.is_empty() {
        return Err(ProviderError::no_data(symbol));
    }

    Ok(PriceHistory::from_unsorted(symbol, bars)?)
}

/// Yahoo Finance chart client.
pub struct YahooClient {
    /// HTTP client
    http: Client,
    /// Base URL for API
    base_url: String,
    /// Rate limiter (requests per minute)
    rate_limiter: Arc<RateLimiter<governor::state::NotKeyed, governor::state::InMemoryState, governor::clock::DefaultClock>>,
}

impl YahooClient {
    /// Creates a new client with default settings.
    ///
    /// Rate limited to 60 requests per minute by default.
    pub fn new() -> Self {
        Self::with_rate_limit(nonzero!(60u32))
    }

    /// Creates a new client with custom rate limit.
    pub fn with_rate_limit(requests_per_minute: NonZeroU32) -> Self {
        let quota = Quota::per_minute(requests_per_minute);
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Self {
            http: Client::new(),
            base_url: YAHOO_CHART_URL.to_string(),
            rate_limiter,
        }
    }

    /// Sets a custom base URL (useful for testing).
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Waits for rate limit and makes a GET request.
    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::api(status.as_u16(), text));
        }

        let body = response.json::<T>().await?;
        Ok(body)
    }

    /// Fetches daily bars for `symbol` between `start` and `end` (inclusive).
    ///
    /// # Errors
    /// Returns `NoData` if the response holds no complete bars, `Api` for a
    /// non-2xx status or a chart error payload, and `Network`/`Timeout` for
    /// transport failures.
    pub async fn fetch_daily(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceHistory> {
        let period1 = start.and_hms_opt(0, 0, 0).map_or(0, |dt| dt.and_utc().timestamp());
        let period2 = end
            .checked_add_days(Days::new(1))
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map_or(i64::MAX, |dt| dt.and_utc().timestamp());

        let path = format!(
            "/v8/finance/chart/{symbol}?period1={period1}&period2={period2}&interval=1d&events=history"
        );
        let response: ChartResponse = self.get(&path).await?;
        let history = parse_chart(symbol, response)?;

        tracing::info!(
            "Fetched {} daily bars for {} ({} to {})",
            history.len(),
            symbol,
            start,
            end
        );

        Ok(history)
    }

    /// Fetches the trailing `lookback_days` calendar days up to today.
    ///
    /// # Errors
    /// See [`YahooClient::fetch_daily`].
    pub async fn fetch_recent(&self, symbol: &str, lookback_days: u32) -> Result<PriceHistory> {
        let end = Utc::now().date_naive();
        let start = end
            .checked_sub_days(Days::new(u64::from(lookback_days)))
            .unwrap_or(NaiveDate::MIN);
        self.fetch_daily(symbol, start, end).await
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryProvider for YahooClient {
    async fn fetch_history(&self, symbol: &str, lookback_days: u32) -> anyhow::Result<PriceHistory> {
        Ok(self.fetch_recent(symbol, lookback_days).await?)
    }

    fn name(&self) -> &str {
        "yahoo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // 2025-01-02 and 2025-01-03 at 14:30 UTC
    const TS1: i64 = 1_735_828_200;
    const TS2: i64 = 1_735_914_600;

    fn chart_body(timestamps: &[i64], closes: &[Option<f64>]) -> serde_json::Value {
        let n = timestamps.len();
        serde_json::json!({
            "chart": {
                "result": [{
                    "meta": {"symbol": "AAPL", "currency": "USD"},
                    "timestamp": timestamps,
                    "indicators": {
                        "quote": [{
                            "open": vec![Some(1.0); n],
                            "high": vec![Some(2.0); n],
                            "low": vec![Some(0.5); n],
                            "close": closes,
                            "volume": vec![Some(1_000_000); n]
                        }]
                    }
                }],
                "error": null
            }
        })
    }

    fn parse(body: serde_json::Value) -> Result<PriceHistory> {
        parse_chart("AAPL", serde_json::from_value(body).unwrap())
    }

    #[test]
    fn test_client_creation() {
        let client = YahooClient::new();
        assert_eq!(client.base_url(), YAHOO_CHART_URL);
    }

    #[test]
    fn test_client_with_base_url_trims_slash() {
        let client = YahooClient::new().with_base_url("http://localhost:9999/");
        assert_eq!(client.base_url(), "http://localhost:9999");
    }

    #[test]
    fn test_parse_chart_builds_bars() {
        let history = parse(chart_body(&[TS1, TS2], &[Some(1.5), Some(1.75)])).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history.closes(), vec![1.5, 1.75]);
        assert_eq!(history.first_date(), NaiveDate::from_ymd_opt(2025, 1, 2));
        assert_eq!(history.bars()[0].volume, 1_000_000.0);
    }

    #[test]
    fn test_parse_chart_drops_null_bars() {
        let history = parse(chart_body(&[TS1, TS2], &[None, Some(1.75)])).unwrap();
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_parse_chart_keeps_latest_bar_per_date() {
        let history = parse(chart_body(&[TS1, TS1 + 3_600], &[Some(1.0), Some(1.1)])).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.closes(), vec![1.1]);
    }

    #[test]
    fn test_parse_chart_all_null_is_no_data() {
        let err = parse(chart_body(&[TS1], &[None])).unwrap_err();
        assert!(matches!(err, ProviderError::NoData { .. }));
    }

    #[test]
    fn test_parse_chart_error_payload() {
        let err = parse(serde_json::json!({
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}
            }
        }))
        .unwrap_err();
        assert!(err.to_string().contains("delisted"));
    }

    #[test]
    fn test_parse_chart_empty_result_is_no_data() {
        let err = parse(serde_json::json!({"chart": {"result": [], "error": null}})).unwrap_err();
        assert!(matches!(err, ProviderError::NoData { .. }));
    }

    #[tokio::test]
    async fn test_fetch_daily_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/AAPL"))
            .and(query_param("interval", "1d"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(chart_body(&[TS1, TS2], &[Some(243.85), Some(243.36)])),
            )
            .mount(&mock_server)
            .await;

        let client = YahooClient::new().with_base_url(mock_server.uri());
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        let history = client.fetch_daily("AAPL", start, end).await.unwrap();

        assert_eq!(history.symbol(), "AAPL");
        assert_eq!(history.closes(), vec![243.85, 243.36]);
    }

    #[tokio::test]
    async fn test_fetch_history_via_trait() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/SPY"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(chart_body(&[TS1], &[Some(584.64)])),
            )
            .mount(&mock_server)
            .await;

        let client = YahooClient::new().with_base_url(mock_server.uri());
        let provider: &dyn HistoryProvider = &client;
        let history = provider.fetch_history("SPY", 365).await.unwrap();

        assert_eq!(provider.name(), "yahoo");
        assert_eq!(history.closes(), vec![584.64]);
    }

    #[tokio::test]
    async fn test_fetch_daily_http_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/ZZZZ"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&mock_server)
            .await;

        let client = YahooClient::new().with_base_url(mock_server.uri());
        let err = client.fetch_recent("ZZZZ", 365).await.unwrap_err();

        assert!(matches!(err, ProviderError::Api { status_code: 404, .. }));
        assert!(!err.is_retryable());
    }
}
