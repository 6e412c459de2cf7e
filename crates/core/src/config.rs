use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub signals: SignalConfig,
    pub data: DataConfig,
    pub report: ReportConfig,
}

/// Window sizes, in trading days, for each signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    pub one_month_days: usize,
    pub three_month_days: usize,
    pub six_month_days: usize,
    pub volatility_window: usize,
    pub volume_window: usize,
    /// Minimum daily returns each series needs before beta is computed.
    pub beta_min_returns: usize,
    pub sharpe_window: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub benchmark: String,
    pub lookback_days: u32,
    pub yahoo_base_url: String,
    pub requests_per_minute: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub sparkline_days: usize,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            one_month_days: 21,
            three_month_days: 63,
            six_month_days: 126,
            volatility_window: 30,
            volume_window: 30,
            beta_min_returns: 30,
            sharpe_window: 60,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            benchmark: "SPY".to_string(),
            lookback_days: 365,
            yahoo_base_url: "https://query1.finance.yahoo.com".to_string(),
            requests_per_minute: 60,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { sparkline_days: 60 }
    }
}
