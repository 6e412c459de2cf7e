//! Signal engine for the research automation engine.
//!
//! Maps a stock's daily price history (and a benchmark's) to a fixed set of
//! descriptive signals: trailing returns, volatility, volume trend, beta, and
//! Sharpe ratio. Every computation is pure; insufficient history is reported
//! as NaN rather than an error.

pub mod engine;
pub mod generator;
pub mod signal_set;
pub mod stats;

pub use engine::{compute_all_signals, SignalEngine};
pub use generator::{
    beta, daily_returns, period_return, rolling_volatility, sharpe_ratio, volume_trend,
    BETA_MIN_RETURNS, ONE_MONTH_DAYS, SHARPE_WINDOW, SIX_MONTH_DAYS, THREE_MONTH_DAYS,
    VOLATILITY_WINDOW, VOLUME_WINDOW,
};
pub use signal_set::{SignalName, SignalSet, UnknownSignal};
pub use stats::TRADING_DAYS_PER_YEAR;
