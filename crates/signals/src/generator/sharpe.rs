//! Annualized Sharpe ratio over a trailing window.

use super::returns::daily_returns;
use crate::stats::{mean, sample_std, TRADING_DAYS_PER_YEAR};
use rae_core::PriceHistory;

/// Default Sharpe window in trading days.
pub const SHARPE_WINDOW: usize = 60;

/// `mean * 252 / (std * √252)` over the last `window` daily returns.
///
/// Uses the sample standard deviation (N-1 divisor), unlike volatility and
/// beta which use N. No risk-free rate is subtracted. NaN when fewer than
/// `window` daily returns exist or the standard deviation is zero.
#[must_use]
pub fn sharpe_ratio(history: &PriceHistory, window: usize) -> f64 {
    let returns = daily_returns(&history.closes());
    if window == 0 || returns.len() < window {
        return f64::NAN;
    }

    let recent = &returns[returns.len() - window..];
    let mean_annualized = mean(recent) * TRADING_DAYS_PER_YEAR;
    let std_annualized = sample_std(recent) * TRADING_DAYS_PER_YEAR.sqrt();

    if std_annualized == 0.0 {
        return f64::NAN;
    }

    mean_annualized / std_annualized
}
