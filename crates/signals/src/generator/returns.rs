//! Price return signals.

use rae_core::PriceHistory;

/// Default window for the one-month return.
pub const ONE_MONTH_DAYS: usize = 21;
/// Default window for the three-month return.
pub const THREE_MONTH_DAYS: usize = 63;
/// Default window for the six-month return.
pub const SIX_MONTH_DAYS: usize = 126;

/// Fractional close-to-close changes, `close[t] / close[t-1] - 1`.
///
/// The first bar has no predecessor and is dropped, so the result holds
/// one fewer value than `closes` (none for fewer than two closes).
#[must_use]
pub fn daily_returns(closes: &[f64]) -> Vec<f64> {
    closes.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

/// Percent return over the last `days` bars: `(close[-1] / close[-days] - 1) * 100`.
///
/// NaN when the history holds fewer than `days` bars.
#[must_use]
pub fn period_return(history: &PriceHistory, days: usize) -> f64 {
    let bars = history.bars();
    if days == 0 || bars.len() < days {
        return f64::NAN;
    }

    let last = bars[bars.len() - 1].close;
    let base = bars[bars.len() - days].close;
    (last / base - 1.0) * 100.0
}
