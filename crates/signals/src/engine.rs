//! Composes every signal computation into a `SignalSet`.

use crate::generator::{beta, period_return, rolling_volatility, sharpe_ratio, volume_trend};
use crate::signal_set::{SignalName, SignalSet};
use rae_core::{PriceHistory, SignalConfig};

/// Computes the full signal set with configurable windows.
///
/// Holds no state beyond its configuration, so one engine can serve any
/// number of threads.
#[derive(Debug, Clone, Default)]
pub struct SignalEngine {
    config: SignalConfig,
}

impl SignalEngine {
    #[must_use]
    pub const fn new(config: SignalConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Computes every signal for `history`, using `benchmark` only for beta.
    #[must_use]
    pub fn compute(&self, history: &PriceHistory, benchmark: &PriceHistory) -> SignalSet {
        let config = &self.config;
        let signals = SignalSet::from_fn(|name| match name {
            SignalName::Return1M => period_return(history, config.one_month_days),
            SignalName::Return3M => period_return(history, config.three_month_days),
            SignalName::Return6M => period_return(history, config.six_month_days),
            SignalName::Volatility30D => rolling_volatility(history, config.volatility_window),
            SignalName::VolumeTrend => volume_trend(history, config.volume_window),
            SignalName::Beta => beta(history, benchmark, config.beta_min_returns),
            SignalName::Sharpe60D => sharpe_ratio(history, config.sharpe_window),
        });

        tracing::debug!(
            "Computed {}/{} signals for {} ({} bars) against {} ({} bars)",
            signals.defined_count(),
            SignalName::ALL.len(),
            history.symbol(),
            history.len(),
            benchmark.symbol(),
            benchmark.len()
        );

        signals
    }
}

/// Computes every signal with the default windows (21/63/126, 30, 30, 30, 60).
#[must_use]
pub fn compute_all_signals(history: &PriceHistory, benchmark: &PriceHistory) -> SignalSet {
    SignalEngine::default().compute(history, benchmark)
}
