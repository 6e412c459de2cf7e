//! Plain-language summary of a signal set.

use rae_signals::{SignalName, SignalSet};

/// Writes one bullet per headline signal.
///
/// A NaN value fails every comparison, so it falls into the second branch of
/// each two-way statement (e.g. "Negative 3M momentum (NaN%)").
#[must_use]
pub fn summarize_signals(ticker: &str, raw: &SignalSet) -> String {
    let momentum = raw[SignalName::Return3M];
    let vol = raw[SignalName::Volatility30D];
    let vol_trend = raw[SignalName::VolumeTrend];
    let beta = raw[SignalName::Beta];
    let sharpe = raw[SignalName::Sharpe60D];

    let mut lines = vec![format!("📈 Research Summary for **{ticker}**")];

    if momentum > 0.0 {
        lines.push(format!(
            "• The stock shows **positive 3M momentum** ({momentum:.2}%)."
        ));
    } else {
        lines.push(format!(
            "• **Negative 3M momentum** ({momentum:.2}%), indicating weakness."
        ));
    }

    lines.push(format!(
        "• 30-day volatility is **{vol:.2}%**, giving a sense of recent risk."
    ));

    if vol_trend > 0.0 {
        lines.push(format!(
            "• **Volume has increased** ({vol_trend:.2}%), suggesting stronger interest."
        ));
    } else {
        lines.push(format!(
            "• **Volume is declining** ({vol_trend:.2}%), indicating cooling activity."
        ));
    }

    if beta > 1.0 {
        lines.push(format!(
            "• Beta {beta:.2} → the stock moves **more than the market**."
        ));
    } else {
        lines.push(format!("• Beta {beta:.2} → the stock is **more defensive**."));
    }

    lines.push(format!(
        "• 60-day Sharpe ratio: **{sharpe:.2}** (risk-adjusted strength)."
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(momentum: f64, vol_trend: f64, beta: f64) -> SignalSet {
        SignalSet::from_fn(|name| match name {
            SignalName::Return3M => momentum,
            SignalName::Volatility30D => 0.2345,
            SignalName::VolumeTrend => vol_trend,
            SignalName::Beta => beta,
            SignalName::Sharpe60D => 1.5,
            _ => 0.0,
        })
    }

    #[test]
    fn bullish_summary() {
        let text = summarize_signals("AAPL", &signals(12.345, 8.0, 1.3));

        assert!(text.starts_with("📈 Research Summary for **AAPL**"));
        assert!(text.contains("positive 3M momentum** (12.35%)"));
        assert!(text.contains("30-day volatility is **0.23%**"));
        assert!(text.contains("Volume has increased** (8.00%)"));
        assert!(text.contains("Beta 1.30 → the stock moves **more than the market**"));
        assert!(text.contains("Sharpe ratio: **1.50**"));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn bearish_summary() {
        let text = summarize_signals("XOM", &signals(-4.0, -12.5, 0.8));

        assert!(text.contains("**Negative 3M momentum** (-4.00%)"));
        assert!(text.contains("**Volume is declining** (-12.50%)"));
        assert!(text.contains("Beta 0.80 → the stock is **more defensive**"));
    }

    #[test]
    fn nan_takes_second_branch() {
        let text = summarize_signals("NEW", &SignalSet::empty());

        assert!(text.contains("**Negative 3M momentum** (NaN%)"));
        assert!(text.contains("**Volume is declining**"));
        assert!(text.contains("Beta NaN → the stock is **more defensive**"));
    }
}
