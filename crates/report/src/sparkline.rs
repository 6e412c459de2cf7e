//! Unicode block sparklines.

/// Eight bar heights from lowest to highest.
pub const SPARK_BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Renders `values` as one bar character per value.
///
/// A constant series renders as the lowest bar. Non-finite values render as
/// a space and are ignored when scaling.
#[must_use]
pub fn sparkline(values: &[f64]) -> String {
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let Some((min, max)) = finite.fold(None, |acc: Option<(f64, f64)>, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    }) else {
        return values.iter().map(|_| ' ').collect();
    };

    let top = SPARK_BARS.len() - 1;
    #[allow(clippy::cast_precision_loss)]
    let levels = top as f64;
    let range = max - min;

    values
        .iter()
        .map(|&v| {
            if !v.is_finite() {
                ' '
            } else if range == 0.0 {
                SPARK_BARS[0]
            } else {
                // (max - min) * 7 / (max - min) is exactly 7
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let level = ((v - min) * levels / range) as usize;
                SPARK_BARS[level.min(top)]
            }
        })
        .collect()
}
