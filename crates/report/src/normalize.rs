//! Min-max normalization of a signal set.

use rae_signals::SignalSet;

/// Rescales every value linearly onto [0, 1] using the set's own min and max.
///
/// - NaN values stay NaN and are ignored when finding min and max.
/// - If every value is NaN the set is returned unchanged.
/// - If all non-NaN values are equal, every signal (NaN ones included)
///   maps to 0.5.
///
/// Applying it to a set whose values already span exactly [0, 1] returns
/// the same values.
#[must_use]
pub fn normalize_signals(raw: &SignalSet) -> SignalSet {
    let defined = raw.iter().map(|(_, v)| v).filter(|v| !v.is_nan());

    let Some((min, max)) = defined.fold(None, |acc: Option<(f64, f64)>, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    }) else {
        return *raw;
    };

    if min == max {
        return SignalSet::from_fn(|_| 0.5);
    }

    let range = max - min;
    SignalSet::from_fn(|name| {
        let v = raw[name];
        if v.is_nan() {
            f64::NAN
        } else {
            (v - min) / range
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rae_signals::SignalName;

    fn set(values: [f64; 7]) -> SignalSet {
        SignalSet::from_fn(|name| values[SignalName::ALL.iter().position(|n| *n == name).unwrap()])
    }

    fn values(set: &SignalSet) -> Vec<f64> {
        set.iter().map(|(_, v)| v).collect()
    }

    #[test]
    fn scales_to_unit_interval() {
        let raw = set([0.0, 5.0, 10.0, 2.5, f64::NAN, 7.5, 10.0]);
        let norm = normalize_signals(&raw);

        assert_eq!(norm[SignalName::Return1M], 0.0);
        assert_eq!(norm[SignalName::Return3M], 0.5);
        assert_eq!(norm[SignalName::Return6M], 1.0);
        assert_eq!(norm[SignalName::Volatility30D], 0.25);
        assert!(norm[SignalName::VolumeTrend].is_nan());
        assert_eq!(norm[SignalName::Beta], 0.75);
    }

    #[test]
    fn negative_values_are_shifted() {
        let raw = set([-10.0, 10.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let norm = normalize_signals(&raw);
        assert_eq!(norm[SignalName::Return1M], 0.0);
        assert_eq!(norm[SignalName::Return3M], 1.0);
        assert_eq!(norm[SignalName::Return6M], 0.5);
    }

    #[test]
    fn all_nan_is_unchanged() {
        let norm = normalize_signals(&SignalSet::empty());
        assert_eq!(norm.defined_count(), 0);
    }

    #[test]
    fn constant_values_map_every_key_to_half() {
        let raw = set([3.0, 3.0, f64::NAN, 3.0, 3.0, 3.0, f64::NAN]);
        let norm = normalize_signals(&raw);
        assert!(values(&norm).iter().all(|v| *v == 0.5));
    }

    #[test]
    fn single_defined_value_maps_to_half() {
        let raw = SignalSet::from_fn(|name| if name == SignalName::Beta { 1.2 } else { f64::NAN });
        let norm = normalize_signals(&raw);
        assert_eq!(norm[SignalName::Beta], 0.5);
        assert_eq!(norm[SignalName::Return1M], 0.5);
    }

    #[test]
    fn idempotent_on_unit_interval() {
        let raw = set([0.0, 0.2, 1.0, 0.4, f64::NAN, 0.75, 0.5]);
        let once = normalize_signals(&raw);
        let twice = normalize_signals(&once);

        for ((_, a), (_, b)) in once.iter().zip(twice.iter()) {
            assert!(a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan()));
        }
        assert_eq!(values(&once)[1], 0.2);
    }

    #[test]
    fn normalization_does_not_alter_input() {
        let raw = set([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        let copy = raw;
        let _ = normalize_signals(&raw);
        assert_eq!(raw, copy);
    }
}
