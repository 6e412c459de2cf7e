//! The fixed set of named signals and their values.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use thiserror::Error;

/// Name of one signal in a `SignalSet`.
///
/// Declaration order is the order signals are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SignalName {
    #[serde(rename = "1M_Return_%")]
    Return1M,
    #[serde(rename = "3M_Return_%")]
    Return3M,
    #[serde(rename = "6M_Return_%")]
    Return6M,
    #[serde(rename = "30D_Volatility_%")]
    Volatility30D,
    #[serde(rename = "Volume_Trend_%")]
    VolumeTrend,
    #[serde(rename = "Beta_vs_SPY")]
    Beta,
    #[serde(rename = "Sharpe_60D")]
    Sharpe60D,
}

impl SignalName {
    pub const ALL: [Self; 7] = [
        Self::Return1M,
        Self::Return3M,
        Self::Return6M,
        Self::Volatility30D,
        Self::VolumeTrend,
        Self::Beta,
        Self::Sharpe60D,
    ];

    /// Stable key used in reports and serialized output.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Return1M => "1M_Return_%",
            Self::Return3M => "3M_Return_%",
            Self::Return6M => "6M_Return_%",
            Self::Volatility30D => "30D_Volatility_%",
            Self::VolumeTrend => "Volume_Trend_%",
            Self::Beta => "Beta_vs_SPY",
            Self::Sharpe60D => "Sharpe_60D",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Return1M => "Price return over 21 trading days (%)",
            Self::Return3M => "Price return over 63 trading days (%)",
            Self::Return6M => "Price return over 126 trading days (%)",
            Self::Volatility30D => "Annualized std of the last 30 daily returns",
            Self::VolumeTrend => "Change in 30-day average volume vs the prior 30 days (%)",
            Self::Beta => "Beta of daily returns against the benchmark",
            Self::Sharpe60D => "Annualized Sharpe ratio of the last 60 daily returns",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SignalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when parsing an unknown signal key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown signal: '{0}'")]
pub struct UnknownSignal(pub String);

impl FromStr for SignalName {
    type Err = UnknownSignal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.key() == s)
            .ok_or_else(|| UnknownSignal(s.to_string()))
    }
}

/// Values for every `SignalName`, NaN meaning "insufficient history".
///
/// Built once and never mutated. Serializes as a map from signal key to
/// number, with non-finite values written as `null`. `null` covers NaN and
/// ±inf alike, so an infinite value reads back as NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalSet {
    values: [f64; 7],
}

impl SignalSet {
    /// Builds a set by evaluating `f` for each signal in report order.
    pub fn from_fn(mut f: impl FnMut(SignalName) -> f64) -> Self {
        let mut values = [f64::NAN; 7];
        for name in SignalName::ALL {
            values[name.index()] = f(name);
        }
        Self { values }
    }

    /// A set where every signal is NaN.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_fn(|_| f64::NAN)
    }

    #[must_use]
    pub const fn get(&self, name: SignalName) -> f64 {
        self.values[name.index()]
    }

    /// Iterates `(name, value)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (SignalName, f64)> + '_ {
        SignalName::ALL.into_iter().map(|name| (name, self.get(name)))
    }

    /// Number of signals with a non-NaN value.
    #[must_use]
    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_nan()).count()
    }
}

impl Index<SignalName> for SignalSet {
    type Output = f64;

    fn index(&self, name: SignalName) -> &f64 {
        &self.values[name.index()]
    }
}

impl Serialize for SignalSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in self.iter() {
            let value = value.is_finite().then_some(value);
            map.serialize_entry(&name, &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SignalSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SignalSetVisitor;

        impl<'de> Visitor<'de> for SignalSetVisitor {
            type Value = SignalSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of signal names to numbers or null")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<SignalSet, A::Error> {
                let mut values = [f64::NAN; 7];
                while let Some((name, value)) = access.next_entry::<SignalName, Option<f64>>()? {
                    values[name.index()] = value.unwrap_or(f64::NAN);
                }
                Ok(SignalSet { values })
            }
        }

        deserializer.deserialize_map(SignalSetVisitor)
    }
}
