//! Coercion of loosely shaped numeric inputs to `f64`.
//!
//! Some data sources emit a field either as a bare number or wrapped in a
//! one-element array (multi-index column exports do this). `Scalar` accepts
//! exactly those two shapes and nothing else.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// A bare number.
    Number(f64),
    /// An ordered sequence that must hold exactly one number.
    Sequence(Vec<f64>),
}

impl Scalar {
    /// Reduces the value to a single `f64`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidScalar` for an empty or multi-element sequence.
    pub fn to_f64(&self) -> Result<f64> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Sequence(values) => match values.as_slice() {
                [value] => Ok(*value),
                other => Err(CoreError::InvalidScalar(format!(
                    "sequence of {} values",
                    other.len()
                ))),
            },
        }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl TryFrom<Scalar> for f64 {
    type Error = CoreError;

    fn try_from(value: Scalar) -> Result<Self> {
        value.to_f64()
    }
}
