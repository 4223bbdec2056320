//! Error types for arithmetic and conversion operations.

use thiserror::Error;

/// Result type for operations that may fail with either error kind.
pub type Result<T> = core::result::Result<T, Error>;

/// A magnitude handed to a conversion was outside the accepted range.
///
/// Raised before any arithmetic takes place. `dimension` and `unit` name the
/// source unit (e.g. `"Distance"`, `"meters"`).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    /// The magnitude was negative.
    #[error("{dimension} in {unit} cannot be negative: {value}")]
    Negative {
        /// Display name of the dimension.
        dimension: &'static str,
        /// Long name of the unit.
        unit: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The magnitude was NaN or infinite and the validation policy is strict.
    #[error("{dimension} in {unit} must be finite: {value}")]
    NonFinite {
        /// Display name of the dimension.
        dimension: &'static str,
        /// Long name of the unit.
        unit: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl RangeError {
    /// Long name of the unit the rejected value was expressed in.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Negative { unit, .. } | Self::NonFinite { unit, .. } => unit,
        }
    }

    /// Display name of the dimension of the rejected value.
    pub fn dimension(&self) -> &'static str {
        match self {
            Self::Negative { dimension, .. } | Self::NonFinite { dimension, .. } => dimension,
        }
    }

    /// The rejected value.
    pub fn value(&self) -> f64 {
        match self {
            Self::Negative { value, .. } | Self::NonFinite { value, .. } => *value,
        }
    }
}

/// A division-like operation was asked to divide by exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DivisionError {
    /// Raised by [`divide`](crate::arithmetic::divide).
    #[error("cannot divide by zero")]
    Divide,

    /// Raised by [`modulo`](crate::arithmetic::modulo).
    #[error("cannot calculate modulo with zero")]
    Modulo,

    /// Raised by [`floor_divide`](crate::arithmetic::floor_divide).
    #[error("cannot floor-divide by zero")]
    FloorDivide,
}

impl DivisionError {
    /// Name of the operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Divide => "divide",
            Self::Modulo => "modulo",
            Self::FloorDivide => "floor_divide",
        }
    }
}

/// Either error kind, for callers that chain conversions and arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// See [`RangeError`].
    #[error(transparent)]
    Range(#[from] RangeError),

    /// See [`DivisionError`].
    #[error(transparent)]
    Division(#[from] DivisionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_error_message_names_unit_and_value() {
        let err = RangeError::Negative {
            dimension: "Distance",
            unit: "meters",
            value: -1.5,
        };
        assert_eq!(err.to_string(), "Distance in meters cannot be negative: -1.5");
        assert_eq!(err.unit(), "meters");
        assert_eq!(err.dimension(), "Distance");
        assert_eq!(err.value(), -1.5);
    }

    #[test]
    fn non_finite_message() {
        let err = RangeError::NonFinite {
            dimension: "Weight",
            unit: "grams",
            value: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "Weight in grams must be finite: inf");
    }

    #[test]
    fn division_error_messages() {
        assert_eq!(DivisionError::Divide.to_string(), "cannot divide by zero");
        assert_eq!(
            DivisionError::Modulo.to_string(),
            "cannot calculate modulo with zero"
        );
        assert_eq!(DivisionError::FloorDivide.operation(), "floor_divide");
    }

    #[test]
    fn error_wraps_both_kinds_transparently() {
        let err: Error = DivisionError::Divide.into();
        assert_eq!(err.to_string(), "cannot divide by zero");
        assert!(matches!(err, Error::Division(DivisionError::Divide)));

        let range = RangeError::Negative {
            dimension: "Weight",
            unit: "pounds",
            value: -2.0,
        };
        let err: Error = range.into();
        assert_eq!(err, Error::Range(range));
    }
}
