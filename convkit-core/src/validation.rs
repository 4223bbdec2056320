//! Magnitude validation shared by every conversion.

use core::fmt::{Display, Formatter};
use core::str::FromStr;

use crate::dimension::Dimension;
use crate::error::RangeError;
use crate::unit::Unit;

/// How strictly a magnitude is checked before it is converted.
///
/// Negative values are rejected under every policy. The policies differ on NaN and infinities: a NaN compares false
/// against zero, so a bare negativity check would let it through and the result would silently be NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Validation {
    /// Reject negative and non-finite magnitudes.
    #[default]
    Strict,
    /// Reject negative magnitudes only; NaN and `+inf` propagate through the multiply.
    Lenient,
}

impl Validation {
    /// Checks that `value` is an acceptable magnitude in unit `U`.
    ///
    /// # Errors
    ///
    /// [`RangeError::Negative`] for values below zero (including `-inf`), and [`RangeError::NonFinite`] for NaN or
    /// `+inf` under [`Validation::Strict`].
    ///
    /// ```rust
    /// use convkit_core::distance::Meter;
    /// use convkit_core::Validation;
    ///
    /// assert!(Validation::Strict.check::<Meter>(0.0).is_ok());
    /// assert!(Validation::Strict.check::<Meter>(-1.0).is_err());
    /// assert!(Validation::Strict.check::<Meter>(f64::NAN).is_err());
    /// assert!(Validation::Lenient.check::<Meter>(f64::NAN).is_ok());
    /// ```
    pub fn check<U: Unit>(self, value: f64) -> Result<(), RangeError> {
        if value < 0.0 {
            return Err(RangeError::Negative {
                dimension: <U::Dim as Dimension>::NAME,
                unit: U::NAME,
                value,
            });
        }
        if self == Self::Strict && !value.is_finite() {
            return Err(RangeError::NonFinite {
                dimension: <U::Dim as Dimension>::NAME,
                unit: U::NAME,
                value,
            });
        }
        Ok(())
    }

    /// Lower-case policy name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

impl Display for Validation {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Validation {
    type Err = String;

    /// Parses `"strict"` or `"lenient"`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            _ => Err(format!("Unknown validation policy: {}", s)),
        }
    }
}
