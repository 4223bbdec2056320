//! Conversion factors and the multiplication seam they scale through.

use core::marker::PhantomData;

use crate::arithmetic;
use crate::error::RangeError;
use crate::unit::Unit;
use crate::validation::Validation;

/// The multiplication primitive a [`Factor`] delegates to.
///
/// Implemented for every `Fn(f64, f64) -> f64`, so [`arithmetic::multiply`] can be passed directly, as can a closure
/// that records its calls.
pub trait Multiply {
    /// Returns `a * b`.
    fn multiply(&self, a: f64, b: f64) -> f64;
}

impl<F: Fn(f64, f64) -> f64> Multiply for F {
    #[inline]
    fn multiply(&self, a: f64, b: f64) -> f64 {
        self(a, b)
    }
}

/// A fixed scaling constant from unit `F` to unit `T`.
///
/// Factors can only be built between units of the same dimension. For a reciprocal pair A↔B the two factors multiply
/// to approximately one; the approximation is loose for empirically rounded constants such as miles↔kilometers.
///
/// ```rust
/// use convkit_core::distance::{KM_TO_M, M_TO_KM};
///
/// assert_eq!(M_TO_KM.value(), 0.001);
/// assert!((M_TO_KM.value() * KM_TO_M.value() - 1.0).abs() < 1e-12);
/// assert_eq!(M_TO_KM.apply(1000.0)?, 1.0);
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Factor<F: Unit, T: Unit> {
    value: f64,
    units: PhantomData<(F, T)>,
}

impl<F: Unit, T: Unit<Dim = F::Dim>> Factor<F, T> {
    /// Creates a factor such that `1 F = value T`.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            units: PhantomData,
        }
    }
}

impl<F: Unit, T: Unit> Factor<F, T> {
    /// The raw scaling constant.
    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// Validates `value` under [`Validation::Strict`] and scales it with [`arithmetic::multiply`].
    ///
    /// # Errors
    ///
    /// [`RangeError`] if `value` is negative or non-finite.
    pub fn apply(self, value: f64) -> Result<f64, RangeError> {
        self.apply_with(value, Validation::Strict, &arithmetic::multiply)
    }

    /// Validates `value` under `validation`, then scales it with `multiplier`.
    ///
    /// The multiplier is not invoked when validation fails.
    ///
    /// # Errors
    ///
    /// [`RangeError`] if `value` is rejected by `validation`.
    ///
    /// ```rust
    /// use std::cell::Cell;
    /// use convkit_core::weight::LB_TO_OZ;
    /// use convkit_core::Validation;
    ///
    /// let calls = Cell::new(0);
    /// let spy = |a: f64, b: f64| {
    ///     calls.set(calls.get() + 1);
    ///     a * b
    /// };
    /// assert!(LB_TO_OZ.apply_with(-1.0, Validation::Strict, &spy).is_err());
    /// assert_eq!(calls.get(), 0);
    /// assert_eq!(LB_TO_OZ.apply_with(2.0, Validation::Strict, &spy), Ok(32.0));
    /// assert_eq!(calls.get(), 1);
    /// ```
    pub fn apply_with<M>(
        self,
        value: f64,
        validation: Validation,
        multiplier: &M,
    ) -> Result<f64, RangeError>
    where
        M: Multiply + ?Sized,
    {
        validation.check::<F>(value)?;
        Ok(multiplier.multiply(value, self.value))
    }
}
