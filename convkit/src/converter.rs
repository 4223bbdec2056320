//! A configured conversion entry point.
//!
//! The free functions in [`distance`](crate::distance) and [`weight`](crate::weight) always validate strictly and
//! multiply with [`arithmetic::multiply`]. A [`Converter`] carries both choices as values, so an application can
//! pick the validation policy from its configuration and tests can substitute the multiplication primitive.

use convkit_core::{arithmetic, ConvertTo, Multiply, Quantity, RangeError, Unit, Validation};

use crate::config::{ConfigError, ConverterConfig};

/// Function-pointer type of the default multiplication primitive.
pub type MultiplyFn = fn(f64, f64) -> f64;

/// Converts magnitudes under a fixed validation policy and multiplication primitive.
///
/// ```rust
/// use convkit::distance::{Kilometer, Mile, Miles};
/// use convkit::{Converter, Validation};
///
/// let strict: Converter = Converter::default();
/// assert_eq!(strict.convert::<Mile, Kilometer>(0.0)?, 0.0);
/// assert!(strict.convert::<Mile, Kilometer>(f64::NAN).is_err());
///
/// let lenient = Converter::new(Validation::Lenient);
/// assert!(lenient.convert_quantity::<Mile, Kilometer>(Miles::new(f64::NAN))?.value().is_nan());
/// # Ok::<(), convkit::RangeError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Converter<M = MultiplyFn> {
    validation: Validation,
    multiplier: M,
}

impl Converter {
    /// Creates a converter using [`arithmetic::multiply`].
    pub fn new(validation: Validation) -> Self {
        Self {
            validation,
            multiplier: arithmetic::multiply,
        }
    }

    /// Creates a converter from a loaded configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownPolicy`] if the configured policy name is not recognised.
    pub fn from_config(config: &ConverterConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.validation()?))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Validation::default())
    }
}

impl<M: Multiply> Converter<M> {
    /// Replaces the multiplication primitive, keeping the validation policy.
    ///
    /// ```rust
    /// use std::cell::Cell;
    /// use convkit::weight::{Gram, Kilogram};
    /// use convkit::{Converter, Validation};
    ///
    /// let calls = Cell::new(0);
    /// let converter = Converter::new(Validation::Strict).with_multiplier(|a: f64, b: f64| {
    ///     calls.set(calls.get() + 1);
    ///     a * b
    /// });
    ///
    /// assert!(converter.convert::<Kilogram, Gram>(-1.0).is_err());
    /// assert_eq!(calls.get(), 0);
    /// ```
    pub fn with_multiplier<N: Multiply>(self, multiplier: N) -> Converter<N> {
        Converter {
            validation: self.validation,
            multiplier,
        }
    }

    /// The validation policy in force.
    pub fn validation(&self) -> Validation {
        self.validation
    }

    /// Converts a raw magnitude from `F` to `T`.
    ///
    /// # Errors
    ///
    /// [`RangeError`] if the magnitude is rejected by the validation policy.
    pub fn convert<F, T>(&self, value: f64) -> Result<f64, RangeError>
    where
        F: ConvertTo<T>,
        T: Unit,
    {
        <F as ConvertTo<T>>::FACTOR
            .apply_with(value, self.validation, &self.multiplier)
            .inspect_err(|err| log::debug!("rejected conversion {} -> {}: {}", F::SYMBOL, T::SYMBOL, err))
    }

    /// Converts a typed quantity from `F` to `T`.
    ///
    /// # Errors
    ///
    /// [`RangeError`] if the magnitude is rejected by the validation policy.
    pub fn convert_quantity<F, T>(&self, quantity: Quantity<F>) -> Result<Quantity<T>, RangeError>
    where
        F: ConvertTo<T>,
        T: Unit,
    {
        self.convert::<F, T>(quantity.value()).map(Quantity::new)
    }
}
