//! Quantity type and its implementations.

use crate::error::RangeError;
use crate::unit::{ConvertTo, Unit};
use crate::validation::Validation;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A magnitude tagged with its unit.
///
/// `Quantity<U>` wraps an `f64` together with phantom type information about its unit `U`, so distances and weights
/// cannot be mixed and every conversion names its target unit.
///
/// Construction does not validate; validation happens when the quantity is converted.
///
/// ```rust
/// use convkit_core::distance::{Kilometer, Meters};
///
/// let m = Meters::new(2500.0);
/// let km = m.to::<Kilometer>()?;
/// assert_eq!(km.value(), 2.5);
/// assert_eq!(km.to_string(), "2.5 km");
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Quantity<U: Unit>(f64, PhantomData<U>);

impl<U: Unit> Quantity<U> {
    /// Creates a new quantity with the given value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw numeric value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Converts this quantity into `T` under [`Validation::Strict`].
    ///
    /// Only directed pairs with a conversion factor are available:
    ///
    /// ```compile_fail
    /// use convkit_core::distance::{Inch, Miles};
    /// let _ = Miles::new(1.0).to::<Inch>();
    /// ```
    ///
    /// # Errors
    ///
    /// [`RangeError`] if the value is negative or non-finite.
    #[inline]
    pub fn to<T: Unit>(self) -> Result<Quantity<T>, RangeError>
    where
        U: ConvertTo<T>,
    {
        self.to_with(Validation::Strict)
    }

    /// Converts this quantity into `T` under the given validation policy.
    ///
    /// # Errors
    ///
    /// [`RangeError`] if the value is rejected by `validation`.
    ///
    /// ```rust
    /// use convkit_core::weight::{Gram, Kilograms};
    /// use convkit_core::Validation;
    ///
    /// let g = Kilograms::new(f64::NAN).to_with::<Gram>(Validation::Lenient)?;
    /// assert!(g.value().is_nan());
    /// assert!(Kilograms::new(f64::NAN).to_with::<Gram>(Validation::Strict).is_err());
    /// # Ok::<(), convkit_core::RangeError>(())
    /// ```
    pub fn to_with<T: Unit>(self, validation: Validation) -> Result<Quantity<T>, RangeError>
    where
        U: ConvertTo<T>,
    {
        <U as ConvertTo<T>>::FACTOR
            .apply_with(self.0, validation, &crate::arithmetic::multiply)
            .map(Quantity::new)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<U: Unit> Div<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<U: Unit> From<f64> for Quantity<U> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit> Serialize for Quantity<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> Deserialize<'de> for Quantity<U> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Quantity::new)
    }
}

/// Serde helper that keeps the unit symbol next to the value.
///
/// Use with `#[serde(with = "convkit_core::serde_with_unit")]`. The field is written as `{"value": 1.5, "unit":
/// "km"}`; on input the `unit` key is optional but must match when present.
///
/// ```rust
/// use convkit_core::distance::Kilometers;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Leg {
///     #[serde(with = "convkit_core::serde_with_unit")]
///     length: Kilometers,
/// }
///
/// let json = serde_json::to_string(&Leg { length: Kilometers::new(1.5) }).unwrap();
/// assert_eq!(json, r#"{"length":{"value":1.5,"unit":"km"}}"#);
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a `Quantity<U>` as a struct with `value` and `unit` fields.
    pub fn serialize<U, S>(quantity: &Quantity<U>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("unit", U::SYMBOL)?;
        state.end()
    }

    /// Deserializes a `Quantity<U>` from a struct with a `value` and an optional, checked `unit` field.
    pub fn deserialize<'de, U, D>(deserializer: D) -> Result<Quantity<U>, D::Error>
    where
        U: Unit,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U>(PhantomData<U>);

        impl<'de, U: Unit> Visitor<'de> for QuantityVisitor<U> {
            type Value = Quantity<U>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<U>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.replace(map.next_value()?).is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                        }
                        Field::Unit => {
                            if unit.replace(map.next_value()?).is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                match unit {
                    Some(found) if found != U::SYMBOL => Err(de::Error::custom(format!(
                        "unit mismatch: expected '{}', found '{}'",
                        U::SYMBOL,
                        found
                    ))),
                    _ => Ok(Quantity::new(value)),
                }
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(PhantomData),
        )
    }
}
