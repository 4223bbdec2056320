//! Distance units and conversions.
//!
//! Each conversion is a single validated multiply by a fixed factor; there is no canonical base unit and no chaining
//! through intermediate units. Factors between metric and imperial units are the customary rounded values, so a
//! round trip such as meters → feet → meters is close to, but not exactly, the identity.
//!
//! ```rust
//! use convkit_core::distance::{m_to_km, mi_to_km};
//!
//! assert_eq!(m_to_km(5000.0)?, 5.0);
//! assert_eq!((mi_to_km(10.0)? * 100.0).round() / 100.0, 16.09);
//! # Ok::<(), convkit_core::RangeError>(())
//! ```

use crate::error::RangeError;
use crate::factor::Factor;
use crate::macros::impl_conversions;
use crate::{Dimension, Quantity};
use convkit_derive::Unit;

/// Dimension tag for distance.
pub enum Distance {}
impl Dimension for Distance {
    const NAME: &'static str = "Distance";
}

/// Meter.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", name = "meters", dimension = Distance)]
pub struct Meter;
/// A quantity measured in meters.
pub type Meters = Quantity<Meter>;

/// Kilometer.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km", name = "kilometers", dimension = Distance)]
pub struct Kilometer;
/// A quantity measured in kilometers.
pub type Kilometers = Quantity<Kilometer>;

/// Centimeter.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cm", name = "centimeters", dimension = Distance)]
pub struct Centimeter;
/// A quantity measured in centimeters.
pub type Centimeters = Quantity<Centimeter>;

/// International mile.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mi", name = "miles", dimension = Distance)]
pub struct Mile;
/// A quantity measured in miles.
pub type Miles = Quantity<Mile>;

/// International foot.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft", name = "feet", dimension = Distance)]
pub struct Foot;
/// A quantity measured in feet.
pub type Feet = Quantity<Foot>;

/// Inch.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in", name = "inches", dimension = Distance)]
pub struct Inch;
/// A quantity measured in inches.
pub type Inches = Quantity<Inch>;

// ─────────────────────────────────────────────────────────────────────────────
// Conversion factors
// ─────────────────────────────────────────────────────────────────────────────

/// `1 m = 0.001 km`.
pub const M_TO_KM: Factor<Meter, Kilometer> = Factor::new(0.001);
/// `1 km = 1000 m`.
pub const KM_TO_M: Factor<Kilometer, Meter> = Factor::new(1000.0);
/// `1 m = 100 cm`.
pub const M_TO_CM: Factor<Meter, Centimeter> = Factor::new(100.0);
/// `1 cm = 0.01 m`.
pub const CM_TO_M: Factor<Centimeter, Meter> = Factor::new(0.01);
/// `1 mi = 5280 ft`.
pub const MI_TO_FT: Factor<Mile, Foot> = Factor::new(5280.0);
/// `1 ft = 1/5280 mi`.
pub const FT_TO_MI: Factor<Foot, Mile> = Factor::new(1.0 / 5280.0);
/// `1 ft = 12 in`.
pub const FT_TO_IN: Factor<Foot, Inch> = Factor::new(12.0);
/// `1 in = 1/12 ft`.
pub const IN_TO_FT: Factor<Inch, Foot> = Factor::new(1.0 / 12.0);
/// `1 m ≈ 3.28084 ft`.
pub const M_TO_FT: Factor<Meter, Foot> = Factor::new(3.28084);
/// `1 ft = 0.3048 m`.
pub const FT_TO_M: Factor<Foot, Meter> = Factor::new(0.3048);
/// `1 km ≈ 0.621371 mi`.
pub const KM_TO_MI: Factor<Kilometer, Mile> = Factor::new(0.621371);
/// `1 mi ≈ 1.60934 km`.
pub const MI_TO_KM: Factor<Mile, Kilometer> = Factor::new(1.60934);

impl_conversions!(
    M_TO_KM: Meter => Kilometer,
    KM_TO_M: Kilometer => Meter,
    M_TO_CM: Meter => Centimeter,
    CM_TO_M: Centimeter => Meter,
    MI_TO_FT: Mile => Foot,
    FT_TO_MI: Foot => Mile,
    FT_TO_IN: Foot => Inch,
    IN_TO_FT: Inch => Foot,
    M_TO_FT: Meter => Foot,
    FT_TO_M: Foot => Meter,
    KM_TO_MI: Kilometer => Mile,
    MI_TO_KM: Mile => Kilometer,
);

// ─────────────────────────────────────────────────────────────────────────────
// Conversion functions
// ─────────────────────────────────────────────────────────────────────────────

/// Converts meters to kilometers.
///
/// # Errors
///
/// [`RangeError`] if `meters` is negative or non-finite.
///
/// ```rust
/// use convkit_core::distance::m_to_km;
/// assert_eq!(m_to_km(1000.0)?, 1.0);
/// assert!(m_to_km(-1.0).is_err());
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
pub fn m_to_km(meters: f64) -> Result<f64, RangeError> {
    M_TO_KM.apply(meters)
}

/// Converts kilometers to meters.
///
/// # Errors
///
/// [`RangeError`] if `kilometers` is negative or non-finite.
///
/// ```rust
/// use convkit_core::distance::km_to_m;
/// assert_eq!(km_to_m(2.5)?, 2500.0);
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
pub fn km_to_m(kilometers: f64) -> Result<f64, RangeError> {
    KM_TO_M.apply(kilometers)
}

/// Converts meters to centimeters.
///
/// # Errors
///
/// [`RangeError`] if `meters` is negative or non-finite.
///
/// ```rust
/// use convkit_core::distance::m_to_cm;
/// assert_eq!(m_to_cm(2.5)?, 250.0);
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
pub fn m_to_cm(meters: f64) -> Result<f64, RangeError> {
    M_TO_CM.apply(meters)
}

/// Converts centimeters to meters.
///
/// # Errors
///
/// [`RangeError`] if `centimeters` is negative or non-finite.
///
/// ```rust
/// use convkit_core::distance::cm_to_m;
/// assert_eq!(cm_to_m(100.0)?, 1.0);
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
pub fn cm_to_m(centimeters: f64) -> Result<f64, RangeError> {
    CM_TO_M.apply(centimeters)
}

/// Converts miles to feet.
///
/// # Errors
///
/// [`RangeError`] if `miles` is negative or non-finite.
///
/// ```rust
/// use convkit_core::distance::mi_to_ft;
/// assert_eq!(mi_to_ft(0.5)?, 2640.0);
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
pub fn mi_to_ft(miles: f64) -> Result<f64, RangeError> {
    MI_TO_FT.apply(miles)
}

/// Converts feet to miles.
///
/// # Errors
///
/// [`RangeError`] if `feet` is negative or non-finite.
///
/// ```rust
/// use convkit_core::distance::ft_to_mi;
/// assert!((ft_to_mi(2640.0)? - 0.5).abs() < 1e-12);
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
pub fn ft_to_mi(feet: f64) -> Result<f64, RangeError> {
    FT_TO_MI.apply(feet)
}

/// Converts feet to inches.
///
/// # Errors
///
/// [`RangeError`] if `feet` is negative or non-finite.
///
/// ```rust
/// use convkit_core::distance::ft_to_in;
/// assert_eq!(ft_to_in(2.5)?, 30.0);
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
pub fn ft_to_in(feet: f64) -> Result<f64, RangeError> {
    FT_TO_IN.apply(feet)
}

/// Converts inches to feet.
///
/// # Errors
///
/// [`RangeError`] if `inches` is negative or non-finite.
///
/// ```rust
/// use convkit_core::distance::in_to_ft;
/// assert!((in_to_ft(24.0)? - 2.0).abs() < 1e-12);
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
pub fn in_to_ft(inches: f64) -> Result<f64, RangeError> {
    IN_TO_FT.apply(inches)
}

/// Converts meters to feet.
///
/// # Errors
///
/// [`RangeError`] if `meters` is negative or non-finite.
///
/// ```rust
/// use convkit_core::distance::m_to_ft;
/// assert_eq!((m_to_ft(10.0)? * 100.0).round() / 100.0, 32.81);
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
pub fn m_to_ft(meters: f64) -> Result<f64, RangeError> {
    M_TO_FT.apply(meters)
}

/// Converts feet to meters.
///
/// # Errors
///
/// [`RangeError`] if `feet` is negative or non-finite.
///
/// ```rust
/// use convkit_core::distance::ft_to_m;
/// assert_eq!((ft_to_m(10.0)? * 100.0).round() / 100.0, 3.05);
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
pub fn ft_to_m(feet: f64) -> Result<f64, RangeError> {
    FT_TO_M.apply(feet)
}

/// Converts kilometers to miles.
///
/// # Errors
///
/// [`RangeError`] if `kilometers` is negative or non-finite.
///
/// ```rust
/// use convkit_core::distance::km_to_mi;
/// assert_eq!((km_to_mi(10.0)? * 100.0).round() / 100.0, 6.21);
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
pub fn km_to_mi(kilometers: f64) -> Result<f64, RangeError> {
    KM_TO_MI.apply(kilometers)
}

/// Converts miles to kilometers.
///
/// # Errors
///
/// [`RangeError`] if `miles` is negative or non-finite.
///
/// ```rust
/// use convkit_core::distance::mi_to_km;
/// assert_eq!((mi_to_km(1.0)? * 100.0).round() / 100.0, 1.61);
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
pub fn mi_to_km(miles: f64) -> Result<f64, RangeError> {
    MI_TO_KM.apply(miles)
}
