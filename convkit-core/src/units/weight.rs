//! Weight units and conversions.
//!
//! Metric conversions are exact powers of ten and pound ↔ ounce is exact; kilogram ↔ pound and gram ↔ ounce use
//! rounded factors.
//!
//! ```rust
//! use convkit_core::weight::{g_to_oz, lb_to_oz};
//!
//! assert_eq!(lb_to_oz(1.0)?, 16.0);
//! assert_eq!((g_to_oz(100.0)? * 100.0).round() / 100.0, 3.53);
//! # Ok::<(), convkit_core::RangeError>(())
//! ```

use crate::error::RangeError;
use crate::factor::Factor;
use crate::macros::impl_conversions;
use crate::{Dimension, Quantity};
use convkit_derive::Unit;

/// Dimension tag for weight.
pub enum Weight {}
impl Dimension for Weight {
    const NAME: &'static str = "Weight";
}

/// Kilogram.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kg", name = "kilograms", dimension = Weight)]
pub struct Kilogram;
/// A quantity measured in kilograms.
pub type Kilograms = Quantity<Kilogram>;

/// Gram.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g", name = "grams", dimension = Weight)]
pub struct Gram;
/// A quantity measured in grams.
pub type Grams = Quantity<Gram>;

/// Milligram.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mg", name = "milligrams", dimension = Weight)]
pub struct Milligram;
/// A quantity measured in milligrams.
pub type Milligrams = Quantity<Milligram>;

/// Avoirdupois pound.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lb", name = "pounds", dimension = Weight)]
pub struct Pound;
/// A quantity measured in pounds.
pub type Pounds = Quantity<Pound>;

/// Avoirdupois ounce.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "oz", name = "ounces", dimension = Weight)]
pub struct Ounce;
/// A quantity measured in ounces.
pub type Ounces = Quantity<Ounce>;

// ─────────────────────────────────────────────────────────────────────────────
// Conversion factors
// ─────────────────────────────────────────────────────────────────────────────

/// `1 kg = 1000 g`.
pub const KG_TO_G: Factor<Kilogram, Gram> = Factor::new(1000.0);
/// `1 g = 0.001 kg`.
pub const G_TO_KG: Factor<Gram, Kilogram> = Factor::new(0.001);
/// `1 g = 1000 mg`.
pub const G_TO_MG: Factor<Gram, Milligram> = Factor::new(1000.0);
/// `1 mg = 0.001 g`.
pub const MG_TO_G: Factor<Milligram, Gram> = Factor::new(0.001);
/// `1 lb = 16 oz`.
pub const LB_TO_OZ: Factor<Pound, Ounce> = Factor::new(16.0);
/// `1 oz = 1/16 lb`.
pub const OZ_TO_LB: Factor<Ounce, Pound> = Factor::new(1.0 / 16.0);
/// `1 kg ≈ 2.20462 lb`.
pub const KG_TO_LB: Factor<Kilogram, Pound> = Factor::new(2.20462);
/// `1 lb ≈ 0.453592 kg`.
pub const LB_TO_KG: Factor<Pound, Kilogram> = Factor::new(0.453592);
/// `1 g ≈ 0.035274 oz`.
pub const G_TO_OZ: Factor<Gram, Ounce> = Factor::new(0.035274);
/// `1 oz ≈ 28.3495 g`.
pub const OZ_TO_G: Factor<Ounce, Gram> = Factor::new(28.3495);

impl_conversions!(
    KG_TO_G: Kilogram => Gram,
    G_TO_KG: Gram => Kilogram,
    G_TO_MG: Gram => Milligram,
    MG_TO_G: Milligram => Gram,
    LB_TO_OZ: Pound => Ounce,
    OZ_TO_LB: Ounce => Pound,
    KG_TO_LB: Kilogram => Pound,
    LB_TO_KG: Pound => Kilogram,
    G_TO_OZ: Gram => Ounce,
    OZ_TO_G: Ounce => Gram,
);

// ─────────────────────────────────────────────────────────────────────────────
// Conversion functions
// ─────────────────────────────────────────────────────────────────────────────

/// Converts kilograms to grams.
///
/// # Errors
///
/// [`RangeError`] if `kilograms` is negative or non-finite.
///
/// ```rust
/// use convkit_core::weight::kg_to_g;
/// assert_eq!(kg_to_g(2.5)?, 2500.0);
/// assert!(kg_to_g(-2.5).is_err());
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
pub fn kg_to_g(kilograms: f64) -> Result<f64, RangeError> {
    KG_TO_G.apply(kilograms)
}

/// Converts grams to kilograms.
///
/// # Errors
///
/// [`RangeError`] if `grams` is negative or non-finite.
///
/// ```rust
/// use convkit_core::weight::g_to_kg;
/// assert_eq!(g_to_kg(1000.0)?, 1.0);
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
pub fn g_to_kg(grams: f64) -> Result<f64, RangeError> {
    G_TO_KG.apply(grams)
}

/// Converts grams to milligrams.
///
/// # Errors
///
/// [`RangeError`] if `grams` is negative or non-finite.
///
/// ```rust
/// use convkit_core::weight::g_to_mg;
/// assert_eq!(g_to_mg(2.5)?, 2500.0);
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
pub fn g_to_mg(grams: f64) -> Result<f64, RangeError> {
    G_TO_MG.apply(grams)
}

/// Converts milligrams to grams.
///
/// # Errors
///
/// [`RangeError`] if `milligrams` is negative or non-finite.
///
/// ```rust
/// use convkit_core::weight::mg_to_g;
/// assert_eq!(mg_to_g(1000.0)?, 1.0);
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
pub fn mg_to_g(milligrams: f64) -> Result<f64, RangeError> {
    MG_TO_G.apply(milligrams)
}

/// Converts pounds to ounces.
///
/// # Errors
///
/// [`RangeError`] if `pounds` is negative or non-finite.
///
/// ```rust
/// use convkit_core::weight::lb_to_oz;
/// assert_eq!(lb_to_oz(2.5)?, 40.0);
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
pub fn lb_to_oz(pounds: f64) -> Result<f64, RangeError> {
    LB_TO_OZ.apply(pounds)
}

/// Converts ounces to pounds.
///
/// # Errors
///
/// [`RangeError`] if `ounces` is negative or non-finite.
///
/// ```rust
/// use convkit_core::weight::oz_to_lb;
/// assert_eq!(oz_to_lb(32.0)?, 2.0);
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
pub fn oz_to_lb(ounces: f64) -> Result<f64, RangeError> {
    OZ_TO_LB.apply(ounces)
}

/// Converts kilograms to pounds.
///
/// # Errors
///
/// [`RangeError`] if `kilograms` is negative or non-finite.
///
/// ```rust
/// use convkit_core::weight::kg_to_lb;
/// assert_eq!((kg_to_lb(10.0)? * 100.0).round() / 100.0, 22.05);
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
pub fn kg_to_lb(kilograms: f64) -> Result<f64, RangeError> {
    KG_TO_LB.apply(kilograms)
}

/// Converts pounds to kilograms.
///
/// # Errors
///
/// [`RangeError`] if `pounds` is negative or non-finite.
///
/// ```rust
/// use convkit_core::weight::lb_to_kg;
/// assert_eq!((lb_to_kg(10.0)? * 100.0).round() / 100.0, 4.54);
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
pub fn lb_to_kg(pounds: f64) -> Result<f64, RangeError> {
    LB_TO_KG.apply(pounds)
}

/// Converts grams to ounces.
///
/// # Errors
///
/// [`RangeError`] if `grams` is negative or non-finite.
///
/// ```rust
/// use convkit_core::weight::g_to_oz;
/// assert_eq!((g_to_oz(500.0)? * 100.0).round() / 100.0, 17.64);
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
pub fn g_to_oz(grams: f64) -> Result<f64, RangeError> {
    G_TO_OZ.apply(grams)
}

/// Converts ounces to grams.
///
/// # Errors
///
/// [`RangeError`] if `ounces` is negative or non-finite.
///
/// ```rust
/// use convkit_core::weight::oz_to_g;
/// assert_eq!((oz_to_g(5.0)? * 100.0).round() / 100.0, 141.75);
/// # Ok::<(), convkit_core::RangeError>(())
/// ```
pub fn oz_to_g(ounces: f64) -> Result<f64, RangeError> {
    OZ_TO_G.apply(ounces)
}
