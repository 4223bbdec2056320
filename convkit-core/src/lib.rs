//! Arithmetic primitives and validated unit conversions.
//!
//! `convkit-core` provides:
//!
//! - [`arithmetic`]: pure scalar operations (`add`, `multiply`, `floor_divide`, …), with division by zero reported as
//!   [`DivisionError`].
//! - [`distance`] and [`weight`]: conversion families. Every conversion validates that its input is a non-negative
//!   magnitude, then performs a single [`arithmetic::multiply`] by a fixed [`Factor`].
//! - [`Quantity<U>`]: an `f64` tagged with a zero-sized unit marker, converted with [`Quantity::to`] only along the
//!   directed pairs that have a factor.
//!
//! Most users should depend on `convkit` (the facade crate), which adds configuration, a [`Validation`]-carrying
//! converter and string utilities.
//!
//! # Quick start
//!
//! ```rust
//! use convkit_core::distance::{km_to_m, Kilometer, Meters};
//!
//! assert_eq!(km_to_m(1.0)?, 1000.0);
//!
//! let km = Meters::new(1250.0).to::<Kilometer>()?;
//! assert!((km.value() - 1.25).abs() < 1e-12);
//! # Ok::<(), convkit_core::RangeError>(())
//! ```
//!
//! Chaining conversions and arithmetic through the crate-level [`Error`]:
//!
//! ```rust
//! use convkit_core::arithmetic::divide;
//! use convkit_core::weight::kg_to_g;
//!
//! fn grams_per_portion(kilograms: f64, portions: f64) -> convkit_core::Result<f64> {
//!     Ok(divide(kg_to_g(kilograms)?, portions)?)
//! }
//!
//! assert_eq!(grams_per_portion(1.5, 3.0)?, 500.0);
//! assert!(grams_per_portion(1.5, 0.0).is_err());
//! assert!(grams_per_portion(-1.5, 3.0).is_err());
//! # Ok::<(), convkit_core::Error>(())
//! ```
//!
//! # Validation
//!
//! Negative magnitudes are always rejected with [`RangeError::Negative`]. By default NaN and infinities are rejected
//! too ([`Validation::Strict`]); [`Validation::Lenient`] lets them propagate through the multiply.
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for `Quantity<U>`; serialization is the raw `f64` value only, or value plus
//!   unit symbol through [`serde_with_unit`].
//!
//! # Logging
//!
//! [`arithmetic::multiply`] emits a `trace` record on the `convkit::arithmetic` target through the `log` facade.
//! Nothing is printed.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod error;
mod factor;
mod macros;
mod quantity;
mod unit;
mod validation;

pub mod arithmetic;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::Dimension;
pub use error::{DivisionError, Error, RangeError, Result};
pub use factor::{Factor, Multiply};
pub use quantity::Quantity;
pub use unit::{ConvertTo, Unit};
pub use validation::Validation;

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Unit families
// ─────────────────────────────────────────────────────────────────────────────

pub mod units;

pub use units::distance;
pub use units::weight;
