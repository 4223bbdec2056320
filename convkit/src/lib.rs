//! Validated distance and weight conversions, arithmetic helpers and string utilities.
//!
//! `convkit` is the user-facing crate in this workspace. It re-exports the full API from `convkit-core` (arithmetic
//! primitives, the conversion families and typed quantities) and adds a configurable [`Converter`], TOML/environment
//! configuration and the [`text`] helpers.
//!
//! # Quick start
//!
//! Free functions take and return plain `f64` magnitudes:
//!
//! ```rust
//! use convkit::{km_to_m, lb_to_oz, mi_to_km};
//!
//! assert_eq!(km_to_m(1.0)?, 1000.0);
//! assert_eq!(lb_to_oz(1.0)?, 16.0);
//! assert_eq!((mi_to_km(10.0)? * 100.0).round() / 100.0, 16.09);
//! # Ok::<(), convkit::RangeError>(())
//! ```
//!
//! Typed quantities only convert along pairs that have a factor:
//!
//! ```rust
//! use convkit::{Foot, Inches, Kilograms, Pound};
//!
//! let feet = Inches::new(30.0).to::<Foot>()?;
//! assert_eq!(feet.value(), 2.5);
//!
//! let pounds = Kilograms::new(1.0).to::<Pound>()?;
//! assert_eq!(pounds.to_string(), "2.20462 lb");
//! # Ok::<(), convkit::RangeError>(())
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use convkit::{Gram, Meters};
//!
//! let _ = Meters::new(1.0).to::<Gram>(); // no conversion across dimensions
//! ```
//!
//! # Errors
//!
//! Negative magnitudes fail with [`RangeError`] before any arithmetic runs. Division by zero fails with
//! [`DivisionError`]. Both convert into [`Error`] for callers that mix them. Configuration loading fails with
//! [`ConfigError`] and [`text::split_string`] with [`text::TextError`].
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for `Quantity<U>`; serialization is the raw `f64` value only, or value plus
//!   unit symbol through [`serde_with_unit`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub use convkit_core::*;

pub mod config;
pub mod converter;
pub mod text;

pub use config::{ConfigError, ConverterConfig};
pub use converter::Converter;

pub use convkit_core::units::distance::*;
pub use convkit_core::units::weight::*;
