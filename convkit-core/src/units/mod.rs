//! Predefined unit families.
//!
//! - [`distance`]: meters, kilometers, centimeters, miles, feet, inches.
//! - [`weight`]: kilograms, grams, milligrams, pounds, ounces.
//!
//! Each family owns its dimension tag, its unit marker types, its conversion factors and one free function per
//! supported direction.

pub mod distance;
pub mod weight;
