//! Unit types and traits.

use crate::dimension::Dimension;
use crate::factor::Factor;
use core::fmt::Debug;

/// Trait implemented by every **unit** type.
///
/// * `NAME` is the long plural name (e.g. `"meters"`) reported when a magnitude is rejected.
/// * `SYMBOL` is the printable string (e.g. `"m"`), shown by [`core::fmt::Display`] on a quantity.
/// * `Dim` ties the unit to its [`Dimension`].
///
/// Built-in units are zero-sized marker structs implementing this trait through `#[derive(Unit)]`.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Dimension to which this unit belongs.
    type Dim: Dimension;

    /// Printable symbol.
    const SYMBOL: &'static str;

    /// Long plural name.
    const NAME: &'static str;
}

/// A unit that has a direct conversion factor into `T`.
///
/// Implemented only for the directed pairs with a defined factor, so `Quantity::<Mile>::to::<Inch>()` does not
/// compile: there is no single-multiply path from miles to inches.
pub trait ConvertTo<T: Unit>: Unit {
    /// The factor that scales a magnitude in `Self` into `T`.
    const FACTOR: Factor<Self, T>;
}
