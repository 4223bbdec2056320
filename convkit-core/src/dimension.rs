//! Dimension types and traits.

/// Marker trait for **dimensions** (distance, weight, …).
///
/// A dimension is the category that keeps a meter apart from a gram. Each dimension is modelled as an empty enum
/// carrying the display name used in validation errors:
///
/// ```rust
/// use convkit_core::Dimension;
///
/// pub enum Volume {}
/// impl Dimension for Volume {
///     const NAME: &'static str = "Volume";
/// }
/// ```
pub trait Dimension {
    /// Display name, e.g. `"Distance"`.
    const NAME: &'static str;
}
