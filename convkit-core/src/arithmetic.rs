//! Scalar arithmetic primitives.
//!
//! Every function here is pure: identical inputs give bit-identical outputs, and nothing is printed. [`multiply`] is
//! the primitive the conversion layer scales with; it emits a `trace` record through the `log` facade, which costs
//! nothing unless a logger is installed with trace enabled.
//!
//! Division-like operations ([`divide`], [`modulo`], [`floor_divide`]) fail with [`DivisionError`] when the divisor
//! is exactly zero. [`modulo`] and [`floor_divide`] use the floored convention: the remainder takes the sign of the
//! divisor and `floor_divide(a, b) * b + modulo(a, b) == a` (up to rounding).

use crate::error::DivisionError;

const TARGET: &str = "convkit::arithmetic";

/// Adds two numbers.
///
/// ```rust
/// use convkit_core::arithmetic::add;
/// assert_eq!(add(2.0, 3.0), 5.0);
/// ```
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtracts `b` from `a`.
///
/// ```rust
/// use convkit_core::arithmetic::subtract;
/// assert_eq!(subtract(5.0, 3.0), 2.0);
/// ```
#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiplies two numbers.
///
/// ```rust
/// use convkit_core::arithmetic::multiply;
/// assert_eq!(multiply(4.0, 5.0), 20.0);
/// ```
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    log::trace!(target: TARGET, "multiply({}, {})", a, b);
    a * b
}

/// Divides `a` by `b`.
///
/// # Errors
///
/// [`DivisionError::Divide`] if `b` is zero.
///
/// ```rust
/// use convkit_core::arithmetic::divide;
/// assert_eq!(divide(10.0, 2.0)?, 5.0);
/// assert!(divide(10.0, 0.0).is_err());
/// # Ok::<(), convkit_core::DivisionError>(())
/// ```
pub fn divide(a: f64, b: f64) -> Result<f64, DivisionError> {
    if b == 0.0 {
        return Err(DivisionError::Divide);
    }
    Ok(a / b)
}

/// Raises `a` to the power `b`.
///
/// A negative base with a fractional exponent yields NaN.
///
/// ```rust
/// use convkit_core::arithmetic::power;
/// assert_eq!(power(2.0, 3.0), 8.0);
/// assert!(power(-8.0, 0.5).is_nan());
/// ```
#[inline]
pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}

/// Remainder of `a` divided by `b`, with the sign of `b`.
///
/// # Errors
///
/// [`DivisionError::Modulo`] if `b` is zero.
///
/// ```rust
/// use convkit_core::arithmetic::modulo;
/// assert_eq!(modulo(10.0, 3.0)?, 1.0);
/// assert_eq!(modulo(-7.0, 3.0)?, 2.0);
/// # Ok::<(), convkit_core::DivisionError>(())
/// ```
pub fn modulo(a: f64, b: f64) -> Result<f64, DivisionError> {
    if b == 0.0 {
        return Err(DivisionError::Modulo);
    }
    Ok(floored_div_mod(a, b).1)
}

/// Floor of `a / b`, consistent with [`modulo`].
///
/// The result is an integral `f64`; it stays a float so that quotients outside the `i64` range (and NaN) are
/// representable.
///
/// # Errors
///
/// [`DivisionError::FloorDivide`] if `b` is zero.
///
/// ```rust
/// use convkit_core::arithmetic::floor_divide;
/// assert_eq!(floor_divide(10.0, 3.0)?, 3.0);
/// assert_eq!(floor_divide(-7.0, 2.0)?, -4.0);
/// # Ok::<(), convkit_core::DivisionError>(())
/// ```
pub fn floor_divide(a: f64, b: f64) -> Result<f64, DivisionError> {
    if b == 0.0 {
        return Err(DivisionError::FloorDivide);
    }
    Ok(floored_div_mod(a, b).0)
}

/// Absolute value.
///
/// ```rust
/// use convkit_core::arithmetic::absolute;
/// assert_eq!(absolute(-5.0), 5.0);
/// ```
#[inline]
pub fn absolute(a: f64) -> f64 {
    a.abs()
}

/// Negation.
///
/// ```rust
/// use convkit_core::arithmetic::negate;
/// assert_eq!(negate(5.0), -5.0);
/// ```
#[inline]
pub fn negate(a: f64) -> f64 {
    -a
}

/// Floored quotient and remainder. `b` must be non-zero.
///
/// Derives the quotient from the truncated remainder rather than from `(a / b).floor()`, which can be off by one
/// when `a / b` rounds up to an integer.
fn floored_div_mod(a: f64, b: f64) -> (f64, f64) {
    let mut rem = a % b;
    let mut div = (a - rem) / b;

    if rem != 0.0 {
        if (b < 0.0) != (rem < 0.0) {
            rem += b;
            div -= 1.0;
        }
    } else {
        rem = 0.0_f64.copysign(b);
    }

    let quotient = if div != 0.0 {
        let floored = div.floor();
        if div - floored > 0.5 {
            floored + 1.0
        } else {
            floored
        }
    } else {
        0.0_f64.copysign(a / b)
    };

    (quotient, rem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Infallible operations
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn basic_operations() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(subtract(5.0, 3.0), 2.0);
        assert_eq!(multiply(4.0, 5.0), 20.0);
        assert_eq!(power(2.0, 3.0), 8.0);
        assert_eq!(absolute(-5.0), 5.0);
        assert_eq!(absolute(5.0), 5.0);
        assert_eq!(negate(5.0), -5.0);
        assert_eq!(negate(-0.5), 0.5);
    }

    #[test]
    fn power_of_negative_base_with_fractional_exponent_is_nan() {
        assert!(power(-8.0, 1.0 / 3.0).is_nan());
        assert_eq!(power(-2.0, 2.0), 4.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Division-like operations
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn divide_by_zero_fails() {
        assert_eq!(divide(10.0, 0.0), Err(DivisionError::Divide));
        assert_eq!(divide(10.0, -0.0), Err(DivisionError::Divide));
        assert_eq!(divide(10.0, 2.0), Ok(5.0));
    }

    #[test]
    fn modulo_by_zero_fails() {
        assert_eq!(modulo(10.0, 0.0), Err(DivisionError::Modulo));
        assert_eq!(modulo(10.0, 3.0), Ok(1.0));
    }

    #[test]
    fn floor_divide_by_zero_fails() {
        assert_eq!(floor_divide(10.0, 0.0), Err(DivisionError::FloorDivide));
        assert_eq!(floor_divide(10.0, 3.0), Ok(3.0));
    }

    #[test]
    fn modulo_sign_follows_divisor() {
        assert_eq!(modulo(-7.0, 3.0).unwrap(), 2.0);
        assert_eq!(modulo(7.0, -3.0).unwrap(), -2.0);
        assert_eq!(modulo(-7.0, -3.0).unwrap(), -1.0);
        assert_abs_diff_eq!(modulo(5.5, 2.0).unwrap(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn zero_remainder_carries_divisor_sign() {
        let rem = modulo(6.0, -3.0).unwrap();
        assert_eq!(rem, 0.0);
        assert!(rem.is_sign_negative());
    }

    #[test]
    fn floor_divide_rounds_towards_negative_infinity() {
        assert_eq!(floor_divide(-7.0, 2.0).unwrap(), -4.0);
        assert_eq!(floor_divide(7.0, -2.0).unwrap(), -4.0);
        assert_eq!(floor_divide(-7.0, -2.0).unwrap(), 3.0);
        assert_eq!(floor_divide(7.5, 2.0).unwrap(), 3.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_multiply_commutes(a in -1e12..1e12f64, b in -1e12..1e12f64) {
            prop_assert_eq!(multiply(a, b), multiply(b, a));
        }

        #[test]
        fn prop_add_commutes(a in -1e12..1e12f64, b in -1e12..1e12f64) {
            prop_assert_eq!(add(a, b), add(b, a));
        }

        #[test]
        fn prop_negate_is_involutive(a in -1e12..1e12f64) {
            prop_assert_eq!(negate(negate(a)), a);
        }

        #[test]
        fn prop_floor_div_mod_identity(a in -1e6..1e6f64, b in 0.5..1e3f64, neg in any::<bool>()) {
            let b = if neg { -b } else { b };
            let q = floor_divide(a, b).unwrap();
            let r = modulo(a, b).unwrap();
            prop_assert_eq!(q, q.floor());
            prop_assert!((q * b + r - a).abs() <= 1e-9 * a.abs().max(1.0));
            prop_assert!(r == 0.0 || (r < 0.0) == (b < 0.0));
            prop_assert!(r.abs() <= b.abs());
        }
    }
}
