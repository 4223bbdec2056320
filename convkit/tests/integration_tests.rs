//! Integration-level tests for the `convkit` facade crate.

use std::cell::Cell;

use convkit::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ─────────────────────────────────────────────────────────────────────────────
// Known values
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn exact_conversions() {
    assert_eq!(m_to_km(1000.0).unwrap(), 1.0);
    assert_eq!(km_to_m(1.0).unwrap(), 1000.0);
    assert_eq!(lb_to_oz(1.0).unwrap(), 16.0);
    assert_eq!(oz_to_lb(16.0).unwrap(), 1.0);
    assert_eq!(kg_to_g(2.5).unwrap(), 2500.0);
    assert_eq!(mi_to_ft(1.0).unwrap(), 5280.0);
    assert_eq!(ft_to_in(1.0).unwrap(), 12.0);
}

#[test]
fn empirical_factors_round_to_two_places() {
    assert_eq!(round2(mi_to_km(10.0).unwrap()), 16.09);
    assert_eq!(round2(g_to_oz(100.0).unwrap()), 3.53);
    assert_eq!(round2(kg_to_lb(1.0).unwrap()), 2.2);
    assert_eq!(round2(ft_to_m(10.0).unwrap()), 3.05);
}

#[test]
fn zero_converts_to_zero_everywhere() {
    let all: [fn(f64) -> std::result::Result<f64, RangeError>; 22] = [
        m_to_km, km_to_m, m_to_cm, cm_to_m, mi_to_ft, ft_to_mi, ft_to_in, in_to_ft, m_to_ft, ft_to_m, km_to_mi,
        mi_to_km, kg_to_g, g_to_kg, g_to_mg, mg_to_g, lb_to_oz, oz_to_lb, kg_to_lb, lb_to_kg, g_to_oz, oz_to_g,
    ];
    for f in all {
        assert_eq!(f(0.0).unwrap(), 0.0);
        assert!(f(-0.5).is_err());
    }
}

#[test]
fn typed_and_free_conversions_agree() {
    let km = Miles::new(26.2).to::<Kilometer>().unwrap();
    assert_eq!(km.value(), mi_to_km(26.2).unwrap());

    let g = Ounces::new(3.0).to::<Gram>().unwrap();
    assert_relative_eq!(g.value(), 85.0485, max_relative = 1e-12);
}

// ─────────────────────────────────────────────────────────────────────────────
// Rejection
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn negative_input_names_dimension_and_unit() {
    let err = m_to_km(-1.0).unwrap_err();
    assert_eq!(err.to_string(), "Distance in meters cannot be negative: -1");

    let err = lb_to_kg(-2.5).unwrap_err();
    assert_eq!(err.to_string(), "Weight in pounds cannot be negative: -2.5");
    assert_eq!(err.unit(), "pounds");
}

#[test]
fn rejection_happens_before_multiplication() {
    let calls = Cell::new(0usize);
    let spy = |a: f64, b: f64| {
        calls.set(calls.get() + 1);
        arithmetic::multiply(a, b)
    };

    assert!(M_TO_KM.apply_with(-1.0, Validation::Strict, &spy).is_err());
    assert!(OZ_TO_G.apply_with(-0.001, Validation::Lenient, &spy).is_err());
    assert!(KM_TO_MI.apply_with(f64::NAN, Validation::Strict, &spy).is_err());
    assert_eq!(calls.get(), 0);

    assert_eq!(M_TO_KM.apply_with(1000.0, Validation::Strict, &spy), Ok(1.0));
    assert_eq!(calls.get(), 1);
}

#[test]
fn negative_zero_is_accepted() {
    assert_eq!(km_to_m(-0.0).unwrap(), 0.0);
}

#[test]
fn non_finite_policy() {
    assert!(matches!(kg_to_g(f64::NAN), Err(RangeError::NonFinite { .. })));
    assert!(matches!(kg_to_g(f64::INFINITY), Err(RangeError::NonFinite { .. })));
    assert!(matches!(kg_to_g(f64::NEG_INFINITY), Err(RangeError::Negative { .. })));

    let lenient = Converter::new(Validation::Lenient);
    assert_eq!(lenient.convert::<Kilogram, Gram>(f64::INFINITY), Ok(f64::INFINITY));
    assert!(lenient.convert::<Kilogram, Gram>(f64::NEG_INFINITY).is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Arithmetic
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn division_by_zero_is_reported() {
    assert_eq!(arithmetic::divide(10.0, 0.0), Err(DivisionError::Divide));
    assert_eq!(arithmetic::modulo(10.0, 0.0), Err(DivisionError::Modulo));
    assert_eq!(arithmetic::floor_divide(10.0, 0.0), Err(DivisionError::FloorDivide));
    assert_eq!(DivisionError::Divide.to_string(), "cannot divide by zero");
    assert_eq!(DivisionError::Modulo.to_string(), "cannot calculate modulo with zero");
}

#[test]
fn arithmetic_known_values() {
    assert_eq!(arithmetic::divide(10.0, 2.0), Ok(5.0));
    assert_eq!(arithmetic::modulo(10.0, 3.0), Ok(1.0));
    assert_eq!(arithmetic::floor_divide(10.0, 3.0), Ok(3.0));
    assert_eq!(arithmetic::modulo(-7.0, 3.0), Ok(2.0));
    assert_eq!(arithmetic::floor_divide(-7.0, 3.0), Ok(-3.0));
    assert_eq!(arithmetic::power(2.0, 10.0), 1024.0);
    assert_abs_diff_eq!(arithmetic::power(9.0, 0.5), 3.0, epsilon = 1e-12);
}

#[test]
fn mixed_errors_chain_through_crate_error() {
    fn ounces_per_serving(pounds: f64, servings: f64) -> convkit::Result<f64> {
        Ok(arithmetic::divide(lb_to_oz(pounds)?, servings)?)
    }

    assert_eq!(ounces_per_serving(2.0, 4.0), Ok(8.0));
    assert!(matches!(ounces_per_serving(2.0, 0.0), Err(Error::Division(_))));
    assert!(matches!(ounces_per_serving(-2.0, 4.0), Err(Error::Range(_))));
}

// ─────────────────────────────────────────────────────────────────────────────
// Text
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn text_helpers_compose() {
    let words = text::split_string("metre,litre,gram", ",").unwrap();
    let upper: Vec<String> = words.iter().map(|w| text::to_uppercase(w)).collect();
    assert_eq!(text::join_strings(&upper, " | "), "METRE | LITRE | GRAM");
    assert_eq!(text::count_words(&text::replace_substring("a,b,c", ",", " ")), 3);
}

// ─────────────────────────────────────────────────────────────────────────────
// Properties
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn reciprocal_pairs_round_trip(x in 0.0f64..1.0e9) {
        let tol = 1e-9 * x.max(1.0);
        prop_assert!((km_to_m(m_to_km(x).unwrap()).unwrap() - x).abs() <= tol);
        prop_assert!((cm_to_m(m_to_cm(x).unwrap()).unwrap() - x).abs() <= tol);
        prop_assert!((ft_to_mi(mi_to_ft(x).unwrap()).unwrap() - x).abs() <= tol);
        prop_assert!((in_to_ft(ft_to_in(x).unwrap()).unwrap() - x).abs() <= tol);
        prop_assert!((g_to_kg(kg_to_g(x).unwrap()).unwrap() - x).abs() <= tol);
        prop_assert!((mg_to_g(g_to_mg(x).unwrap()).unwrap() - x).abs() <= tol);
        prop_assert!((oz_to_lb(lb_to_oz(x).unwrap()).unwrap() - x).abs() <= tol);
    }

    #[test]
    fn empirical_pairs_round_trip_loosely(x in 0.0f64..1.0e6) {
        let tol = 1e-4 * x.max(1.0);
        prop_assert!((mi_to_km(km_to_mi(x).unwrap()).unwrap() - x).abs() <= tol);
        prop_assert!((ft_to_m(m_to_ft(x).unwrap()).unwrap() - x).abs() <= tol);
        prop_assert!((lb_to_kg(kg_to_lb(x).unwrap()).unwrap() - x).abs() <= tol);
        prop_assert!((oz_to_g(g_to_oz(x).unwrap()).unwrap() - x).abs() <= tol);
    }

    #[test]
    fn multiply_commutes(a in -1.0e12f64..1.0e12, b in -1.0e12f64..1.0e12) {
        prop_assert_eq!(arithmetic::multiply(a, b), arithmetic::multiply(b, a));
    }

    #[test]
    fn conversions_are_idempotent(x in 0.0f64..1.0e9) {
        prop_assert_eq!(mi_to_km(x).unwrap().to_bits(), mi_to_km(x).unwrap().to_bits());
        prop_assert_eq!(g_to_oz(x).unwrap().to_bits(), g_to_oz(x).unwrap().to_bits());
    }

    #[test]
    fn negatives_always_rejected(x in -1.0e9f64..-1.0e-9) {
        prop_assert!(m_to_ft(x).is_err());
        prop_assert!(oz_to_g(x).is_err());
        prop_assert!(Converter::new(Validation::Lenient).convert::<Foot, Inch>(x).is_err());
    }
}
