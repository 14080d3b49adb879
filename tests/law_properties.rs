//! Property-based tests for the Hosek+17 law
//!
//! These tests verify invariants that should hold for all in-range inputs:
//! - Values and errors scale linearly with A_Ks
//! - The error is the mean of the upper and lower envelope deviations
//! - Sequence queries agree elementwise with scalar queries
//! - Wavelengths outside [0.8, 2.2] are always rejected

use extlaw::law::{MAX_WAVELENGTH_UM, MIN_WAVELENGTH_UM, RATIO_CENTRAL, WAVE_KNOTS_UM, hosek17};
use extlaw::{Evaluation, ExtinctionError, extinction};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

fn in_domain() -> impl Strategy<Value = f64> {
    MIN_WAVELENGTH_UM..=MAX_WAVELENGTH_UM
}

proptest! {
    /// Property: scaling A_Ks scales both the value and the error.
    #[test]
    fn prop_linear_in_normalization(w in in_domain(), k in -50.0f64..50.0) {
        let law = hosek17().unwrap();
        let (base_value, base_error) = law.evaluate_one(1.0, w).unwrap();
        let (value, error) = law.evaluate_one(k, w).unwrap();
        prop_assert!(close(value, k * base_value), "{value} vs {}", k * base_value);
        prop_assert!(close(error, k * base_error), "{error} vs {}", k * base_error);
    }

    /// Property: the error is the mean of the high and low deviations.
    #[test]
    fn prop_error_is_mean_deviation(w in in_domain(), a_ks in 0.0f64..10.0) {
        let law = hosek17().unwrap();
        let env = law.envelope(a_ks, &[w]).unwrap();
        let (value, error) = law.evaluate_one(a_ks, w).unwrap();
        let err_high = env.high[0] - value;
        let err_low = value - env.low[0];
        prop_assert!(close(error, (err_high + err_low) / 2.0));
    }

    /// Property: a sequence query equals the scalar queries, in order.
    #[test]
    fn prop_sequence_matches_scalars(ws in prop::collection::vec(in_domain(), 0..20), a_ks in 0.0f64..5.0) {
        let series = match extinction(a_ks, ws.clone()).unwrap() {
            Evaluation::Series(series) => series,
            other => panic!("sequence query returned {other:?}"),
        };
        prop_assert_eq!(series.len(), ws.len());
        for (i, &w) in ws.iter().enumerate() {
            let (value, error) = extinction(a_ks, w).unwrap().as_scalar().unwrap();
            prop_assert_eq!(series.values[i], value);
            prop_assert_eq!(series.errors[i], error);
        }
    }

    /// Property: anything below 0.8 or above 2.2 microns is rejected.
    #[test]
    fn prop_out_of_domain_rejected(w in prop_oneof![0.0f64..0.7999, 2.2001f64..10.0]) {
        let err = extinction(1.0, w).unwrap_err();
        prop_assert_eq!(err, ExtinctionError::OutOfDomain { wavelength: w });
    }
}

#[test]
fn knots_in_domain_are_exact() {
    for (&w, &ratio) in WAVE_KNOTS_UM.iter().zip(RATIO_CENTRAL.iter()) {
        if w > MAX_WAVELENGTH_UM {
            continue;
        }
        let (value, _) = extinction(1.0, w).unwrap().as_scalar().unwrap();
        assert!((value - ratio).abs() < 1e-9, "at {w}: {value} vs {ratio}");
    }
}

#[test]
fn ks_reference_value() {
    let (value, error) = extinction(1.0, 2.14).unwrap().as_scalar().unwrap();
    assert!((value - 1.0).abs() < 1e-9);
    assert!(error.abs() < 1e-9);
}

#[test]
fn domain_edges() {
    assert!(extinction(1.0, 0.5).is_err());
    assert!(extinction(1.0, 2.5).is_err());
    assert!(extinction(1.0, 0.8).is_ok());
    assert!(extinction(1.0, 2.2).is_ok());
}

#[test]
fn two_element_query_matches_scalar_queries() {
    let (values, errors) = extinction(0.5, vec![1.25, 1.53]).unwrap().into_series().into_parts();
    assert_eq!(values.len(), 2);
    assert_eq!(errors.len(), 2);

    for (i, w) in [1.25, 1.53].into_iter().enumerate() {
        let (value, error) = extinction(0.5, w).unwrap().as_scalar().unwrap();
        assert!((values[i] - value).abs() < 1e-12);
        assert!((errors[i] - error).abs() < 1e-12);
    }
}

#[test]
fn error_is_positive_on_tabulated_blue_side() {
    // The envelope widens towards the blue, so the error is positive there.
    let law = hosek17().unwrap();
    let series = law.evaluate_many(1.0, &[0.8, 0.9, 1.0, 1.25, 1.53, 1.8]).unwrap();
    assert!(series.errors.iter().all(|&e| e > 0.0), "{:?}", series.errors);
}
