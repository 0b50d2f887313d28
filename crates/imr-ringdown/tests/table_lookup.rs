use imr_core::errors::codes;
use imr_ringdown::{
    frequency_coefficients, lookup, quality_coefficients, table_fingerprint, CoefficientTable,
    FitCoefficients, ImrError, Mode,
};

#[test]
fn every_supported_mode_has_two_finite_triples() {
    for l in 2..=4 {
        for m in -l..=l {
            let coeffs = lookup(l, m).unwrap_or_else(|err| panic!("l={l} m={m}: {err}"));
            for triple in [coeffs.frequency, coeffs.quality] {
                assert!(triple.c0.is_finite() && triple.c1.is_finite() && triple.c2.is_finite());
                assert_ne!(triple.c1, 0.0);
                assert_ne!(triple.c2, 0.0);
            }
        }
    }
}

#[test]
fn unsupported_l_is_reported_as_such() {
    for (l, m) in [(0, 0), (1, 0), (1, 1), (5, 0), (5, 5), (-2, 2)] {
        let err = lookup(l, m).unwrap_err();
        assert!(matches!(err, ImrError::InvalidMode(_)), "l={l} m={m}");
        assert_eq!(err.code(), codes::MODE_L_OUT_OF_RANGE, "l={l} m={m}");
    }
}

#[test]
fn m_beyond_l_is_reported_as_inconsistent() {
    for (l, m) in [(2, 3), (2, -3), (2, 4), (3, 4), (3, -4), (4, 5), (4, -7)] {
        let err = lookup(l, m).unwrap_err();
        assert!(matches!(err, ImrError::InvalidMode(_)), "l={l} m={m}");
        assert_eq!(err.code(), codes::MODE_M_INCONSISTENT, "l={l} m={m}");
        assert_eq!(err.info().context.get("m"), Some(&m.to_string()));
    }
}

#[test]
fn probing_absent_modes_does_not_fail() {
    let table = CoefficientTable::berti_2008();
    assert!(table.contains(2, 2));
    assert!(!table.contains(2, 3));
    assert!(table.get(3, -4).is_none());
    assert!(table.get(7, 0).is_none());
}

#[test]
fn published_values_are_reproduced() {
    assert_eq!(
        frequency_coefficients(2, 2).unwrap(),
        FitCoefficients::new(1.5251, -1.1568, 0.1292)
    );
    assert_eq!(
        quality_coefficients(2, 2).unwrap(),
        FitCoefficients::new(0.7000, 1.4187, -0.4990)
    );
    assert_eq!(
        quality_coefficients(3, 1).unwrap(),
        FitCoefficients::new(23.8450, -20.7240, 0.03837)
    );
    assert_eq!(
        frequency_coefficients(4, -1).unwrap(),
        FitCoefficients::new(0.7908, 0.02024, 5.4628)
    );
    assert_eq!(
        quality_coefficients(4, -4).unwrap(),
        FitCoefficients::new(3.4000, 0.8696, 1.4074)
    );
}

#[test]
fn lookup_is_repeatable() {
    let first = lookup(3, -2).unwrap();
    let second = lookup(3, -2).unwrap();
    assert!(std::ptr::eq(first, second));

    let modes: Vec<Mode> = CoefficientTable::berti_2008().modes().map(|(mode, _)| mode).collect();
    assert_eq!(modes.len(), 21);
    assert!(modes.iter().all(|mode| mode.m.abs() <= mode.l));
}

#[test]
fn fingerprint_is_stable() {
    assert_eq!(
        table_fingerprint().unwrap(),
        "6bd225c6831212e24ecc6f16ee2719a2588b8ff459353236a701e6a3e9108551"
    );
}
