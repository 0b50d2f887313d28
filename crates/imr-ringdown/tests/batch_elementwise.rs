use imr_core::errors::codes;
use imr_ringdown::{
    frequencies_from_spins, frequency_from_spin, masses_and_spins_from_frequencies_qualities,
    physical_frequencies_from_masses_spins, physical_frequency_from_mass_spin,
    qualities_from_spins, quality_from_spin, spins_from_qualities, Mode, QnmFitter,
};

const SPINS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 0.95];

#[test]
fn batch_matches_scalar_calls() {
    let fitter = QnmFitter::default();
    let mode = Mode::new(3, 2);
    let frequencies = frequencies_from_spins(&fitter, &SPINS, mode).unwrap();
    let qualities = qualities_from_spins(&fitter, &SPINS, mode).unwrap();
    for (idx, &spin) in SPINS.iter().enumerate() {
        assert_eq!(frequencies[idx], frequency_from_spin(spin, 3, 2).unwrap());
        assert_eq!(qualities[idx], quality_from_spin(spin, 3, 2).unwrap());
    }

    let masses = [10.0, 20.0, 40.0, 80.0, 160.0];
    let physical = physical_frequencies_from_masses_spins(&fitter, &masses, &SPINS, mode).unwrap();
    for idx in 0..SPINS.len() {
        assert_eq!(
            physical[idx],
            physical_frequency_from_mass_spin(masses[idx], SPINS[idx], 3, 2).unwrap()
        );
    }
}

#[test]
fn batch_inversion_round_trips() {
    let fitter = QnmFitter::default();
    let mode = Mode::fundamental();
    let qualities = qualities_from_spins(&fitter, &SPINS, mode).unwrap();
    let spins = spins_from_qualities(&fitter, &qualities, mode).unwrap();
    for (recovered, expected) in spins.iter().zip(SPINS) {
        assert!((recovered - expected).abs() < 1e-9);
    }

    let masses = [5.0, 50.0, 500.0, 62.0, 8.5];
    let frequencies = physical_frequencies_from_masses_spins(&fitter, &masses, &SPINS, mode).unwrap();
    let pairs =
        masses_and_spins_from_frequencies_qualities(&fitter, &frequencies, &qualities, mode).unwrap();
    for ((mass, spin), (expected_mass, expected_spin)) in pairs.into_iter().zip(masses.into_iter().zip(SPINS)) {
        assert!(((mass - expected_mass) / expected_mass).abs() < 1e-9);
        assert!((spin - expected_spin).abs() < 1e-9);
    }
}

#[test]
fn first_failure_reports_its_index() {
    let fitter = QnmFitter::default();
    let err = frequencies_from_spins(&fitter, &[0.1, 0.2, 1.5, f64::NAN], Mode::fundamental())
        .unwrap_err();
    assert_eq!(err.code(), codes::NEGATIVE_BASE_FRACTIONAL_POWER);
    assert_eq!(err.info().context.get("index").map(String::as_str), Some("2"));

    let err = masses_and_spins_from_frequencies_qualities(
        &fitter,
        &[250.0, -1.0],
        &[3.0, 3.0],
        Mode::fundamental(),
    )
    .unwrap_err();
    assert_eq!(err.code(), codes::NON_POSITIVE_FREQUENCY);
    assert_eq!(err.info().context.get("index").map(String::as_str), Some("1"));
}
