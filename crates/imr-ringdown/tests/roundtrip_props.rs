use imr_ringdown::{
    mass_and_spin_from_frequency_quality, physical_frequency_from_mass_spin, quality_from_spin,
    spin_from_quality, CoefficientTable,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn fundamental_quality_inverts_exactly(spin in 0.0f64..0.99) {
        let quality = quality_from_spin(spin, 2, 2).unwrap();
        let recovered = spin_from_quality(quality, 2, 2).unwrap();
        prop_assert!((recovered - spin).abs() <= 1e-9 * spin.abs().max(1e-3));
    }

    #[test]
    fn every_mode_inverts_below_high_spin(spin in 0.0f64..0.9) {
        for (mode, _) in CoefficientTable::berti_2008().modes() {
            let quality = quality_from_spin(spin, mode.l, mode.m).unwrap();
            let recovered = spin_from_quality(quality, mode.l, mode.m).unwrap();
            prop_assert!((recovered - spin).abs() < 1e-6, "mode {} spin {} recovered {}", mode, spin, recovered);
        }
    }

    #[test]
    fn mass_and_spin_survive_the_observable_round_trip(mass in 1.0f64..1000.0, spin in 0.0f64..0.95) {
        let frequency = physical_frequency_from_mass_spin(mass, spin, 2, 2).unwrap();
        let quality = quality_from_spin(spin, 2, 2).unwrap();
        let (m, a) = mass_and_spin_from_frequency_quality(frequency, quality, 2, 2).unwrap();
        prop_assert!(((m - mass) / mass).abs() < 1e-6);
        prop_assert!((a - spin).abs() < 1e-6);
    }
}
