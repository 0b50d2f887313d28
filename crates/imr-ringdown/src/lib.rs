#![deny(missing_docs)]
#![doc = "Quasi-normal-mode fits for black-hole ringdown: coefficient lookup, forward fits, spin inversion and mass/frequency conversion."]

/// Element-wise slice helpers.
pub mod batch;
/// Forward fits and spin inversion.
pub mod fit;
/// Extrapolation policy and fit window.
pub mod opts;
/// Physical-unit conversions.
pub mod physical;
/// Serializable ringdown summaries.
pub mod report;
/// Published fit coefficients.
pub mod table;

pub use batch::{
    frequencies_from_spins, masses_and_spins_from_frequencies_qualities,
    physical_frequencies_from_masses_spins, qualities_from_spins, spins_from_qualities,
};
pub use fit::{
    frequency_and_quality_from_spin, frequency_from_spin, quality_from_spin, spin_from_quality,
    QnmFitter,
};
pub use imr_core::{ImrError, Mode};
pub use opts::{ExtrapolationPolicy, FitOpts, SpinWindow};
pub use physical::{
    mass_and_spin_from_frequency_quality, mass_from_frequency_quality,
    physical_frequency_and_quality_from_mass_spin, physical_frequency_from_mass_spin,
};
pub use report::{ringdown_report, RingdownReport};
pub use table::{
    frequency_coefficients, lookup, quality_coefficients, table_fingerprint, CoefficientTable,
    FitCoefficients, ModeCoefficients,
};
