#![deny(missing_docs)]
#![doc = "Binary mass conversions (component masses, total mass, mass ratio, symmetric mass ratio) and remnant fits for initially non-spinning binary black holes."]

/// Component, total and ratio conversions.
pub mod masses;
/// Final mass and spin of the merger remnant.
pub mod remnant;

pub use masses::{
    components_from_total_mass_ratio, symmetric_mass_ratio,
    symmetric_mass_ratio_from_total_ratio, total_mass_and_ratio,
};
pub use remnant::{
    final_mass_from_components, final_mass_from_eta_total, final_mass_from_total_ratio,
    final_spin_from_components, final_spin_from_eta, final_spin_from_total_ratio,
    BinaryParameters,
};
