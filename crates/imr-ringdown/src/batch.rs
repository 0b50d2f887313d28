//! Element-wise application of the scalar operations over slices.
//!
//! Each function stops at the first failing element and returns its error
//! with the element's `index` added to the context.

use imr_core::errors::{codes, ErrorInfo, ImrError};
use imr_core::Mode;

use crate::fit::QnmFitter;

fn map_indexed<T>(
    values: &[f64],
    mut op: impl FnMut(f64) -> Result<T, ImrError>,
) -> Result<Vec<T>, ImrError> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| op(value).map_err(|err| err.with_context("index", index)))
        .collect()
}

fn zip_indexed<T>(
    left: &[f64],
    right: &[f64],
    mut op: impl FnMut(f64, f64) -> Result<T, ImrError>,
) -> Result<Vec<T>, ImrError> {
    if left.len() != right.len() {
        return Err(ImrError::InvalidParameter(
            ErrorInfo::new(codes::LENGTH_MISMATCH, "paired inputs differ in length")
                .with_context("left", left.len())
                .with_context("right", right.len()),
        ));
    }
    left.iter()
        .zip(right)
        .enumerate()
        .map(|(index, (&a, &b))| op(a, b).map_err(|err| err.with_context("index", index)))
        .collect()
}

/// `F(a)` for every spin.
pub fn frequencies_from_spins(
    fitter: &QnmFitter,
    spins: &[f64],
    mode: Mode,
) -> Result<Vec<f64>, ImrError> {
    map_indexed(spins, |spin| fitter.frequency(spin, mode))
}

/// `Q(a)` for every spin.
pub fn qualities_from_spins(
    fitter: &QnmFitter,
    spins: &[f64],
    mode: Mode,
) -> Result<Vec<f64>, ImrError> {
    map_indexed(spins, |spin| fitter.quality(spin, mode))
}

/// `a(Q)` for every quality factor.
pub fn spins_from_qualities(
    fitter: &QnmFitter,
    qualities: &[f64],
    mode: Mode,
) -> Result<Vec<f64>, ImrError> {
    map_indexed(qualities, |quality| fitter.spin_from_quality(quality, mode))
}

/// Physical frequency (Hz) for paired masses and spins.
pub fn physical_frequencies_from_masses_spins(
    fitter: &QnmFitter,
    masses: &[f64],
    spins: &[f64],
    mode: Mode,
) -> Result<Vec<f64>, ImrError> {
    zip_indexed(masses, spins, |mass, spin| {
        fitter.physical_frequency(mass, spin, mode)
    })
}

/// Remnant `(M, a)` for paired frequencies (Hz) and qualities.
pub fn masses_and_spins_from_frequencies_qualities(
    fitter: &QnmFitter,
    frequencies_hz: &[f64],
    qualities: &[f64],
    mode: Mode,
) -> Result<Vec<(f64, f64)>, ImrError> {
    zip_indexed(frequencies_hz, qualities, |frequency, quality| {
        fitter.mass_and_spin(frequency, quality, mode)
    })
}
