//! Remnant fits valid only for initially non-spinning binaries.
//!
//! Final spin `a = sqrt(12) eta - 2.9 eta^2` and final mass
//! `Mf = (1 + (sqrt(8/9) - 1) eta - 0.498 eta^2) M`, where `M` is the initial
//! total mass.

use imr_core::errors::{codes, require_finite, ErrorInfo, ImrError};
use imr_core::SchemaVersion;
use serde::{Deserialize, Serialize};

use crate::masses::{
    components_from_total_mass_ratio, require_mass, symmetric_mass_ratio, total_mass_and_ratio,
};

/// Largest symmetric mass ratio, reached for equal masses.
pub const ETA_MAX: f64 = 0.25;

fn require_eta(eta: f64) -> Result<f64, ImrError> {
    let eta = require_finite("eta", eta)?;
    if eta > 0.0 && eta <= ETA_MAX {
        Ok(eta)
    } else {
        Err(ImrError::InvalidParameter(
            ErrorInfo::new(codes::ETA_OUT_OF_RANGE, "symmetric mass ratio must lie in (0, 0.25]")
                .with_context("eta", eta),
        ))
    }
}

/// Remnant spin from the symmetric mass ratio.
pub fn final_spin_from_eta(eta: f64) -> Result<f64, ImrError> {
    let eta = require_eta(eta)?;
    Ok(12.0_f64.sqrt() * eta - 2.9 * eta * eta)
}

/// Remnant spin from the component masses.
pub fn final_spin_from_components(m1: f64, m2: f64) -> Result<f64, ImrError> {
    final_spin_from_eta(symmetric_mass_ratio(m1, m2)?)
}

/// Remnant spin from total mass and `q = m2 / m1`.
pub fn final_spin_from_total_ratio(total: f64, q: f64) -> Result<f64, ImrError> {
    let (m1, m2) = components_from_total_mass_ratio(total, q)?;
    final_spin_from_components(m1, m2)
}

/// Remnant mass from the symmetric mass ratio and initial total mass.
pub fn final_mass_from_eta_total(eta: f64, total: f64) -> Result<f64, ImrError> {
    let eta = require_eta(eta)?;
    let total = require_mass("total", total)?;
    Ok((1.0 + ((8.0_f64 / 9.0).sqrt() - 1.0) * eta - 0.498 * eta * eta) * total)
}

/// Remnant mass from the component masses.
pub fn final_mass_from_components(m1: f64, m2: f64) -> Result<f64, ImrError> {
    let eta = symmetric_mass_ratio(m1, m2)?;
    final_mass_from_eta_total(eta, m1 + m2)
}

/// Remnant mass from total mass and `q = m2 / m1`.
pub fn final_mass_from_total_ratio(total: f64, q: f64) -> Result<f64, ImrError> {
    let (m1, m2) = components_from_total_mass_ratio(total, q)?;
    final_mass_from_components(m1, m2)
}

/// Every derived quantity of a non-spinning binary, in solar masses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryParameters {
    /// Schema of this payload.
    pub schema_version: SchemaVersion,
    /// First component mass.
    pub m1: f64,
    /// Second component mass.
    pub m2: f64,
    /// Total mass `m1 + m2`.
    pub total_mass: f64,
    /// Mass ratio, always `>= 1`.
    pub mass_ratio: f64,
    /// Symmetric mass ratio.
    pub eta: f64,
    /// Remnant mass.
    pub final_mass: f64,
    /// Remnant dimensionless spin.
    pub final_spin: f64,
}

impl BinaryParameters {
    /// Derives everything from the two component masses.
    pub fn from_components(m1: f64, m2: f64) -> Result<Self, ImrError> {
        let (total_mass, mass_ratio) = total_mass_and_ratio(m1, m2)?;
        let eta = symmetric_mass_ratio(m1, m2)?;
        Ok(Self {
            schema_version: SchemaVersion::CURRENT,
            m1,
            m2,
            total_mass,
            mass_ratio,
            eta,
            final_mass: final_mass_from_eta_total(eta, total_mass)?,
            final_spin: final_spin_from_eta(eta)?,
        })
    }

    /// Fraction of the initial mass radiated away, `1 - Mf / M`.
    pub fn radiated_fraction(&self) -> f64 {
        1.0 - self.final_mass / self.total_mass
    }
}
