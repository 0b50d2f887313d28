//! Conversions between dimensionless fits and physical ringdown observables.
//!
//! Masses are in solar masses and frequencies in Hz; `F = 2 pi f T_sun M`.

use std::f64::consts::PI;

use imr_core::errors::{codes, require_positive, ErrorInfo, ImrError};
use imr_core::{Mode, T_SUN};

use crate::fit::QnmFitter;

/// Far outside the fit window `F(a)` turns negative and no physical
/// observable corresponds to it.
pub(crate) fn require_positive_fit(
    dimensionless: f64,
    spin: f64,
    mode: Mode,
) -> Result<f64, ImrError> {
    if dimensionless > 0.0 {
        Ok(dimensionless)
    } else {
        Err(ImrError::NumericDomain(
            ErrorInfo::new(
                codes::NON_POSITIVE_FIT_FREQUENCY,
                format!("frequency fit is {dimensionless} at spin {spin}"),
            )
            .with_context("l", mode.l)
            .with_context("m", mode.m)
            .with_context("spin", spin)
            .with_hint("the spin lies far outside the fit window"),
        ))
    }
}

pub(crate) fn hz_from_dimensionless(dimensionless: f64, mass: f64) -> f64 {
    dimensionless / (T_SUN * mass) / (2.0 * PI)
}

fn mass_from_dimensionless(dimensionless: f64, frequency_hz: f64) -> f64 {
    dimensionless / (2.0 * PI * frequency_hz) / T_SUN
}

impl QnmFitter {
    /// Ringdown frequency in Hz for a remnant of `mass` solar masses.
    pub fn physical_frequency(&self, mass: f64, spin: f64, mode: Mode) -> Result<f64, ImrError> {
        let mass = require_positive("mass", mass, codes::NON_POSITIVE_MASS)?;
        let dimensionless = require_positive_fit(self.frequency(spin, mode)?, spin, mode)?;
        Ok(hz_from_dimensionless(dimensionless, mass))
    }

    /// Ringdown frequency in Hz and quality factor.
    pub fn physical_frequency_and_quality(
        &self,
        mass: f64,
        spin: f64,
        mode: Mode,
    ) -> Result<(f64, f64), ImrError> {
        let mass = require_positive("mass", mass, codes::NON_POSITIVE_MASS)?;
        let (dimensionless, quality) = self.frequency_and_quality(spin, mode)?;
        let dimensionless = require_positive_fit(dimensionless, spin, mode)?;
        Ok((hz_from_dimensionless(dimensionless, mass), quality))
    }

    /// Remnant mass and spin from an observed frequency (Hz) and quality.
    pub fn mass_and_spin(
        &self,
        frequency_hz: f64,
        quality: f64,
        mode: Mode,
    ) -> Result<(f64, f64), ImrError> {
        let frequency_hz =
            require_positive("frequency", frequency_hz, codes::NON_POSITIVE_FREQUENCY)?;
        let spin = self.spin_from_quality(quality, mode)?;
        let dimensionless = require_positive_fit(self.frequency(spin, mode)?, spin, mode)?;
        Ok((mass_from_dimensionless(dimensionless, frequency_hz), spin))
    }
}

/// Ringdown frequency `f = F(a) / (T_sun M) / 2 pi` in Hz.
pub fn physical_frequency_from_mass_spin(
    mass: f64,
    spin: f64,
    l: i32,
    m: i32,
) -> Result<f64, ImrError> {
    QnmFitter::default().physical_frequency(mass, spin, Mode::new(l, m))
}

/// Ringdown frequency in Hz together with the quality factor.
pub fn physical_frequency_and_quality_from_mass_spin(
    mass: f64,
    spin: f64,
    l: i32,
    m: i32,
) -> Result<(f64, f64), ImrError> {
    QnmFitter::default().physical_frequency_and_quality(mass, spin, Mode::new(l, m))
}

/// Remnant `(M, a)` from ringdown frequency (Hz) and quality in mode `(l, m)`.
pub fn mass_and_spin_from_frequency_quality(
    frequency_hz: f64,
    quality: f64,
    l: i32,
    m: i32,
) -> Result<(f64, f64), ImrError> {
    QnmFitter::default().mass_and_spin(frequency_hz, quality, Mode::new(l, m))
}

/// Remnant mass from ringdown frequency (Hz) and quality in mode `(l, m)`.
pub fn mass_from_frequency_quality(
    frequency_hz: f64,
    quality: f64,
    l: i32,
    m: i32,
) -> Result<f64, ImrError> {
    mass_and_spin_from_frequency_quality(frequency_hz, quality, l, m).map(|(mass, _)| mass)
}
