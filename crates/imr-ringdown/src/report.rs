use std::f64::consts::PI;

use imr_core::errors::{codes, require_positive};
use imr_core::hash::round_f64;
use imr_core::serde::to_canonical_json_pretty;
use imr_core::{stable_hash_string, ImrError, Mode, SchemaVersion};
use serde::{Deserialize, Serialize};

use crate::fit::QnmFitter;
use crate::opts::FitOpts;
use crate::physical::{hz_from_dimensionless, require_positive_fit};

/// Every ringdown observable for one remnant and one mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingdownReport {
    /// Schema of this payload.
    pub schema_version: SchemaVersion,
    /// Mode the observables refer to.
    pub mode: Mode,
    /// Remnant mass in solar masses.
    pub mass: f64,
    /// Spin as supplied by the caller.
    pub spin: f64,
    /// Dimensionless frequency `F = M omega`.
    pub dimensionless_frequency: f64,
    /// Quality factor.
    pub quality: f64,
    /// Ringdown frequency in Hz.
    pub frequency_hz: f64,
    /// E-folding time of the amplitude, `Q / (pi f)`, in seconds.
    pub damping_time_s: f64,
    /// Whether `spin` was inside the fit window.
    pub within_fit_window: bool,
    /// Options the observables were evaluated under.
    pub opts: FitOpts,
    /// Stable hash of the payload with this field blank.
    pub report_hash: String,
}

impl RingdownReport {
    fn compute_hash(&self) -> Result<String, ImrError> {
        let mut body = self.clone();
        body.report_hash = String::new();
        for value in [
            &mut body.mass,
            &mut body.spin,
            &mut body.dimensionless_frequency,
            &mut body.quality,
            &mut body.frequency_hz,
            &mut body.damping_time_s,
        ] {
            *value = round_f64(*value);
        }
        stable_hash_string(&body)
    }

    /// Recomputes the hash and compares it with the stored one.
    pub fn verify_hash(&self) -> Result<bool, ImrError> {
        Ok(self.compute_hash()? == self.report_hash)
    }

    /// Pretty canonical JSON rendering.
    pub fn to_json(&self) -> Result<String, ImrError> {
        to_canonical_json_pretty(self)
    }
}

/// Evaluates every observable for a remnant of `mass` solar masses and spin
/// `spin` in `mode`.
pub fn ringdown_report(
    mass: f64,
    spin: f64,
    mode: Mode,
    fitter: &QnmFitter,
) -> Result<RingdownReport, ImrError> {
    let mass = require_positive("mass", mass, codes::NON_POSITIVE_MASS)?;
    let (dimensionless_frequency, quality) = fitter.frequency_and_quality(spin, mode)?;
    let dimensionless_frequency = require_positive_fit(dimensionless_frequency, spin, mode)?;
    let frequency_hz = hz_from_dimensionless(dimensionless_frequency, mass);
    let opts = *fitter.opts();
    let mut report = RingdownReport {
        schema_version: SchemaVersion::CURRENT,
        mode,
        mass,
        spin,
        dimensionless_frequency,
        quality,
        frequency_hz,
        damping_time_s: quality / (PI * frequency_hz),
        within_fit_window: opts.validity.contains(spin),
        opts,
        report_hash: String::new(),
    };
    report.report_hash = report.compute_hash()?;
    Ok(report)
}
