//! Forward fits `F(a)`, `Q(a)` and the algebraic inversion `a(Q)`.

use imr_core::errors::{codes, require_finite, ErrorInfo, ImrError};
use imr_core::Mode;

use crate::opts::{ExtrapolationPolicy, FitOpts};
use crate::table::{CoefficientTable, FitCoefficients, ModeCoefficients};

fn domain_error(code: &str, message: impl Into<String>) -> ImrError {
    ImrError::NumericDomain(ErrorInfo::new(code, message.into()))
}

/// `base^exponent` over the reals, failing instead of producing NaN or an
/// infinity.
pub(crate) fn real_power(base: f64, exponent: f64) -> Result<f64, ImrError> {
    if !base.is_finite() || !exponent.is_finite() {
        return Err(domain_error(codes::NON_FINITE_RESULT, "power of a non-finite operand")
            .with_context("base", base)
            .with_context("exponent", exponent));
    }
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(domain_error(
            codes::NEGATIVE_BASE_FRACTIONAL_POWER,
            "negative base raised to a non-integer power has no real value",
        )
        .with_context("base", base)
        .with_context("exponent", exponent));
    }
    let value = base.powf(exponent);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(domain_error(codes::NON_FINITE_RESULT, "power diverges")
            .with_context("base", base)
            .with_context("exponent", exponent))
    }
}

impl FitCoefficients {
    /// Evaluates `c0 + c1 * (1 - a)^c2`.
    pub fn evaluate(&self, spin: f64) -> Result<f64, ImrError> {
        let value = self.c0 + self.c1 * real_power(1.0 - spin, self.c2)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(domain_error(codes::NON_FINITE_RESULT, "fit evaluated to a non-finite value")
                .with_context("spin", spin))
        }
    }

    /// Solves `value = c0 + c1 * (1 - a)^c2` for `a`.
    pub fn invert(&self, value: f64) -> Result<f64, ImrError> {
        let scaled = (value - self.c0) / self.c1;
        let spin = 1.0 - real_power(scaled, 1.0 / self.c2)?;
        if spin.is_finite() {
            Ok(spin)
        } else {
            Err(domain_error(codes::NON_FINITE_RESULT, "inversion produced a non-finite spin")
                .with_context("value", value))
        }
    }
}

/// Evaluates and inverts the QNM fits under a fixed set of [`FitOpts`].
#[derive(Debug, Clone, Copy, Default)]
pub struct QnmFitter {
    opts: FitOpts,
}

impl QnmFitter {
    /// Creates a fitter over the published table.
    pub fn new(opts: FitOpts) -> Self {
        Self {
            opts: opts.sanitised(),
        }
    }

    /// Options in effect.
    pub fn opts(&self) -> &FitOpts {
        &self.opts
    }

    fn coefficients(&self, mode: Mode) -> Result<&'static ModeCoefficients, ImrError> {
        CoefficientTable::berti_2008().lookup(mode.l, mode.m)
    }

    /// Applies the extrapolation policy to a spin that is about to be fed
    /// into a forward fit, or that was just recovered by inversion.
    pub fn admit_spin(&self, spin: f64, mode: Mode) -> Result<f64, ImrError> {
        require_finite("spin", spin)?;
        let window = self.opts.validity;
        match self.opts.extrapolation {
            ExtrapolationPolicy::Extrapolate => Ok(spin),
            ExtrapolationPolicy::Clamp => Ok(window.clamp(spin)),
            ExtrapolationPolicy::Reject if window.contains(spin) => Ok(spin),
            ExtrapolationPolicy::Reject => Err(domain_error(
                codes::SPIN_OUTSIDE_FIT_WINDOW,
                format!(
                    "spin {spin} is outside the fit window [{}, {}]",
                    window.min, window.max
                ),
            )
            .with_context("l", mode.l)
            .with_context("m", mode.m)
            .with_context("spin", spin)),
        }
    }

    /// Dimensionless frequency and quality `(F, Q)` for spin `a`.
    pub fn frequency_and_quality(&self, spin: f64, mode: Mode) -> Result<(f64, f64), ImrError> {
        let coeffs = self.coefficients(mode)?;
        let spin = self.admit_spin(spin, mode)?;
        let frequency = coeffs.frequency.evaluate(spin).map_err(|err| tag(err, mode))?;
        let quality = coeffs.quality.evaluate(spin).map_err(|err| tag(err, mode))?;
        Ok((frequency, quality))
    }

    /// Dimensionless frequency `F = M omega` for spin `a`.
    pub fn frequency(&self, spin: f64, mode: Mode) -> Result<f64, ImrError> {
        let coeffs = self.coefficients(mode)?;
        let spin = self.admit_spin(spin, mode)?;
        coeffs.frequency.evaluate(spin).map_err(|err| tag(err, mode))
    }

    /// Quality factor `Q` for spin `a`.
    pub fn quality(&self, spin: f64, mode: Mode) -> Result<f64, ImrError> {
        let coeffs = self.coefficients(mode)?;
        let spin = self.admit_spin(spin, mode)?;
        coeffs.quality.evaluate(spin).map_err(|err| tag(err, mode))
    }

    /// Spin recovered from a quality factor by inverting the quality fit.
    pub fn spin_from_quality(&self, quality: f64, mode: Mode) -> Result<f64, ImrError> {
        let coeffs = self.coefficients(mode)?;
        require_finite("quality", quality)?;
        let spin = coeffs
            .quality
            .invert(quality)
            .map_err(|err| tag(err, mode).with_context("quality", quality))?;
        self.admit_spin(spin, mode)
    }
}

fn tag(err: ImrError, mode: Mode) -> ImrError {
    err.with_context("l", mode.l).with_context("m", mode.m)
}

/// Dimensionless frequency and quality `(F, Q)` for spin `a` in mode `(l, m)`.
pub fn frequency_and_quality_from_spin(spin: f64, l: i32, m: i32) -> Result<(f64, f64), ImrError> {
    QnmFitter::default().frequency_and_quality(spin, Mode::new(l, m))
}

/// Dimensionless frequency `F` for spin `a` in mode `(l, m)`.
pub fn frequency_from_spin(spin: f64, l: i32, m: i32) -> Result<f64, ImrError> {
    QnmFitter::default().frequency(spin, Mode::new(l, m))
}

/// Quality factor `Q` for spin `a` in mode `(l, m)`.
pub fn quality_from_spin(spin: f64, l: i32, m: i32) -> Result<f64, ImrError> {
    QnmFitter::default().quality(spin, Mode::new(l, m))
}

/// Spin `a = 1 - ((Q - q0) / q1)^(1 / q2)` for quality `Q` in mode `(l, m)`.
pub fn spin_from_quality(quality: f64, l: i32, m: i32) -> Result<f64, ImrError> {
    QnmFitter::default().spin_from_quality(quality, Mode::new(l, m))
}
