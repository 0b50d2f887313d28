//! Berti et al. (2008) QNM fit coefficients.
//!
//! Every populated mode carries two triples `(c0, c1, c2)` for the power law
//! `c0 + c1 * (1 - a)^c2`: one for the dimensionless frequency `F = M omega`
//! and one for the quality factor `Q`. The fits are accurate to better than
//! 5% for `a` in `[0, 0.99]`.
//!
//! The grid is rectangular in `(l, m)` but physically sparse: cells with
//! `|m| > l` hold no mode and stay `None`.

use imr_core::errors::{codes, ErrorInfo, ImrError};
use imr_core::{stable_hash_string, Mode};
use serde::{Deserialize, Serialize};

/// Smallest tabulated `l`.
pub const L_MIN: i32 = 2;
/// Largest tabulated `l`.
pub const L_MAX: i32 = 4;

const ROWS: usize = (L_MAX - L_MIN + 1) as usize;
const COLS: usize = (2 * L_MAX + 1) as usize;

/// One power-law triple `value(a) = c0 + c1 * (1 - a)^c2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitCoefficients {
    /// Asymptotic offset.
    pub c0: f64,
    /// Amplitude of the spin-dependent term.
    pub c1: f64,
    /// Power applied to `1 - a`.
    pub c2: f64,
}

impl FitCoefficients {
    /// Creates a triple from its three coefficients.
    pub const fn new(c0: f64, c1: f64, c2: f64) -> Self {
        Self { c0, c1, c2 }
    }
}

/// Frequency and quality fits for a single mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeCoefficients {
    /// Fit of the dimensionless frequency `F(a)`.
    pub frequency: FitCoefficients,
    /// Fit of the quality factor `Q(a)`.
    pub quality: FitCoefficients,
}

const fn fit(f: [f64; 3], q: [f64; 3]) -> Option<ModeCoefficients> {
    Some(ModeCoefficients {
        frequency: FitCoefficients::new(f[0], f[1], f[2]),
        quality: FitCoefficients::new(q[0], q[1], q[2]),
    })
}

/// Sparse `(l, m)` keyed coefficient table.
///
/// Row `l - L_MIN`, column `L_MAX - m`; so columns run from `m = +4` down to
/// `m = -4`.
#[derive(Debug)]
pub struct CoefficientTable {
    rows: [[Option<ModeCoefficients>; COLS]; ROWS],
}

static BERTI_2008: CoefficientTable = CoefficientTable {
    rows: [
        [
            None,
            None,
            fit([1.5251, -1.1568, 0.1292], [0.7000, 1.4187, -0.4990]),
            fit([0.6000, -0.2339, 0.4175], [-0.3000, 2.3561, -0.2277]),
            fit([0.4437, -0.0739, 0.3350], [4.0000, -1.9550, 0.1420]),
            fit([0.3441, 0.0293, 2.0010], [2.0000, 0.1078, 5.0069]),
            fit([0.2938, 0.0782, 1.3546], [1.6700, 0.4192, 1.4700]),
            None,
            None,
        ],
        [
            None,
            fit([1.8956, -1.3043, 0.1818], [0.9000, 2.3430, -0.4810]),
            fit([1.1481, -0.5552, 0.3002], [0.8313, 2.3773, -0.3655]),
            fit([0.8345, -0.2405, 0.4095], [23.8450, -20.7240, 0.03837]),
            fit([0.6873, -0.09282, 0.3479], [6.7841, -3.6112, 0.09480]),
            fit([0.5751, 0.02508, 3.1360], [3.0464, 0.1162, -0.2812]),
            fit([0.5158, 0.08195, 1.4084], [2.9000, 0.3356, 2.3050]),
            fit([0.4673, 0.1296, 1.3255], [2.5500, 0.6576, 1.3378]),
            None,
        ],
        [
            fit([2.3000, -1.5056, 0.2244], [1.1929, 3.1191, -0.4825]),
            fit([1.6869, -0.8862, 0.2822], [1.4812, 2.8096, -0.4271]),
            fit([1.2702, -0.4685, 0.3835], [-3.6000, 7.7749, -0.1491]),
            fit([1.0507, -0.2478, 0.4348], [14.0000, -9.8240, 0.09047]),
            fit([0.9175, -0.1144, 0.3511], [7.0000, -2.7934, 0.1708]),
            fit([0.7908, 0.02024, 5.4628], [4.6000, -0.4038, 0.4629]),
            fit([0.7294, 0.07842, 1.5646], [4.0000, 0.2777, 2.0647]),
            fit([0.6728, 0.1338, 1.3413], [3.7000, 0.5829, 1.6681]),
            fit([0.6256, 0.1800, 1.3218], [3.4000, 0.8696, 1.4074]),
        ],
    ],
};

fn mode_error(code: &str, message: impl Into<String>, l: i32, m: i32) -> ImrError {
    ImrError::InvalidMode(
        ErrorInfo::new(code, message.into())
            .with_context("l", l)
            .with_context("m", m)
            .with_hint("supported modes are l = 2, 3, 4 with -l <= m <= l"),
    )
}

impl CoefficientTable {
    /// The published table, shared for the life of the process.
    pub fn berti_2008() -> &'static CoefficientTable {
        &BERTI_2008
    }

    /// Returns the coefficients for `(l, m)` or `None` when no mode exists.
    pub fn get(&self, l: i32, m: i32) -> Option<&ModeCoefficients> {
        let row = usize::try_from(l.checked_sub(L_MIN)?).ok()?;
        let col = usize::try_from(L_MAX.checked_sub(m)?).ok()?;
        self.rows.get(row)?.get(col)?.as_ref()
    }

    /// Reports whether fit data exists for `(l, m)`.
    pub fn contains(&self, l: i32, m: i32) -> bool {
        self.get(l, m).is_some()
    }

    /// Returns the coefficients for `(l, m)`, distinguishing an unsupported
    /// `l` from an `m` that is inconsistent with a supported `l`.
    pub fn lookup(&self, l: i32, m: i32) -> Result<&ModeCoefficients, ImrError> {
        if !(L_MIN..=L_MAX).contains(&l) {
            return Err(mode_error(
                codes::MODE_L_OUT_OF_RANGE,
                format!("l={l} is outside the tabulated range {L_MIN}..={L_MAX}"),
                l,
                m,
            ));
        }
        self.get(l, m).ok_or_else(|| {
            mode_error(
                codes::MODE_M_INCONSISTENT,
                format!("m={m} is inconsistent with l={l}: |m| must not exceed l"),
                l,
                m,
            )
        })
    }

    /// Iterates the populated modes, `l` ascending and `m` descending.
    pub fn modes(&self) -> impl Iterator<Item = (Mode, &ModeCoefficients)> + '_ {
        self.rows.iter().zip(L_MIN..).flat_map(|(row, l)| {
            row.iter()
                .zip((-L_MAX..=L_MAX).rev())
                .filter_map(move |(cell, m)| cell.as_ref().map(|coeffs| (Mode::new(l, m), coeffs)))
        })
    }

    /// Stable SHA-256 of every populated entry, for regression checks on the
    /// constant data.
    pub fn fingerprint(&self) -> Result<String, ImrError> {
        let entries: Vec<(Mode, ModeCoefficients)> =
            self.modes().map(|(mode, coeffs)| (mode, *coeffs)).collect();
        stable_hash_string(&entries)
    }
}

/// Looks up both fits for `(l, m)` in the published table.
pub fn lookup(l: i32, m: i32) -> Result<&'static ModeCoefficients, ImrError> {
    CoefficientTable::berti_2008().lookup(l, m)
}

/// Frequency-fit triple for `(l, m)`.
pub fn frequency_coefficients(l: i32, m: i32) -> Result<FitCoefficients, ImrError> {
    lookup(l, m).map(|coeffs| coeffs.frequency)
}

/// Quality-fit triple for `(l, m)`.
pub fn quality_coefficients(l: i32, m: i32) -> Result<FitCoefficients, ImrError> {
    lookup(l, m).map(|coeffs| coeffs.quality)
}

/// Fingerprint of the published table.
pub fn table_fingerprint() -> Result<String, ImrError> {
    CoefficientTable::berti_2008().fingerprint()
}
