//! Structured error types shared across the IMR crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable machine readable codes carried by [`ErrorInfo::code`].
pub mod codes {
    /// `l` lies outside the tabulated range.
    pub const MODE_L_OUT_OF_RANGE: &str = "mode-l-out-of-range";
    /// `|m| > l` for an otherwise supported `l`.
    pub const MODE_M_INCONSISTENT: &str = "mode-m-inconsistent";
    /// Real power of a negative base with a non-integer exponent.
    pub const NEGATIVE_BASE_FRACTIONAL_POWER: &str = "negative-base-fractional-power";
    /// An evaluation produced (or was fed) a NaN or an infinity.
    pub const NON_FINITE_RESULT: &str = "non-finite-result";
    /// Extrapolated frequency fit that is zero or negative.
    pub const NON_POSITIVE_FIT_FREQUENCY: &str = "non-positive-fit-frequency";
    /// Spin outside the fit window under a rejecting policy.
    pub const SPIN_OUTSIDE_FIT_WINDOW: &str = "spin-outside-fit-window";
    /// Mass that is zero or negative.
    pub const NON_POSITIVE_MASS: &str = "non-positive-mass";
    /// Frequency that is zero or negative.
    pub const NON_POSITIVE_FREQUENCY: &str = "non-positive-frequency";
    /// Mass ratio that is zero or negative.
    pub const NON_POSITIVE_RATIO: &str = "non-positive-ratio";
    /// Scalar input that is NaN or infinite.
    pub const NON_FINITE_INPUT: &str = "non-finite-input";
    /// Symmetric mass ratio outside `(0, 0.25]`.
    pub const ETA_OUT_OF_RANGE: &str = "eta-out-of-range";
    /// Paired slices of different lengths.
    pub const LENGTH_MISMATCH: &str = "length-mismatch";
}

/// Structured payload attached to every [`ImrError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (mode indices, offending values, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the IMR utilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum ImrError {
    /// No fit data exists for the requested `(l, m)`.
    #[error("invalid mode: {0}")]
    InvalidMode(ErrorInfo),
    /// Real-valued evaluation is undefined for the supplied inputs.
    #[error("numeric domain error: {0}")]
    NumericDomain(ErrorInfo),
    /// Non-physical scalar input.
    #[error("invalid parameter: {0}")]
    InvalidParameter(ErrorInfo),
    /// Serialization and hashing errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl ImrError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            ImrError::InvalidMode(info)
            | ImrError::NumericDomain(info)
            | ImrError::InvalidParameter(info)
            | ImrError::Serde(info) => info,
        }
    }

    /// Returns the stable code of the underlying payload.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Adds a context entry to whichever payload the error carries.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        match self {
            ImrError::InvalidMode(info) => ImrError::InvalidMode(info.with_context(key, value)),
            ImrError::NumericDomain(info) => {
                ImrError::NumericDomain(info.with_context(key, value))
            }
            ImrError::InvalidParameter(info) => {
                ImrError::InvalidParameter(info.with_context(key, value))
            }
            ImrError::Serde(info) => ImrError::Serde(info.with_context(key, value)),
        }
    }
}

/// Fails with [`codes::NON_FINITE_INPUT`] unless `value` is finite.
pub fn require_finite(name: &str, value: f64) -> Result<f64, ImrError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ImrError::InvalidParameter(
            ErrorInfo::new(codes::NON_FINITE_INPUT, format!("{name} must be finite"))
                .with_context(name, value),
        ))
    }
}

/// Fails unless `value` is finite and strictly positive.
///
/// `code` selects the payload code used for the non-positive case.
pub fn require_positive(name: &str, value: f64, code: &str) -> Result<f64, ImrError> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ImrError::InvalidParameter(
            ErrorInfo::new(code, format!("{name} must be strictly positive"))
                .with_context(name, value),
        ))
    }
}
