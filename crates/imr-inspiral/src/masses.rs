//! Masses are in solar masses. Two mass-ratio conventions coexist:
//! [`total_mass_and_ratio`] always reports `q >= 1`, while
//! [`components_from_total_mass_ratio`] reads `q` as `m2 / m1`.

use imr_core::errors::{codes, require_positive, ImrError};

use crate::remnant::ETA_MAX;

pub(crate) fn require_mass(name: &str, value: f64) -> Result<f64, ImrError> {
    require_positive(name, value, codes::NON_POSITIVE_MASS)
}

/// Total mass `M = m1 + m2` and mass ratio `q = max(m1/m2, m2/m1)`.
pub fn total_mass_and_ratio(m1: f64, m2: f64) -> Result<(f64, f64), ImrError> {
    let m1 = require_mass("m1", m1)?;
    let m2 = require_mass("m2", m2)?;
    Ok((m1 + m2, (m1 / m2).max(m2 / m1)))
}

/// Component masses from total mass and `q = m2 / m1`.
pub fn components_from_total_mass_ratio(total: f64, q: f64) -> Result<(f64, f64), ImrError> {
    let total = require_mass("total", total)?;
    let q = require_positive("q", q, codes::NON_POSITIVE_RATIO)?;
    let m1 = total / (q + 1.0);
    Ok((m1, q * m1))
}

/// Symmetric mass ratio `eta = m1 m2 / (m1 + m2)^2`.
///
/// Nearly equal masses can round a few ulps past `ETA_MAX`; the result is
/// capped there.
pub fn symmetric_mass_ratio(m1: f64, m2: f64) -> Result<f64, ImrError> {
    let m1 = require_mass("m1", m1)?;
    let m2 = require_mass("m2", m2)?;
    let total = m1 + m2;
    Ok((m1 * m2 / (total * total)).min(ETA_MAX))
}

/// Symmetric mass ratio from total mass and `q = m2 / m1`.
pub fn symmetric_mass_ratio_from_total_ratio(total: f64, q: f64) -> Result<f64, ImrError> {
    let (m1, m2) = components_from_total_mass_ratio(total, q)?;
    symmetric_mass_ratio(m1, m2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_symmetric_in_components() {
        let (total, q) = total_mass_and_ratio(10.0, 30.0).unwrap();
        assert_eq!(total, 40.0);
        assert_eq!(q, 3.0);
        assert_eq!(total_mass_and_ratio(30.0, 10.0).unwrap(), (total, q));
    }

    #[test]
    fn components_follow_m2_over_m1() {
        let (m1, m2) = components_from_total_mass_ratio(40.0, 3.0).unwrap();
        assert_eq!((m1, m2), (10.0, 30.0));
    }

    #[test]
    fn zero_mass_is_rejected() {
        let err = symmetric_mass_ratio(0.0, 1.0).unwrap_err();
        assert_eq!(err.code(), codes::NON_POSITIVE_MASS);
        assert_eq!(err.info().context.get("m1").map(String::as_str), Some("0"));
    }
}
