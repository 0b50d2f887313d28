#![deny(missing_docs)]
#![doc = "Shared error taxonomy, physical constants and mode indices for the inspiral-merger-ringdown utilities."]

use ::serde::{Deserialize, Serialize};

pub mod constants;
pub mod errors;
pub mod hash;
pub mod schema;
pub mod serde;

pub use constants::{C_LIGHT, GM_SUN, T_SUN};
pub use errors::{ErrorInfo, ImrError};
pub use hash::stable_hash_string;
pub use schema::SchemaVersion;

/// Spherical-harmonic mode selector `(l, m)`.
///
/// Construction never validates: whether a mode carries fit data is decided by
/// the table that consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Mode {
    /// Angular-momentum index.
    pub l: i32,
    /// Azimuthal index.
    pub m: i32,
}

impl Mode {
    /// Creates a mode selector from its two indices.
    pub const fn new(l: i32, m: i32) -> Self {
        Self { l, m }
    }

    /// The dominant quadrupole mode `(2, 2)`.
    pub const fn fundamental() -> Self {
        Self::new(2, 2)
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::fundamental()
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(l={}, m={})", self.l, self.m)
    }
}
