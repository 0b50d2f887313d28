//! Schema versioning for serialized ringdown and binary summaries.

use serde::{Deserialize, Serialize};

/// Semantic version stamped on every serialized summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Bumped when a field is removed or changes meaning.
    pub major: u32,
    /// Bumped when fields are added.
    pub minor: u32,
}

impl SchemaVersion {
    /// Version written by this release.
    pub const CURRENT: SchemaVersion = SchemaVersion::new(1, 0);

    /// Creates a schema version descriptor.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// A payload written at `self` can be read by code expecting `reader`
    /// when the majors agree and the payload is not newer.
    pub fn readable_by(&self, reader: SchemaVersion) -> bool {
        self.major == reader.major && self.minor <= reader.minor
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::CURRENT
    }
}

#[cfg(test)]
mod tests {
    use super::SchemaVersion;

    #[test]
    fn older_minor_is_readable() {
        let old = SchemaVersion::new(1, 0);
        assert!(old.readable_by(SchemaVersion::new(1, 3)));
        assert!(!SchemaVersion::new(1, 4).readable_by(SchemaVersion::new(1, 3)));
        assert!(!SchemaVersion::new(2, 0).readable_by(SchemaVersion::CURRENT));
    }
}
