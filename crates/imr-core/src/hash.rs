//! Stable content hashes over canonical JSON.

use ::serde::Serialize;
use sha2::{Digest, Sha256};

use crate::errors::ImrError;
use crate::serde::to_canonical_json_bytes;

/// Computes a stable hexadecimal SHA-256 for the provided serialisable payload.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, ImrError> {
    let bytes = to_canonical_json_bytes(value)?;
    let digest = Sha256::digest(bytes);
    Ok(format!("{:x}", digest))
}

/// Rounds to nine decimals so hashes ignore last-bit float noise.
pub fn round_f64(value: f64) -> f64 {
    let scaled = (value * 1e9).round();
    scaled / 1e9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_order_independent_for_maps() {
        let a = serde_json::json!({"x": 1.0, "y": 2.0});
        let b = serde_json::json!({"y": 2.0, "x": 1.0});
        assert_eq!(stable_hash_string(&a).unwrap(), stable_hash_string(&b).unwrap());
        assert_eq!(stable_hash_string(&a).unwrap().len(), 64);
    }
}
