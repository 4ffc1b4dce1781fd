//! Asset identification types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte asset identifier derived from the asset's genesis.
///
/// Groups all inputs and outputs belonging to the same asset line. Immutable
/// for the lifetime of the asset.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId([u8; 32]);

impl AssetId {
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetId({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

/// The version of the asset serialization/validation rules an output follows.
///
/// Inputs funding one packet must agree on a version; mixing versions is a
/// funding error, not a silent upgrade.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetVersion {
    /// The original asset format.
    #[default]
    V0,
    /// Segregated witness asset format.
    V1,
}

// Inline hex encoding to avoid adding the `hex` crate as a dependency of types.
mod hex {
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_id_display_is_full_hex() {
        let id = AssetId::new([0xab; 32]);
        assert_eq!(id.to_string(), "ab".repeat(32));
    }

    #[test]
    fn asset_id_zero() {
        assert!(AssetId::ZERO.is_zero());
        assert!(!AssetId::new([1; 32]).is_zero());
    }

    #[test]
    fn asset_version_defaults_to_v0() {
        assert_eq!(AssetVersion::default(), AssetVersion::V0);
    }
}
