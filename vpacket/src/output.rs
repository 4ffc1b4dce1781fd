//! Typed virtual outputs.

use serde::{Deserialize, Serialize};
use weft_types::{AssetVersion, OutputRole, ScriptKey};

use crate::error::VPacketError;

/// One asset output inside a virtual packet.
///
/// Construct through [`VOutput::build`] or [`VOutput::tombstone`]; both
/// enforce the role invariants, so a `Tombstone`-role value with a non-zero
/// amount or a spendable key cannot exist.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VOutput {
    /// Asset units carried by this output.
    pub amount: u64,
    /// The asset rules version this output follows.
    pub asset_version: AssetVersion,
    /// The key controlling spend authority. `ScriptKey::NUMS` marks the
    /// output permanently unspendable.
    pub script_key: ScriptKey,
    /// The structural role this output plays in the packet.
    pub role: OutputRole,
    /// Whether the receiver takes part in constructing the transfer directly
    /// (no proof courier round-trip needed).
    pub interactive: bool,
    /// Index of the on-chain anchor output this asset output commits into.
    /// Multiple outputs may share an anchor.
    pub anchor_output_index: u32,
}

impl VOutput {
    /// Build an output, checking role invariants.
    pub fn build(
        amount: u64,
        script_key: ScriptKey,
        role: OutputRole,
        asset_version: AssetVersion,
        anchor_output_index: u32,
        interactive: bool,
    ) -> Result<Self, VPacketError> {
        if role == OutputRole::Tombstone {
            if amount != 0 {
                return Err(VPacketError::InvalidOutputSpec {
                    reason: format!("tombstone output must carry zero amount, got {}", amount),
                });
            }
            if !script_key.is_unspendable() {
                return Err(VPacketError::InvalidOutputSpec {
                    reason: "tombstone output must use the NUMS key".into(),
                });
            }
        }

        Ok(Self {
            amount,
            asset_version,
            script_key,
            role,
            interactive,
            anchor_output_index,
        })
    }

    /// The canonical tombstone: zero value bound to the NUMS key, filling the
    /// split-root slot of a full burn. `anchor_output_index` is a placement
    /// policy decided by the caller; co-location with the destruction output
    /// (index 0) is the common case.
    pub fn tombstone(asset_version: AssetVersion, anchor_output_index: u32) -> Self {
        Self {
            amount: 0,
            asset_version,
            script_key: ScriptKey::NUMS,
            role: OutputRole::Tombstone,
            interactive: true,
            anchor_output_index,
        }
    }

    /// Whether anyone can ever spend this output.
    pub fn is_spendable(&self) -> bool {
        !self.script_key.is_unspendable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_rejects_nonzero_tombstone() {
        let err = VOutput::build(
            1,
            ScriptKey::NUMS,
            OutputRole::Tombstone,
            AssetVersion::V0,
            0,
            true,
        )
        .unwrap_err();
        assert!(matches!(err, VPacketError::InvalidOutputSpec { .. }));
    }

    #[test]
    fn build_rejects_spendable_tombstone_key() {
        let err = VOutput::build(
            0,
            ScriptKey::new([0x02; 33]),
            OutputRole::Tombstone,
            AssetVersion::V0,
            0,
            true,
        )
        .unwrap_err();
        assert!(matches!(err, VPacketError::InvalidOutputSpec { .. }));
    }

    #[test]
    fn canonical_tombstone_shape() {
        let tombstone = VOutput::tombstone(AssetVersion::V0, 0);
        assert_eq!(tombstone.amount, 0);
        assert_eq!(tombstone.script_key, ScriptKey::NUMS);
        assert_eq!(tombstone.role, OutputRole::Tombstone);
        assert!(tombstone.interactive);
        assert_eq!(tombstone.anchor_output_index, 0);
        assert!(!tombstone.is_spendable());
    }

    #[test]
    fn build_allows_zero_amount_recipient() {
        let out = VOutput::build(
            0,
            ScriptKey::new([0x03; 33]),
            OutputRole::Recipient,
            AssetVersion::V0,
            1,
            false,
        )
        .unwrap();
        assert!(out.is_spendable());
    }
}
