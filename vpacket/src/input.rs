//! Virtual packet inputs.

use serde::{Deserialize, Serialize};
use weft_types::{AssetId, AssetVersion, ScriptKey};

/// A snapshot of one selected spendable asset output being consumed.
///
/// Inputs are chosen by an external coin-selection component; this core
/// trusts that they are currently unspent and correctly attributed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VInput {
    /// The asset line this value belongs to.
    pub asset_id: AssetId,
    /// The full prior amount held by the consumed output.
    pub amount: u64,
    /// The asset rules version the consumed output follows.
    pub asset_version: AssetVersion,
    /// The key currently controlling the consumed output.
    pub script_key: ScriptKey,
}

impl VInput {
    pub fn new(
        asset_id: AssetId,
        amount: u64,
        asset_version: AssetVersion,
        script_key: ScriptKey,
    ) -> Self {
        Self {
            asset_id,
            amount,
            asset_version,
            script_key,
        }
    }
}
