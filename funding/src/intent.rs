//! Funding intents: what the caller wants done with the selected value.

use serde::{Deserialize, Serialize};
use weft_types::{AssetId, ScriptKey};

/// One recipient's share of a transfer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Allocation {
    /// The key the recipient will control the output with.
    pub script_key: ScriptKey,
    /// Asset units for this recipient. Must be non-zero.
    pub amount: u64,
    /// The on-chain anchor output this recipient's value commits into.
    pub anchor_output_index: u32,
}

/// A request to move value to one or more recipients.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransferIntent {
    pub asset_id: AssetId,
    /// Per-recipient allocations; their amounts sum to the send amount.
    pub recipients: Vec<Allocation>,
    /// Whether the recipients cooperate in constructing the transfer.
    pub interactive: bool,
}

impl TransferIntent {
    /// Checked sum of all recipient allocations.
    pub fn total_amount(&self) -> Option<u64> {
        self.recipients
            .iter()
            .try_fold(0u64, |acc, a| acc.checked_add(a.amount))
    }
}

/// A request to irrevocably destroy value.
///
/// Created by the caller, validated once by the authorization gate, consumed
/// by the funding engine to shape one packet, then discarded.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BurnIntent {
    pub asset_id: AssetId,
    /// Asset units to destroy.
    pub amount: u64,
    /// Operator-supplied confirmation; must equal
    /// [`BURN_CONFIRMATION_TEXT`](crate::gate::BURN_CONFIRMATION_TEXT).
    pub confirmation: String,
    /// Where the tombstone of a full burn anchors. Placement is policy;
    /// index 0 co-locates it with the destruction output.
    pub tombstone_anchor_index: u32,
}

impl BurnIntent {
    pub fn new(asset_id: AssetId, amount: u64, confirmation: impl Into<String>) -> Self {
        Self {
            asset_id,
            amount,
            confirmation: confirmation.into(),
            tombstone_anchor_index: 0,
        }
    }
}

/// The unified intent enum the funding engine dispatches on.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum FundingIntent {
    Transfer(TransferIntent),
    Burn(BurnIntent),
}

impl FundingIntent {
    /// The asset line this intent operates on.
    pub fn asset_id(&self) -> &AssetId {
        match self {
            Self::Transfer(t) => &t.asset_id,
            Self::Burn(b) => &b.asset_id,
        }
    }

    pub fn is_burn(&self) -> bool {
        matches!(self, Self::Burn(_))
    }
}
