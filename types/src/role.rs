//! Output roles within a virtual packet.

use serde::{Deserialize, Serialize};

/// The structural role an output plays inside a virtual packet.
///
/// Roles are mutually exclusive. A packet may carry at most one output whose
/// role counts as a split root (`SplitRoot` or `Tombstone`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputRole {
    /// Ordinary transfer output to a new owner. Burn destruction outputs also
    /// use this role; their NUMS script key is what marks them unspendable.
    Recipient,
    /// Value returned to the sender.
    Change,
    /// The single output carrying the root of a value-split commitment.
    SplitRoot,
    /// A zero-amount, unspendable split root. Present only when a full burn
    /// leaves no real remainder to carry the split-root duty.
    Tombstone,
}

impl OutputRole {
    /// Whether this role occupies the packet's single split-root slot.
    pub fn counts_as_split_root(&self) -> bool {
        matches!(self, Self::SplitRoot | Self::Tombstone)
    }

    /// Whether outputs with this role return value to the sender.
    pub fn is_change(&self) -> bool {
        matches!(self, Self::Change)
    }
}
