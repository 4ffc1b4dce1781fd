//! The virtual packet: ordered inputs and outputs for one transfer.

use serde::{Deserialize, Serialize};
use weft_types::{AssetId, AssetVersion, ScriptKey};

use crate::error::VPacketError;
use crate::input::VInput;
use crate::output::VOutput;

/// One value-conserving transfer, pre-signing.
///
/// The packet owns its outputs for the duration of funding and signing;
/// ownership moves to the anchoring collaborator once finalized. All output
/// mutation goes through [`append_output`](VPacket::append_output) /
/// [`replace_output`](VPacket::replace_output) so the split-root cardinality
/// invariant can never be bypassed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VPacket {
    /// The asset line this packet moves value within.
    pub asset_id: AssetId,
    inputs: Vec<VInput>,
    outputs: Vec<VOutput>,
}

impl VPacket {
    /// An empty packet for the given asset line.
    pub fn new(asset_id: AssetId) -> Self {
        Self {
            asset_id,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// A packet with a single interactive recipient output, the starting
    /// point for hand-built interactive sends. Inputs and further outputs
    /// (fan-outs, change) are appended afterwards.
    pub fn for_interactive_send(
        asset_id: AssetId,
        amount: u64,
        script_key: ScriptKey,
        anchor_output_index: u32,
        asset_version: AssetVersion,
    ) -> Self {
        let mut packet = Self::new(asset_id);
        packet.outputs.push(VOutput {
            amount,
            asset_version,
            script_key,
            role: weft_types::OutputRole::Recipient,
            interactive: true,
            anchor_output_index,
        });
        packet
    }

    pub fn inputs(&self) -> &[VInput] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[VOutput] {
        &self.outputs
    }

    /// Append a consumed input. Inputs carry their full prior amount; the
    /// conservation check compares against that total.
    pub fn append_input(&mut self, input: VInput) {
        self.inputs.push(input);
    }

    /// Append an output to the ordered sequence.
    ///
    /// Fails with `TooManySplitRoots` if the packet already holds an output
    /// whose role counts as a split root.
    pub fn append_output(&mut self, output: VOutput) -> Result<(), VPacketError> {
        if output.role.counts_as_split_root() && self.split_root_index().is_some() {
            return Err(VPacketError::TooManySplitRoots);
        }
        self.outputs.push(output);
        Ok(())
    }

    /// Replace the output at `index`, re-checking split-root cardinality
    /// against every other output.
    pub fn replace_output(&mut self, index: usize, output: VOutput) -> Result<(), VPacketError> {
        if index >= self.outputs.len() {
            return Err(VPacketError::OutputIndexOutOfRange {
                index,
                len: self.outputs.len(),
            });
        }
        let other_split_root = self
            .outputs
            .iter()
            .enumerate()
            .any(|(i, o)| i != index && o.role.counts_as_split_root());
        if output.role.counts_as_split_root() && other_split_root {
            return Err(VPacketError::TooManySplitRoots);
        }
        self.outputs[index] = output;
        Ok(())
    }

    /// Index of the output filling the split-root slot, if any.
    pub fn split_root_index(&self) -> Option<usize> {
        self.outputs
            .iter()
            .position(|o| o.role.counts_as_split_root())
    }

    /// Checked sum of all input amounts.
    pub fn total_input_amount(&self) -> Result<u64, VPacketError> {
        self.inputs
            .iter()
            .try_fold(0u64, |acc, i| acc.checked_add(i.amount))
            .ok_or(VPacketError::AmountOverflow)
    }

    /// Checked sum of all output amounts, zero-value outputs included.
    pub fn total_output_amount(&self) -> Result<u64, VPacketError> {
        self.outputs
            .iter()
            .try_fold(0u64, |acc, o| acc.checked_add(o.amount))
            .ok_or(VPacketError::AmountOverflow)
    }

    /// The conservation law: output amounts must sum to input amounts.
    /// Holds for burns too — destroyed value stays in the sum under the
    /// NUMS-keyed destruction output.
    pub fn validate_conservation(&self) -> Result<(), VPacketError> {
        let input_total = self.total_input_amount()?;
        let output_total = self.total_output_amount()?;
        if input_total != output_total {
            return Err(VPacketError::ValueMismatch {
                input_total,
                output_total,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_types::OutputRole;

    fn test_asset_id(n: u8) -> AssetId {
        AssetId::new([n; 32])
    }

    fn test_key(n: u8) -> ScriptKey {
        ScriptKey::new([n; 33])
    }

    fn test_output(amount: u64, role: OutputRole) -> VOutput {
        VOutput::build(
            amount,
            test_key(0x02),
            role,
            AssetVersion::V0,
            0,
            false,
        )
        .unwrap()
    }

    #[test]
    fn append_second_split_root_fails() {
        let mut packet = VPacket::new(test_asset_id(1));
        packet
            .append_output(test_output(100, OutputRole::SplitRoot))
            .unwrap();
        let err = packet
            .append_output(test_output(50, OutputRole::SplitRoot))
            .unwrap_err();
        assert!(matches!(err, VPacketError::TooManySplitRoots));
    }

    #[test]
    fn tombstone_occupies_the_split_root_slot() {
        let mut packet = VPacket::new(test_asset_id(1));
        packet
            .append_output(VOutput::tombstone(AssetVersion::V0, 0))
            .unwrap();
        let err = packet
            .append_output(test_output(50, OutputRole::SplitRoot))
            .unwrap_err();
        assert!(matches!(err, VPacketError::TooManySplitRoots));
        assert_eq!(packet.split_root_index(), Some(0));
    }

    #[test]
    fn conservation_holds_for_balanced_packet() {
        let mut packet = VPacket::new(test_asset_id(1));
        packet.append_input(VInput::new(
            test_asset_id(1),
            1200,
            AssetVersion::V0,
            test_key(0x03),
        ));
        packet
            .append_output(test_output(500, OutputRole::Recipient))
            .unwrap();
        packet
            .append_output(test_output(700, OutputRole::Change))
            .unwrap();
        packet.validate_conservation().unwrap();
    }

    #[test]
    fn conservation_failure_reports_totals() {
        let mut packet = VPacket::new(test_asset_id(1));
        packet.append_input(VInput::new(
            test_asset_id(1),
            1000,
            AssetVersion::V0,
            test_key(0x03),
        ));
        packet
            .append_output(test_output(999, OutputRole::Recipient))
            .unwrap();
        let err = packet.validate_conservation().unwrap_err();
        assert!(matches!(
            err,
            VPacketError::ValueMismatch {
                input_total: 1000,
                output_total: 999,
            }
        ));
    }

    #[test]
    fn total_output_amount_counts_zero_value_outputs() {
        let mut packet = VPacket::new(test_asset_id(1));
        packet
            .append_output(test_output(1200, OutputRole::Recipient))
            .unwrap();
        packet
            .append_output(VOutput::tombstone(AssetVersion::V0, 0))
            .unwrap();
        assert_eq!(packet.total_output_amount().unwrap(), 1200);
        assert_eq!(packet.outputs().len(), 2);
    }

    #[test]
    fn overflow_is_an_error_not_a_wrap() {
        let mut packet = VPacket::new(test_asset_id(1));
        packet.append_input(VInput::new(
            test_asset_id(1),
            u64::MAX,
            AssetVersion::V0,
            test_key(0x03),
        ));
        packet.append_input(VInput::new(
            test_asset_id(1),
            1,
            AssetVersion::V0,
            test_key(0x03),
        ));
        let err = packet.total_input_amount().unwrap_err();
        assert!(matches!(err, VPacketError::AmountOverflow));
    }

    #[test]
    fn replace_output_rechecks_cardinality() {
        let mut packet = VPacket::new(test_asset_id(1));
        packet
            .append_output(test_output(100, OutputRole::SplitRoot))
            .unwrap();
        packet
            .append_output(test_output(50, OutputRole::Recipient))
            .unwrap();

        // Promoting the second output while the first holds the slot fails.
        let err = packet
            .replace_output(1, test_output(50, OutputRole::SplitRoot))
            .unwrap_err();
        assert!(matches!(err, VPacketError::TooManySplitRoots));

        // Replacing the split root itself is fine.
        packet
            .replace_output(0, test_output(100, OutputRole::SplitRoot))
            .unwrap();

        let err = packet
            .replace_output(5, test_output(1, OutputRole::Recipient))
            .unwrap_err();
        assert!(matches!(err, VPacketError::OutputIndexOutOfRange { .. }));
    }

    #[test]
    fn interactive_send_starts_with_one_recipient_output() {
        let packet = VPacket::for_interactive_send(
            test_asset_id(7),
            1100,
            test_key(0x05),
            0,
            AssetVersion::V0,
        );
        assert_eq!(packet.outputs().len(), 1);
        let out = &packet.outputs()[0];
        assert_eq!(out.amount, 1100);
        assert_eq!(out.role, OutputRole::Recipient);
        assert!(out.interactive);
        assert!(packet.split_root_index().is_none());
    }
}
