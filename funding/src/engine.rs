//! The funding engine.

use tracing::debug;
use weft_types::{AssetVersion, OutputRole, ScriptKey};
use weft_vpacket::{VInput, VOutput, VPacket};

use crate::error::FundingError;
use crate::gate::authorize_burn;
use crate::intent::{BurnIntent, FundingIntent, TransferIntent};

/// Supplies fresh control keys for change outputs.
///
/// The engine never derives keys itself; wallets implement this against
/// their own derivation scheme.
pub trait KeySource {
    fn next_script_key(&mut self) -> ScriptKey;
}

/// Turns an intent plus a selected set of inputs into a complete,
/// conservation-valid virtual packet.
///
/// The engine is stateless: every call is a pure function of its arguments
/// and produces a brand-new packet with no aliasing to caller-owned state.
/// Serializing concurrent funding attempts against the same inputs is the
/// caller's job.
pub struct FundingEngine;

impl FundingEngine {
    pub fn new() -> Self {
        Self
    }

    /// The primary entry point: fund a transfer or burn.
    ///
    /// Burns pass through the authorization gate first; no packet is
    /// constructed if the confirmation phrase does not match.
    pub fn fund(
        &self,
        intent: &FundingIntent,
        inputs: &[VInput],
        keys: &mut dyn KeySource,
    ) -> Result<VPacket, FundingError> {
        debug!(
            asset_id = %intent.asset_id(),
            burn = intent.is_burn(),
            num_inputs = inputs.len(),
            "funding virtual packet"
        );
        match intent {
            FundingIntent::Transfer(transfer) => self.fund_transfer(transfer, inputs, keys),
            FundingIntent::Burn(burn) => {
                authorize_burn(&burn.confirmation)?;
                self.fund_burn(burn, inputs, keys)
            }
        }
    }

    /// Allocate recipient outputs summing to the send amount, plus one change
    /// output for any remainder. Whenever the packet ends up splitting value
    /// across more than one output, the first recipient output is designated
    /// the split root.
    fn fund_transfer(
        &self,
        intent: &TransferIntent,
        inputs: &[VInput],
        keys: &mut dyn KeySource,
    ) -> Result<VPacket, FundingError> {
        let (input_total, asset_version) = validate_inputs(&intent.asset_id, inputs)?;

        if intent.recipients.is_empty() {
            return Err(FundingError::ZeroAmountTransfer);
        }
        if intent.recipients.iter().any(|a| a.amount == 0) {
            return Err(FundingError::ZeroAmountTransfer);
        }
        let send_total = intent
            .total_amount()
            .ok_or(FundingError::AmountOverflow)?;
        if send_total > input_total {
            return Err(FundingError::InsufficientInputValue {
                needed: send_total,
                available: input_total,
            });
        }
        let change = input_total - send_total;

        let mut packet = VPacket::new(intent.asset_id);
        for input in inputs {
            packet.append_input(input.clone());
        }

        // More than one output means the value splits and one output must
        // carry the split commitment root.
        let splits = intent.recipients.len() > 1 || change > 0;
        for (i, allocation) in intent.recipients.iter().enumerate() {
            let role = if splits && i == 0 {
                OutputRole::SplitRoot
            } else {
                OutputRole::Recipient
            };
            packet.append_output(VOutput::build(
                allocation.amount,
                allocation.script_key,
                role,
                asset_version,
                allocation.anchor_output_index,
                intent.interactive,
            )?)?;
        }

        if change > 0 {
            let change_key = keys.next_script_key();
            debug!(change, "returning remainder to sender");
            packet.append_output(VOutput::build(
                change,
                change_key,
                OutputRole::Change,
                asset_version,
                0,
                false,
            )?)?;
        }

        packet.validate_conservation()?;
        Ok(packet)
    }

    /// Shape a burn packet: the destruction output carries the burned value
    /// under the NUMS key. A partial burn returns the remainder as change; a
    /// full burn adds the zero-value tombstone so the packet still has a
    /// well-formed split root.
    fn fund_burn(
        &self,
        intent: &BurnIntent,
        inputs: &[VInput],
        keys: &mut dyn KeySource,
    ) -> Result<VPacket, FundingError> {
        let (input_total, asset_version) = validate_inputs(&intent.asset_id, inputs)?;

        if intent.amount == 0 {
            return Err(FundingError::ZeroAmountTransfer);
        }
        if inputs.iter().any(|i| i.script_key.is_unspendable()) {
            return Err(FundingError::BurnedInput);
        }
        if intent.amount > input_total {
            return Err(FundingError::InsufficientInputValue {
                needed: intent.amount,
                available: input_total,
            });
        }

        let mut packet = VPacket::new(intent.asset_id);
        for input in inputs {
            packet.append_input(input.clone());
        }

        // The destruction output: Recipient role for packet validation, NUMS
        // key for permanent unspendability.
        packet.append_output(VOutput::build(
            intent.amount,
            ScriptKey::NUMS,
            OutputRole::Recipient,
            asset_version,
            0,
            true,
        )?)?;

        let change = input_total - intent.amount;
        if change > 0 {
            let change_key = keys.next_script_key();
            debug!(change, burn = intent.amount, "partial burn, returning remainder");
            packet.append_output(VOutput::build(
                change,
                change_key,
                OutputRole::Change,
                asset_version,
                1,
                false,
            )?)?;
        } else {
            debug!(burn = intent.amount, "full burn, adding tombstone split root");
            packet.append_output(VOutput::tombstone(
                asset_version,
                intent.tombstone_anchor_index,
            ))?;
        }

        packet.validate_conservation()?;
        Ok(packet)
    }
}

impl Default for FundingEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Check that the selected inputs all belong to the intent's asset line and
/// agree on an asset version; returns their checked total and that version.
fn validate_inputs(
    asset_id: &weft_types::AssetId,
    inputs: &[VInput],
) -> Result<(u64, AssetVersion), FundingError> {
    let first = inputs.first().ok_or(FundingError::NoInputs)?;
    let asset_version = first.asset_version;

    let mut total = 0u64;
    for input in inputs {
        if input.asset_id != *asset_id {
            return Err(FundingError::AssetIdMismatch);
        }
        if input.asset_version != asset_version {
            return Err(FundingError::AssetVersionMismatch);
        }
        total = total
            .checked_add(input.amount)
            .ok_or(FundingError::AmountOverflow)?;
    }
    Ok((total, asset_version))
}
