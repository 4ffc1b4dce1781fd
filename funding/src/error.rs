//! Funding errors.

use thiserror::Error;
use weft_vpacket::VPacketError;

#[derive(Debug, Error)]
pub enum FundingError {
    #[error("insufficient input value: need {needed}, available {available}")]
    InsufficientInputValue { needed: u64, available: u64 },

    #[error("transfer amount must be non-zero")]
    ZeroAmountTransfer,

    #[error("selected inputs span incompatible asset versions")]
    AssetVersionMismatch,

    #[error("selected input does not belong to the intent's asset line")]
    AssetIdMismatch,

    #[error("burn confirmation phrase does not match")]
    ConfirmationMismatch,

    #[error("no inputs selected")]
    NoInputs,

    #[error("selected input is already held by the unspendable key")]
    BurnedInput,

    #[error("arithmetic overflow while summing amounts")]
    AmountOverflow,

    #[error(transparent)]
    Packet(#[from] VPacketError),
}
