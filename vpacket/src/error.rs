//! Packet-structure errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VPacketError {
    #[error("invalid output spec: {reason}")]
    InvalidOutputSpec { reason: String },

    #[error("packet already carries a split-root output")]
    TooManySplitRoots,

    #[error("value mismatch: inputs total {input_total}, outputs total {output_total}")]
    ValueMismatch { input_total: u64, output_total: u64 },

    #[error("arithmetic overflow while summing packet amounts")]
    AmountOverflow,

    #[error("output index {index} out of range ({len} outputs)")]
    OutputIndexOutOfRange { index: usize, len: usize },
}
