//! The virtual packet substrate.
//!
//! A virtual packet is the off-chain, pre-signing representation of one
//! value-conserving asset transfer: an ordered set of selected inputs and the
//! typed outputs that will consume their value. This crate only does
//! structural bookkeeping and invariant checks:
//! - typed outputs with construction-time invariants (the tombstone variant
//!   can only exist with amount zero and the NUMS key),
//! - at most one split-root-role output per packet,
//! - conservation: the output amounts must sum to the input amounts.
//!
//! Business logic (how many outputs, which amounts, which keys) lives in the
//! funding crate. Callers building packets by hand for interactive flows go
//! through the same checks.

pub mod error;
pub mod input;
pub mod output;
pub mod packet;

pub use error::VPacketError;
pub use input::VInput;
pub use output::VOutput;
pub use packet::VPacket;
