//! The funding engine for the weft asset overlay.
//!
//! Given a transfer or burn intent and an externally selected set of inputs,
//! the engine computes the output set of one virtual packet:
//! - **Transfer**: recipient outputs summing to the send amount, one change
//!   output for any remainder, and a single designated split root whenever
//!   the value splits.
//! - **Partial burn**: a NUMS-keyed destruction output plus a change output
//!   for the remainder.
//! - **Full burn**: a NUMS-keyed destruction output plus a zero-value
//!   tombstone filling the split-root slot.
//!
//! Burns must first pass the authorization gate ([`gate::authorize_burn`]):
//! the intent has to carry the exact, publicly documented confirmation
//! phrase. This is deliberate friction against accidental destructive calls,
//! not a security boundary.
//!
//! The engine is stateless and does no I/O; key derivation and signing are
//! collaborator concerns reached through the [`KeySource`] trait and the
//! returned packet respectively.

pub mod engine;
pub mod error;
pub mod gate;
pub mod intent;

pub use engine::{FundingEngine, KeySource};
pub use error::FundingError;
pub use gate::{authorize_burn, BURN_CONFIRMATION_TEXT};
pub use intent::{Allocation, BurnIntent, FundingIntent, TransferIntent};

pub use weft_vpacket::{VInput, VOutput, VPacket, VPacketError};
