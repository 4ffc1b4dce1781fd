//! Fundamental types for the weft asset overlay.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: asset identifiers and versions, script (control) keys including
//! the unspendable NUMS marker key, and the output role enum.

pub mod asset;
pub mod keys;
pub mod role;

pub use asset::{AssetId, AssetVersion};
pub use keys::ScriptKey;
pub use role::OutputRole;
