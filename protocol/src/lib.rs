//! Wire encoding for consensus state records.
//!
//! The parameter record travels in committee proposals and in the genesis
//! state; this crate owns its framed binary form.

pub mod codec;
pub mod error;

pub use error::ProtocolError;
