//! Committee governance over the chain parameter record.
//!
//! A parameter change carries a complete replacement record. After the
//! review period passes, every node swaps its live record wholesale at the
//! same maintenance boundary; nothing is ever patched field by field.

pub mod engine;
pub mod error;
pub mod proposal;

pub use engine::GovernanceEngine;
pub use error::GovernanceError;
pub use proposal::ParameterChangeProposal;
