//! Fundamental types for the Karma chain.
//!
//! This crate defines the value types shared across every other crate in the
//! workspace: the consensus-critical `ChainParameters` record, the typed
//! parameter-extension set, token amounts, and timestamps.

pub mod account;
pub mod amount;
pub mod config;
pub mod extensions;
pub mod fee_schedule;
pub mod params;
pub mod time;

pub use account::AccountId;
pub use amount::ShareAmount;
pub use extensions::{
    CreditOptions, CreditReferrerBonusOptions, ExtensionSet, ParameterExtension, ParameterGroup,
};
pub use fee_schedule::FeeSchedule;
pub use params::ChainParameters;
pub use time::Timestamp;
