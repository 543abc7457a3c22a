//! Account identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Instance id of an account object on chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(u64);

impl AccountId {
    pub fn new(instance: u64) -> Self {
        Self(instance)
    }

    pub fn instance(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1.2.{}", self.0)
    }
}
