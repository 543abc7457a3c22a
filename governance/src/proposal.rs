//! Parameter-change proposals.

use karma_types::{AccountId, ChainParameters, Timestamp};
use serde::{Deserialize, Serialize};

/// A committee proposal to replace the chain parameter record.
///
/// The proposal carries the complete replacement record, not a diff: the
/// record is small and replacing it wholesale keeps every node's copy
/// bit-identical without merge logic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterChangeProposal {
    /// Committee member who submitted the proposal.
    pub proposer: AccountId,
    /// The record that becomes live on activation.
    pub new_parameters: ChainParameters,
    /// Seconds the proposal must sit in review before it can activate.
    pub review_period_seconds: u32,
    /// When the proposal was submitted.
    pub created_at: Timestamp,
    /// When the proposal expires if not activated.
    pub expiration: Timestamp,
}

impl ParameterChangeProposal {
    /// Whether the review period has fully elapsed at `now`.
    pub fn review_complete(&self, now: Timestamp) -> bool {
        self.created_at
            .has_expired(u64::from(self.review_period_seconds), now)
    }

    /// Seconds of lifetime remaining at `now` (zero once expired).
    pub fn remaining_lifetime(&self, now: Timestamp) -> u64 {
        self.expiration.as_secs().saturating_sub(now.as_secs())
    }
}
