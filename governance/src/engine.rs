//! Admission and activation of parameter-change proposals.
//!
//! Semantic validation of the proposed values (ranges, cross-field rules)
//! is the validator subsystem's job; this engine only enforces the
//! proposal-lifecycle rules the *current* record dictates.

use crate::error::GovernanceError;
use crate::proposal::ParameterChangeProposal;
use karma_types::{ChainParameters, Timestamp};

pub struct GovernanceEngine;

impl GovernanceEngine {
    /// Check that a freshly submitted proposal is admissible under the
    /// currently live parameters.
    pub fn admit(
        &self,
        proposal: &ParameterChangeProposal,
        current: &ChainParameters,
        now: Timestamp,
    ) -> Result<(), GovernanceError> {
        let remaining = proposal.remaining_lifetime(now);
        if remaining == 0 {
            return Err(GovernanceError::Expired);
        }
        if remaining > u64::from(current.maximum_proposal_lifetime) {
            return Err(GovernanceError::LifetimeTooLong {
                have: remaining,
                max: current.maximum_proposal_lifetime,
            });
        }
        if proposal.review_period_seconds < current.committee_proposal_review_period {
            return Err(GovernanceError::ReviewPeriodTooShort {
                have: proposal.review_period_seconds,
                need: current.committee_proposal_review_period,
            });
        }
        if u64::from(proposal.review_period_seconds) > remaining {
            return Err(GovernanceError::ReviewExceedsLifetime {
                review: proposal.review_period_seconds,
                remaining,
            });
        }
        Ok(())
    }

    /// Activate a proposal: replace the live record wholesale.
    ///
    /// The swap is atomic from the caller's point of view; there is never a
    /// half-updated record visible to consensus code.
    pub fn activate(
        &self,
        proposal: &ParameterChangeProposal,
        current: &mut ChainParameters,
        now: Timestamp,
    ) -> Result<(), GovernanceError> {
        if proposal.remaining_lifetime(now) == 0 {
            return Err(GovernanceError::Expired);
        }
        if !proposal.review_complete(now) {
            return Err(GovernanceError::StillInReview);
        }
        *current = proposal.new_parameters.clone();
        tracing::info!(
            proposer = %proposal.proposer,
            extensions = current.extensions.len(),
            "chain parameters replaced"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use karma_types::{AccountId, CreditOptions};

    fn proposal_at(created: u64) -> ParameterChangeProposal {
        let current = ChainParameters::default();
        let mut new_parameters = ChainParameters::default();
        new_parameters.block_interval = 3;
        new_parameters.set_credit_options(CreditOptions {
            seconds_per_day: 43_200,
            ..CreditOptions::default()
        });
        ParameterChangeProposal {
            proposer: AccountId::new(7),
            new_parameters,
            review_period_seconds: current.committee_proposal_review_period,
            created_at: Timestamp::new(created),
            expiration: Timestamp::new(created + u64::from(current.maximum_proposal_lifetime)),
        }
    }

    #[test]
    fn admissible_proposal_passes() {
        let engine = GovernanceEngine;
        let current = ChainParameters::default();
        let proposal = proposal_at(1_000);
        assert!(engine.admit(&proposal, &current, Timestamp::new(1_000)).is_ok());
    }

    #[test]
    fn short_review_period_is_rejected() {
        let engine = GovernanceEngine;
        let current = ChainParameters::default();
        let mut proposal = proposal_at(1_000);
        proposal.review_period_seconds = 60;
        let err = engine
            .admit(&proposal, &current, Timestamp::new(1_000))
            .unwrap_err();
        assert!(matches!(err, GovernanceError::ReviewPeriodTooShort { .. }));
    }

    #[test]
    fn overlong_lifetime_is_rejected() {
        let engine = GovernanceEngine;
        let current = ChainParameters::default();
        let mut proposal = proposal_at(1_000);
        proposal.expiration = Timestamp::new(
            1_000 + u64::from(current.maximum_proposal_lifetime) + 1,
        );
        let err = engine
            .admit(&proposal, &current, Timestamp::new(1_000))
            .unwrap_err();
        assert!(matches!(err, GovernanceError::LifetimeTooLong { .. }));
    }

    #[test]
    fn expired_proposal_cannot_activate() {
        let engine = GovernanceEngine;
        let mut current = ChainParameters::default();
        let proposal = proposal_at(1_000);
        let err = engine
            .activate(&proposal, &mut current, proposal.expiration)
            .unwrap_err();
        assert!(matches!(err, GovernanceError::Expired));
    }

    #[test]
    fn activation_before_review_completes_is_rejected() {
        let engine = GovernanceEngine;
        let mut current = ChainParameters::default();
        let proposal = proposal_at(1_000);
        let err = engine
            .activate(&proposal, &mut current, Timestamp::new(1_001))
            .unwrap_err();
        assert!(matches!(err, GovernanceError::StillInReview));
    }

    #[test]
    fn activation_replaces_record_wholesale() {
        let engine = GovernanceEngine;
        let mut current = ChainParameters::default();
        let proposal = proposal_at(1_000);
        let after_review =
            Timestamp::new(1_000 + u64::from(proposal.review_period_seconds));

        engine
            .activate(&proposal, &mut current, after_review)
            .unwrap();
        assert_eq!(current, proposal.new_parameters);
        assert_eq!(current.block_interval, 3);
        assert_eq!(current.get_credit_options().seconds_per_day, 43_200);
    }
}
