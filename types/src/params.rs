//! The consensus-critical chain parameter record.
//!
//! Every node must interpret these values identically; they are changed only
//! by committee parameter-change proposals, which replace the whole record
//! atomically. Field declaration order is the wire order and is stable
//! across versions unless a protocol upgrade explicitly changes it.

use crate::amount::ShareAmount;
use crate::config;
use crate::extensions::{CreditOptions, CreditReferrerBonusOptions, ExtensionSet};
use crate::fee_schedule::FeeSchedule;
use serde::{Deserialize, Serialize};

/// Network-wide tunable parameters stored by every node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainParameters {
    /// Current schedule of operation fees.
    pub current_fees: FeeSchedule,
    /// Interval in seconds between blocks.
    pub block_interval: u8,
    /// Interval in seconds between chain maintenance events.
    pub maintenance_interval: u32,
    /// Number of block intervals to skip at maintenance time.
    pub maintenance_skip_slots: u8,
    /// Minimum seconds a committee-authority proposal may not be signed,
    /// prior to expiration.
    pub committee_proposal_review_period: u32,
    /// Maximum transaction size in bytes.
    pub maximum_transaction_size: u32,
    /// Maximum block size in bytes.
    pub maximum_block_size: u32,
    /// Maximum transaction lifetime in seconds before expiring.
    pub maximum_time_until_expiration: u32,
    /// Maximum seconds a proposed transaction is kept before expiring.
    pub maximum_proposal_lifetime: u32,
    /// Maximum accounts an asset may list as whitelist/blacklist authorities.
    pub maximum_asset_whitelist_authorities: u8,
    /// Maximum feed publishers for a single asset.
    pub maximum_asset_feed_publishers: u8,
    /// Maximum number of active witnesses.
    pub maximum_witness_count: u16,
    /// Maximum number of active committee members.
    pub maximum_committee_count: u16,
    /// Largest number of keys/accounts an authority can contain.
    pub maximum_authority_membership: u16,
    /// Share of the network fee allocation taken out of circulation (bps).
    pub reserve_percent_of_fee: u16,
    /// Share of transaction fees paid to the network (bps).
    pub network_percent_of_fee: u16,
    /// Share of transaction fees paid to the lifetime referrer (bps).
    pub lifetime_referrer_percent_of_fee: u16,
    /// Seconds cashback rewards vest before becoming liquid.
    pub cashback_vesting_period_seconds: u32,
    /// Maximum cashback receivable without vesting.
    pub cashback_vesting_threshold: ShareAmount,
    /// False restricts voting to member accounts.
    pub count_non_member_votes: bool,
    /// True if non-member accounts may set whitelists and blacklists.
    pub allow_non_member_whitelists: bool,
    /// Core tokens allocated to witnesses, per block.
    pub witness_pay_per_block: ShareAmount,
    /// Vesting period in seconds for witness pay.
    pub witness_pay_vesting_seconds: u32,
    /// Core tokens allocated to the worker budget, per day.
    pub worker_budget_per_day: ShareAmount,
    /// Predicate opcodes must be strictly below this value.
    pub max_predicate_opcode: u16,
    /// Accumulated market fees at which liquidation triggers.
    pub fee_liquidation_threshold: ShareAmount,
    /// Number of registered accounts between registration-fee scalings.
    pub accounts_per_fee_scale: u16,
    /// Left bitshifts applied to the registration fee at each scaling.
    pub account_fee_scale_bitshifts: u8,
    /// Maximum recursion depth when checking authority signatures.
    pub max_authority_depth: u8,
    /// Optional parameter groups. Must stay last for wire compatibility.
    pub extensions: ExtensionSet,
}

impl ChainParameters {
    /// Credit-system options, or the baseline defaults when the extension
    /// has not been set on chain.
    pub fn get_credit_options(&self) -> CreditOptions {
        self.extensions.get()
    }

    /// Referrer-bonus options, or the baseline defaults when the extension
    /// has not been set on chain.
    pub fn get_bonus_options(&self) -> CreditReferrerBonusOptions {
        self.extensions.get()
    }

    /// Insert or replace the credit-system options.
    pub fn set_credit_options(&mut self, new_options: CreditOptions) {
        self.extensions.set(new_options);
    }

    /// Insert or replace the referrer-bonus options.
    pub fn set_bonus_options(&mut self, new_options: CreditReferrerBonusOptions) {
        self.extensions.set(new_options);
    }
}

/// Compiled-in protocol defaults with an empty extension set.
impl Default for ChainParameters {
    fn default() -> Self {
        Self {
            current_fees: FeeSchedule::default(),
            block_interval: config::DEFAULT_BLOCK_INTERVAL,
            maintenance_interval: config::DEFAULT_MAINTENANCE_INTERVAL,
            maintenance_skip_slots: config::DEFAULT_MAINTENANCE_SKIP_SLOTS,
            committee_proposal_review_period: config::DEFAULT_COMMITTEE_PROPOSAL_REVIEW_PERIOD,
            maximum_transaction_size: config::DEFAULT_MAX_TRANSACTION_SIZE,
            maximum_block_size: config::DEFAULT_MAX_BLOCK_SIZE,
            maximum_time_until_expiration: config::DEFAULT_MAX_TIME_UNTIL_EXPIRATION,
            maximum_proposal_lifetime: config::DEFAULT_MAX_PROPOSAL_LIFETIME,
            maximum_asset_whitelist_authorities: config::DEFAULT_MAX_ASSET_WHITELIST_AUTHORITIES,
            maximum_asset_feed_publishers: config::DEFAULT_MAX_ASSET_FEED_PUBLISHERS,
            maximum_witness_count: config::DEFAULT_MAX_WITNESS_COUNT,
            maximum_committee_count: config::DEFAULT_MAX_COMMITTEE_COUNT,
            maximum_authority_membership: config::DEFAULT_MAX_AUTHORITY_MEMBERSHIP,
            reserve_percent_of_fee: config::DEFAULT_RESERVE_PERCENT_OF_FEE,
            network_percent_of_fee: config::DEFAULT_NETWORK_PERCENT_OF_FEE,
            lifetime_referrer_percent_of_fee: config::DEFAULT_LIFETIME_REFERRER_PERCENT_OF_FEE,
            cashback_vesting_period_seconds: config::DEFAULT_CASHBACK_VESTING_PERIOD,
            cashback_vesting_threshold: ShareAmount::new(config::DEFAULT_CASHBACK_VESTING_THRESHOLD),
            count_non_member_votes: true,
            allow_non_member_whitelists: false,
            witness_pay_per_block: ShareAmount::new(config::DEFAULT_WITNESS_PAY_PER_BLOCK),
            witness_pay_vesting_seconds: config::DEFAULT_WITNESS_PAY_VESTING_SECONDS,
            worker_budget_per_day: ShareAmount::new(config::DEFAULT_WORKER_BUDGET_PER_DAY),
            max_predicate_opcode: config::DEFAULT_MAX_PREDICATE_OPCODE,
            fee_liquidation_threshold: ShareAmount::new(config::DEFAULT_FEE_LIQUIDATION_THRESHOLD),
            accounts_per_fee_scale: config::DEFAULT_ACCOUNTS_PER_FEE_SCALE,
            account_fee_scale_bitshifts: config::DEFAULT_ACCOUNT_FEE_SCALE_BITSHIFTS,
            max_authority_depth: config::MAX_SIG_CHECK_DEPTH,
            extensions: ExtensionSet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_has_empty_extensions() {
        let params = ChainParameters::default();
        assert!(params.extensions.is_empty());
        assert_eq!(params.block_interval, 5);
        assert_eq!(params.maintenance_interval, 86_400);
    }

    #[test]
    fn fresh_record_falls_back_to_extension_defaults() {
        let params = ChainParameters::default();
        assert_eq!(params.get_credit_options(), CreditOptions::default());
        assert_eq!(
            params.get_bonus_options(),
            CreditReferrerBonusOptions::default()
        );
    }

    #[test]
    fn credit_then_bonus_scenario() {
        let mut params = ChainParameters::default();
        assert_eq!(params.get_credit_options(), CreditOptions::default());

        params.set_credit_options(CreditOptions {
            seconds_per_day: 43_200,
            ..CreditOptions::default()
        });
        let opts = params.get_credit_options();
        assert_eq!(opts.seconds_per_day, 43_200);
        assert_eq!(opts.max_credit_expiration_days, 7);
        assert_eq!(opts.min_witnesses_for_exchange_rate, 7);

        params.set_bonus_options(CreditReferrerBonusOptions {
            karma_account_bonus_bps: 2_500,
            ..CreditReferrerBonusOptions::default()
        });
        assert_eq!(params.get_credit_options().seconds_per_day, 43_200);
        assert_eq!(params.get_bonus_options().karma_account_bonus_bps, 2_500);
        assert_eq!(params.extensions.len(), 2);
    }

    #[test]
    fn record_is_plain_value_copyable() {
        let mut a = ChainParameters::default();
        a.set_credit_options(CreditOptions {
            seconds_per_day: 1,
            ..CreditOptions::default()
        });
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(b.get_credit_options().seconds_per_day, 1);
    }
}
