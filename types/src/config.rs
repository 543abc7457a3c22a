//! Protocol default constants.
//!
//! These are the compiled-in values every `ChainParameters` field starts
//! from. They are consensus-critical: changing one is a protocol upgrade,
//! not a code cleanup. Percentages are basis points (10_000 = 100%).

/// Raw units per whole core token (5 decimal places).
pub const CORE_PRECISION: i64 = 100_000;

/// 100% expressed in basis points.
pub const FULL_PERCENT: u16 = 10_000;

/// Interval in seconds between blocks.
pub const DEFAULT_BLOCK_INTERVAL: u8 = 5;

/// Interval in seconds between chain maintenance events.
pub const DEFAULT_MAINTENANCE_INTERVAL: u32 = 24 * 60 * 60; // 1 day

/// Number of block intervals to skip after a maintenance event.
pub const DEFAULT_MAINTENANCE_SKIP_SLOTS: u8 = 3;

/// Minimum seconds a committee proposal must sit in review before approval.
pub const DEFAULT_COMMITTEE_PROPOSAL_REVIEW_PERIOD: u32 = 14 * 24 * 60 * 60; // 2 weeks

/// Maximum transaction size in bytes.
pub const DEFAULT_MAX_TRANSACTION_SIZE: u32 = 2_048;

/// Maximum block size in bytes.
pub const DEFAULT_MAX_BLOCK_SIZE: u32 = 2_000_000; // 2 MB

/// Maximum transaction lifetime in seconds before expiration.
pub const DEFAULT_MAX_TIME_UNTIL_EXPIRATION: u32 = 24 * 60 * 60; // 1 day

/// Maximum seconds a proposed transaction is kept before expiring.
pub const DEFAULT_MAX_PROPOSAL_LIFETIME: u32 = 28 * 24 * 60 * 60; // 4 weeks

/// Maximum accounts an asset may list as whitelist/blacklist authorities.
pub const DEFAULT_MAX_ASSET_WHITELIST_AUTHORITIES: u8 = 10;

/// Maximum feed publishers for a single asset.
pub const DEFAULT_MAX_ASSET_FEED_PUBLISHERS: u8 = 10;

/// Maximum number of active witnesses.
pub const DEFAULT_MAX_WITNESS_COUNT: u16 = 1_001;

/// Maximum number of active committee members.
pub const DEFAULT_MAX_COMMITTEE_COUNT: u16 = 1_001;

/// Largest number of keys/accounts a single authority can contain.
pub const DEFAULT_MAX_AUTHORITY_MEMBERSHIP: u16 = 10;

/// Share of the network fee allocation taken out of circulation (bps).
pub const DEFAULT_RESERVE_PERCENT_OF_FEE: u16 = 2_000; // 20%

/// Share of transaction fees paid to the network (bps).
pub const DEFAULT_NETWORK_PERCENT_OF_FEE: u16 = 2_000; // 20%

/// Share of transaction fees paid to the lifetime referrer (bps).
pub const DEFAULT_LIFETIME_REFERRER_PERCENT_OF_FEE: u16 = 3_000; // 30%

/// Seconds cashback rewards vest before becoming liquid.
pub const DEFAULT_CASHBACK_VESTING_PERIOD: u32 = 365 * 24 * 60 * 60; // 1 year

/// Maximum cashback (raw units) receivable without vesting.
pub const DEFAULT_CASHBACK_VESTING_THRESHOLD: i64 = 100 * CORE_PRECISION;

/// Core tokens allocated to witnesses per block (raw units).
pub const DEFAULT_WITNESS_PAY_PER_BLOCK: i64 = 10 * CORE_PRECISION;

/// Vesting period in seconds for witness pay.
pub const DEFAULT_WITNESS_PAY_VESTING_SECONDS: u32 = 24 * 60 * 60; // 1 day

/// Core tokens allocated to the worker budget per day (raw units).
pub const DEFAULT_WORKER_BUDGET_PER_DAY: i64 = 500_000 * CORE_PRECISION;

/// Predicate opcodes must be strictly below this value.
pub const DEFAULT_MAX_PREDICATE_OPCODE: u16 = 4;

/// Accumulated market fees (raw units) at which liquidation triggers.
pub const DEFAULT_FEE_LIQUIDATION_THRESHOLD: i64 = 100 * CORE_PRECISION;

/// Number of registered accounts between registration-fee scalings.
pub const DEFAULT_ACCOUNTS_PER_FEE_SCALE: u16 = 1_000;

/// Left bitshifts applied to the registration fee at each scaling.
pub const DEFAULT_ACCOUNT_FEE_SCALE_BITSHIFTS: u8 = 4;

/// Maximum recursion depth when checking authority signatures.
pub const MAX_SIG_CHECK_DEPTH: u8 = 2;
