//! Typed parameter extensions — optional, independently-versioned parameter
//! groups attached to [`ChainParameters`](crate::params::ChainParameters).
//!
//! Extensions are the forward-compatibility mechanism of the parameter
//! record: a protocol upgrade can introduce a new group under a fresh wire
//! tag without changing the shape of the base record, and nodes that do not
//! recognize a tag carry its payload through re-serialization untouched.
//!
//! The set guarantees at most one element per tag. That invariant lives in
//! [`ExtensionSet::set`], not in the container: a hostile encoding can hand
//! us duplicates, in which case [`ExtensionSet::get`] takes the first match
//! and the next `set` repairs the set to one-per-tag.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire tag for [`CreditOptions`]. Tags are append-only and never reused.
pub const CREDIT_OPTIONS_TAG: u8 = 0;

/// Wire tag for [`CreditReferrerBonusOptions`].
pub const CREDIT_REFERRER_BONUS_TAG: u8 = 1;

/// Credit-system parameters.
///
/// Defaults are the "feature absent" baseline: a node that has never seen
/// this extension on chain behaves identically to one that decoded the
/// default values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditOptions {
    /// Seconds in one credit day.
    pub seconds_per_day: u32,
    /// Maximum credit expiration time, in days.
    pub max_credit_expiration_days: u32,
    /// Minimum active witnesses that must vote to set a new exchange rate.
    pub min_witnesses_for_exchange_rate: u32,
    /// Maximum seconds to wait for witnesses to publish exchange rates.
    pub exchange_rate_set_max_interval: u32,
    /// Seconds after which the minimum-witness rate check re-runs.
    pub exchange_rate_set_min_interval: u32,
}

impl Default for CreditOptions {
    fn default() -> Self {
        Self {
            seconds_per_day: 86_400,
            max_credit_expiration_days: 7,
            min_witnesses_for_exchange_rate: 7,
            exchange_rate_set_max_interval: 3_600,
            exchange_rate_set_min_interval: 75,
        }
    }
}

/// Referrer-bonus parameters for the credit system.
///
/// Bonus fractions are basis points (10_000 = 100%). The upstream record
/// stored these as binary floats, which is not bit-reproducible across
/// toolchains and therefore unusable in a consensus path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditReferrerBonusOptions {
    /// Bonus paid to the karma operator account (bps).
    pub karma_account_bonus_bps: u32,
    /// Bonus paid to the creditor's referrer on success (bps).
    pub creditor_referrer_bonus_bps: u32,
    /// Bonus paid to the borrower's referrer on success (bps).
    pub borrower_referrer_bonus_bps: u32,
    /// Bonus paid to the creditor's referrer on a failed credit (bps).
    pub fail_creditor_referrer_bonus_bps: u32,
    /// Bonus paid to the borrower's referrer on a failed credit (bps).
    pub fail_borrower_referrer_bonus_bps: u32,
    /// Name of the operator account that collects the karma bonus.
    pub special_account_name: String,
}

impl Default for CreditReferrerBonusOptions {
    fn default() -> Self {
        Self {
            karma_account_bonus_bps: 5_000,         // 50%
            creditor_referrer_bonus_bps: 1_000,     // 10%
            borrower_referrer_bonus_bps: 1_000,     // 10%
            fail_creditor_referrer_bonus_bps: 0,
            fail_borrower_referrer_bonus_bps: 0,
            special_account_name: "ooo-karma-rus".to_string(),
        }
    }
}

/// One element of the extension set: a known parameter group, or an opaque
/// payload under a tag this node version does not understand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParameterExtension {
    CreditOptions(CreditOptions),
    CreditReferrerBonus(CreditReferrerBonusOptions),
    /// A group introduced by a later protocol version. Carried verbatim so
    /// re-encoding reproduces the original bytes.
    Unknown { tag: u8, payload: Vec<u8> },
}

impl ParameterExtension {
    /// Every tag this build of the protocol understands, in wire order.
    pub const KNOWN_TAGS: [u8; 2] = [CREDIT_OPTIONS_TAG, CREDIT_REFERRER_BONUS_TAG];

    /// The wire tag of this element.
    pub fn tag(&self) -> u8 {
        match self {
            Self::CreditOptions(_) => CREDIT_OPTIONS_TAG,
            Self::CreditReferrerBonus(_) => CREDIT_REFERRER_BONUS_TAG,
            Self::Unknown { tag, .. } => *tag,
        }
    }

    /// Human-readable name of this element's group.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreditOptions(_) => "credit_options",
            Self::CreditReferrerBonus(_) => "credit_referrer_bonus_options",
            Self::Unknown { .. } => "unknown",
        }
    }
}

/// Wire form of an extension: tag plus bincode-encoded payload bytes.
///
/// Keeping the payload opaque at this layer is what lets `Unknown` survive
/// a decode → re-encode round trip byte-identically.
#[derive(Serialize, Deserialize)]
struct WireExtension {
    tag: u8,
    payload: Vec<u8>,
}

impl Serialize for ParameterExtension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            Self::CreditOptions(v) => WireExtension {
                tag: CREDIT_OPTIONS_TAG,
                payload: bincode::serialize(v).map_err(S::Error::custom)?,
            },
            Self::CreditReferrerBonus(v) => WireExtension {
                tag: CREDIT_REFERRER_BONUS_TAG,
                payload: bincode::serialize(v).map_err(S::Error::custom)?,
            },
            Self::Unknown { tag, payload } => WireExtension {
                tag: *tag,
                payload: payload.clone(),
            },
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ParameterExtension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireExtension::deserialize(deserializer)?;
        match wire.tag {
            CREDIT_OPTIONS_TAG => bincode::deserialize(&wire.payload)
                .map(Self::CreditOptions)
                .map_err(D::Error::custom),
            CREDIT_REFERRER_BONUS_TAG => bincode::deserialize(&wire.payload)
                .map(Self::CreditReferrerBonus)
                .map_err(D::Error::custom),
            tag => Ok(Self::Unknown {
                tag,
                payload: wire.payload,
            }),
        }
    }
}

/// A parameter group that can live in an [`ExtensionSet`].
///
/// The trait ties a payload type to its wire tag and to the enum variant
/// that carries it, so `get`/`set` can be written once instead of once per
/// group.
pub trait ParameterGroup: Default + Clone {
    /// Wire tag of this group.
    const TAG: u8;

    /// Wrap this value into its extension variant.
    fn into_extension(self) -> ParameterExtension;

    /// Project the payload out of an extension, if the variant matches.
    fn from_extension(ext: &ParameterExtension) -> Option<&Self>;
}

impl ParameterGroup for CreditOptions {
    const TAG: u8 = CREDIT_OPTIONS_TAG;

    fn into_extension(self) -> ParameterExtension {
        ParameterExtension::CreditOptions(self)
    }

    fn from_extension(ext: &ParameterExtension) -> Option<&Self> {
        match ext {
            ParameterExtension::CreditOptions(v) => Some(v),
            _ => None,
        }
    }
}

impl ParameterGroup for CreditReferrerBonusOptions {
    const TAG: u8 = CREDIT_REFERRER_BONUS_TAG;

    fn into_extension(self) -> ParameterExtension {
        ParameterExtension::CreditReferrerBonus(self)
    }

    fn from_extension(ext: &ParameterExtension) -> Option<&Self> {
        match ext {
            ParameterExtension::CreditReferrerBonus(v) => Some(v),
            _ => None,
        }
    }
}

/// Ordered, duplicate-free collection of parameter extensions.
///
/// Elements are kept sorted by wire tag, so iteration order is deterministic
/// across nodes no matter what order `set` calls were made in. Mutation goes
/// exclusively through [`ExtensionSet::set`]; there is no way to push raw
/// elements and break the one-per-tag invariant from outside.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionSet(Vec<ParameterExtension>);

impl ExtensionSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Read-only view of the elements, in tag order.
    pub fn iter(&self) -> std::slice::Iter<'_, ParameterExtension> {
        self.0.iter()
    }

    /// The value of group `T`, or `T`'s default when the group is absent.
    ///
    /// Total: never fails and never mutates the set.
    pub fn get<T: ParameterGroup>(&self) -> T {
        self.0
            .iter()
            .find(|e| e.tag() == T::TAG)
            .and_then(T::from_extension)
            .cloned()
            .unwrap_or_default()
    }

    /// Insert or replace the value of group `T`.
    ///
    /// If an element with `T`'s tag exists its payload is replaced in place,
    /// leaving every other element where it was. Otherwise the value is
    /// inserted at its tag-sorted position. Afterwards exactly one element
    /// carries `T`'s tag, even if a hostile encoding delivered duplicates.
    pub fn set<T: ParameterGroup>(&mut self, value: T) {
        if let Some(first) = self.0.iter().position(|e| e.tag() == T::TAG) {
            self.0[first] = value.into_extension();
            // A decoded set may carry duplicate tags; drop the extras so the
            // one-per-tag guarantee holds after every write.
            let mut idx = 0;
            self.0.retain(|e| {
                let keep = idx == first || e.tag() != T::TAG;
                idx += 1;
                keep
            });
            return;
        }
        let at = self
            .0
            .iter()
            .position(|e| e.tag() > T::TAG)
            .unwrap_or(self.0.len());
        self.0.insert(at, value.into_extension());
    }
}

impl<'a> IntoIterator for &'a ExtensionSet {
    type Item = &'a ParameterExtension;
    type IntoIter = std::slice::Iter<'a, ParameterExtension>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
