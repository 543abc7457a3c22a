//! The fee schedule embedded in the chain parameters.
//!
//! Fee *calculation* lives in the consensus crates; this record only carries
//! the committee-governed numbers those crates read.

use crate::amount::ShareAmount;
use crate::config::FULL_PERCENT;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current schedule of operation fees.
///
/// `BTreeMap` keeps the per-operation entries in a stable key order, which
/// the wire encoding relies on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Multiplier applied to every flat fee, in basis points.
    pub scale: u32,
    /// Flat fee per operation, keyed by operation wire tag.
    pub flat_fees: BTreeMap<u8, ShareAmount>,
}

impl FeeSchedule {
    /// Flat fee for an operation tag, scaled. Unlisted operations are free.
    pub fn fee_for(&self, operation_tag: u8) -> ShareAmount {
        let base = self
            .flat_fees
            .get(&operation_tag)
            .copied()
            .unwrap_or(ShareAmount::ZERO);
        // Widen before scaling so a large fee times a large scale cannot
        // wrap, and saturate on the way back down.
        let scaled = i128::from(base.raw()) * i128::from(self.scale) / i128::from(FULL_PERCENT);
        ShareAmount::new(scaled.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            scale: u32::from(FULL_PERCENT),
            flat_fees: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlisted_operations_are_free() {
        let schedule = FeeSchedule::default();
        assert_eq!(schedule.fee_for(0), ShareAmount::ZERO);
    }

    #[test]
    fn scale_applies_to_flat_fees() {
        let mut schedule = FeeSchedule::default();
        schedule.flat_fees.insert(3, ShareAmount::new(1_000));
        assert_eq!(schedule.fee_for(3), ShareAmount::new(1_000));

        schedule.scale = 5_000; // halve every fee
        assert_eq!(schedule.fee_for(3), ShareAmount::new(500));
    }

    #[test]
    fn extreme_scale_saturates_instead_of_wrapping() {
        let mut schedule = FeeSchedule::default();
        schedule.flat_fees.insert(0, ShareAmount::new(i64::MAX));
        schedule.scale = u32::MAX;
        let fee = schedule.fee_for(0);
        assert_eq!(fee, ShareAmount::new(i64::MAX));
        assert!(fee.raw() > 0);
    }
}
