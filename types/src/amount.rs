//! Core-token share amounts.
//!
//! Amounts are fixed-point integers (i64 raw units) to avoid floating-point
//! errors. One whole KRM is `config::CORE_PRECISION` raw units. Amounts are
//! signed because fee and vesting arithmetic can produce deltas in either
//! direction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// An amount of the core token, in raw units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShareAmount(i64);

impl ShareAmount {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// A whole-token amount, scaled by `CORE_PRECISION`.
    pub fn from_whole(tokens: i64) -> Self {
        Self(tokens * crate::config::CORE_PRECISION)
    }

    pub fn raw(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for ShareAmount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for ShareAmount {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for ShareAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} raw", self.0)
    }
}
