//! Liquidity-share units.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AmmError, Result};

/// Units of proportional ownership of the pool's reserves.
///
/// Distinct from [`Amount`](super::Amount): shares measure a fraction of
/// the pool, not a quantity of either token. They are minted on deposit,
/// burned on withdrawal, and never traded through the swap formula.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Shares(u128);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Shares` value from a raw `u128`.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the share count is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Addition that reports [`AmmError::Overflow`] with context.
    pub const fn add_or(&self, other: &Self, ctx: &'static str) -> Result<Self> {
        match self.checked_add(other) {
            Some(v) => Ok(v),
            None => Err(AmmError::Overflow(ctx)),
        }
    }

    /// Subtraction that reports [`AmmError::Underflow`] with context.
    pub const fn sub_or(&self, other: &Self, ctx: &'static str) -> Result<Self> {
        match self.checked_sub(other) {
            Some(v) => Ok(v),
            None => Err(AmmError::Underflow(ctx)),
        }
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
