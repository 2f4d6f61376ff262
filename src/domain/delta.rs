//! Signed deltas for atomic reserve mutation.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Shares};
use crate::error::Result;

/// A signed change to an [`Amount`]: a credit, a debit, or nothing.
///
/// Amounts span the full `u128` range, so deltas are modeled as an
/// explicit direction plus magnitude rather than as `i128`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignedAmount {
    /// Increase by the contained amount.
    Credit(Amount),
    /// Decrease by the contained amount.
    Debit(Amount),
    /// Leave unchanged.
    Zero,
}

impl SignedAmount {
    /// Applies this delta to `value` with checked arithmetic.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Overflow`](crate::error::AmmError::Overflow) if a
    ///   credit exceeds `u128`.
    /// - [`AmmError::Underflow`](crate::error::AmmError::Underflow) if a
    ///   debit would go negative.
    pub const fn apply_to(&self, value: Amount, ctx: &'static str) -> Result<Amount> {
        match self {
            Self::Credit(delta) => value.add_or(delta, ctx),
            Self::Debit(delta) => value.sub_or(delta, ctx),
            Self::Zero => Ok(value),
        }
    }
}

impl fmt::Display for SignedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credit(a) => write!(f, "+{a}"),
            Self::Debit(a) => write!(f, "-{a}"),
            Self::Zero => write!(f, "0"),
        }
    }
}

/// A signed change to a [`Shares`] supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignedShares {
    /// Mint the contained shares.
    Mint(Shares),
    /// Burn the contained shares.
    Burn(Shares),
    /// Leave unchanged.
    Zero,
}

impl SignedShares {
    /// Applies this delta to `value` with checked arithmetic.
    ///
    /// # Errors
    ///
    /// Same contract as [`SignedAmount::apply_to`].
    pub const fn apply_to(&self, value: Shares, ctx: &'static str) -> Result<Shares> {
        match self {
            Self::Mint(delta) => value.add_or(delta, ctx),
            Self::Burn(delta) => value.sub_or(delta, ctx),
            Self::Zero => Ok(value),
        }
    }
}

impl fmt::Display for SignedShares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mint(s) => write!(f, "+{s}"),
            Self::Burn(s) => write!(f, "-{s}"),
            Self::Zero => write!(f, "0"),
        }
    }
}
