//! Fixed-point token amount with checked arithmetic.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Rounding;
use crate::error::{AmmError, Result};
use crate::math;

/// A token amount in raw units scaled by 10^18.
///
/// `Amount` is the fixed-point representation every formula in the crate
/// operates on: one whole token is [`Amount::WAD`] raw units. All `u128`
/// values are valid amounts.
///
/// Arithmetic methods are checked: they return `None` on overflow or
/// underflow instead of panicking, and division always takes an explicit
/// [`Rounding`] direction.
///
/// # Examples
///
/// ```
/// use cpamm::domain::Amount;
///
/// let a = Amount::from_whole(100);
/// let b = Amount::from_whole(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::from_whole(300)));
/// assert_eq!(b.checked_sub(&a), Some(a));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Raw units per whole token (10^18).
    pub const WAD: u128 = 1_000_000_000_000_000_000;

    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from raw 10^18-scaled units.
    pub const fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// Creates an `Amount` representing `whole` entire tokens.
    ///
    /// `u64::MAX * WAD` fits comfortably in `u128`, so this is total.
    pub const fn from_whole(whole: u64) -> Self {
        Self(whole as u128 * Self::WAD)
    }

    /// Returns the underlying raw `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
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

    /// Computes `self * numerator / denominator` with a 256-bit
    /// intermediate product.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `denominator` is zero.
    /// - [`AmmError::Overflow`] if the quotient exceeds `u128`.
    pub fn mul_div(&self, numerator: Self, denominator: Self, rounding: Rounding) -> Result<Self> {
        math::mul_div(self.0, numerator.0, denominator.0, rounding).map(Self)
    }

    /// Subtraction that reports [`AmmError::Underflow`] with context
    /// instead of returning `None`.
    pub const fn sub_or(&self, other: &Self, ctx: &'static str) -> Result<Self> {
        match self.checked_sub(other) {
            Some(v) => Ok(v),
            None => Err(AmmError::Underflow(ctx)),
        }
    }

    /// Addition that reports [`AmmError::Overflow`] with context instead
    /// of returning `None`.
    pub const fn add_or(&self, other: &Self, ctx: &'static str) -> Result<Self> {
        match self.checked_add(other) {
            Some(v) => Ok(v),
            None => Err(AmmError::Overflow(ctx)),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
