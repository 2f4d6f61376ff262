//! Fixed-point spot price.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::{AmmError, Result};
use crate::math;

/// A price ratio scaled by 10^18.
///
/// `Price` expresses units of the counterpart token per unit of the priced
/// token, as an exact fixed-point integer. It is always derived from
/// reserves at the moment of the query — never stored, never floating
/// point.
///
/// # Examples
///
/// ```
/// use cpamm::domain::{Amount, Price, Rounding};
///
/// // 2000 B per 1000 A = 2.0, i.e. 2 * 10^18 raw.
/// let price = Price::from_amounts(
///     Amount::from_whole(2_000),
///     Amount::from_whole(1_000),
///     Rounding::Down,
/// ).expect("non-zero denominator");
/// assert_eq!(price.get(), 2 * Price::WAD);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Price(u128);

impl Price {
    /// Raw units per 1.0 (10^18).
    pub const WAD: u128 = Amount::WAD;

    /// The unit price (1.0).
    pub const ONE: Self = Self(Self::WAD);

    /// Creates a `Price` from a raw 10^18-scaled ratio.
    pub const fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// Returns the underlying raw `u128` ratio.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Derives a price as `numerator / denominator`, scaled by 10^18.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPool`] if `denominator` is zero.
    /// - [`AmmError::Overflow`] if the scaled ratio exceeds `u128`.
    pub fn from_amounts(numerator: Amount, denominator: Amount, rounding: Rounding) -> Result<Self> {
        if denominator.is_zero() {
            return Err(AmmError::EmptyPool);
        }
        math::mul_div(numerator.get(), Self::WAD, denominator.get(), rounding).map(Self)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Raw ratio; decimal formatting belongs to the boundary layer.
        write!(f, "{}", self.0)
    }
}
