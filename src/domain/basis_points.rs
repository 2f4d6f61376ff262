//! Basis-point fractions.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A fraction expressed in basis points (1 bp = 0.01%).
///
/// Used to report price impact: [`BasisPoints::DENOMINATOR`] (10 000)
/// represents 100%.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Basis points in a whole (100%).
    pub const DENOMINATOR: u32 = 10_000;

    /// Zero basis points.
    pub const ZERO: Self = Self(0);

    /// One whole (100%).
    pub const ONE: Self = Self(Self::DENOMINATOR);

    /// Creates a `BasisPoints` value.
    #[must_use]
    pub const fn new(bps: u32) -> Self {
        Self(bps)
    }

    /// Returns the raw basis-point count.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bps", self.0)
    }
}
