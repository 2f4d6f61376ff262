//! Reserve state for one trading pair.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, Shares, Side, SignedAmount, SignedShares, Token, TokenPair};
use crate::error::{AmmError, Result};
use crate::math;

/// An atomic adjustment to both reserves and the share supply.
///
/// Deltas are computed by the swap and liquidity engines and applied
/// through [`ReservePool::apply_delta`], the pool's sole mutation
/// primitive. A delta either applies in full or not at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolDelta {
    /// Change to reserve A.
    pub delta_a: SignedAmount,
    /// Change to reserve B.
    pub delta_b: SignedAmount,
    /// Change to the total share supply.
    pub delta_shares: SignedShares,
}

impl PoolDelta {
    /// Creates a delta from its three components.
    #[must_use]
    pub const fn new(
        delta_a: SignedAmount,
        delta_b: SignedAmount,
        delta_shares: SignedShares,
    ) -> Self {
        Self {
            delta_a,
            delta_b,
            delta_shares,
        }
    }
}

/// The reserves and share supply of one two-token pool.
///
/// # Invariant
///
/// Both reserves are positive whenever `total_shares > 0`. The pool has
/// `total_shares == 0` only in its uninitialized state (before the first
/// deposit, or after the entire share supply has been withdrawn).
///
/// # Mutation
///
/// State changes only through [`ReservePool::initialize`] and
/// [`ReservePool::apply_delta`]. Both compute every new value before
/// committing any of them, so a failed call leaves the pool untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservePool {
    pair: TokenPair,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
}

impl ReservePool {
    /// Creates an empty, uninitialized pool for `pair`.
    #[must_use]
    pub const fn new(pair: TokenPair) -> Self {
        Self {
            pair,
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            total_shares: Shares::ZERO,
        }
    }

    /// Returns the pool's token pair.
    #[must_use]
    pub const fn pair(&self) -> &TokenPair {
        &self.pair
    }

    /// Returns the current reserve of token A.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the current reserve of token B.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the outstanding share supply.
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Returns `true` once the pool holds share supply.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        !self.total_shares.is_zero()
    }

    /// Returns the reserve on the given side.
    pub const fn reserve(&self, side: Side) -> Amount {
        match side {
            Side::A => self.reserve_a,
            Side::B => self.reserve_b,
        }
    }

    /// Resolves `token_in` to `(reserve_in, reserve_out)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::UnknownToken`] if `token_in` is not in the pair.
    pub fn oriented_reserves(&self, token_in: Token) -> Result<(Amount, Amount)> {
        let side = self.pair.side_of(token_in)?;
        Ok((self.reserve(side), self.reserve(side.other())))
    }

    /// Seeds the pool with its first reserves and mints the initial share
    /// supply `isqrt(amount_a * amount_b)`.
    ///
    /// Returns the minted shares for the caller to credit.
    ///
    /// # Errors
    ///
    /// - [`AmmError::AlreadyInitialized`] if the pool has share supply.
    /// - [`AmmError::InvalidAmount`] if either amount is zero.
    pub fn initialize(&mut self, amount_a: Amount, amount_b: Amount) -> Result<Shares> {
        if self.is_initialized() {
            return Err(AmmError::AlreadyInitialized);
        }
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(AmmError::InvalidAmount);
        }
        // Both amounts are >= 1, so the root is >= 1 and the invariant
        // (positive reserves under positive supply) holds immediately.
        let minted = Shares::new(math::isqrt_product(amount_a.get(), amount_b.get()));
        self.reserve_a = amount_a;
        self.reserve_b = amount_b;
        self.total_shares = minted;
        Ok(minted)
    }

    /// Returns the pool state that applying `delta` would produce,
    /// without mutating `self`.
    ///
    /// This is the staging half of every mutation: callers stage a
    /// candidate, perform any other fallible work, then commit the
    /// candidate by assignment.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Underflow`] / [`AmmError::Overflow`] if any component
    ///   leaves the `u128` range.
    /// - [`AmmError::EmptyPool`] if the result would have positive share
    ///   supply over a zero reserve.
    pub fn with_delta(&self, delta: &PoolDelta) -> Result<Self> {
        let reserve_a = delta.delta_a.apply_to(self.reserve_a, "reserve A delta")?;
        let reserve_b = delta.delta_b.apply_to(self.reserve_b, "reserve B delta")?;
        let total_shares = delta
            .delta_shares
            .apply_to(self.total_shares, "share supply delta")?;
        if !total_shares.is_zero() && (reserve_a.is_zero() || reserve_b.is_zero()) {
            return Err(AmmError::EmptyPool);
        }
        Ok(Self {
            pair: self.pair,
            reserve_a,
            reserve_b,
            total_shares,
        })
    }

    /// Atomically applies `delta` to reserves and share supply.
    ///
    /// # Errors
    ///
    /// Same contract as [`ReservePool::with_delta`]; on error the pool is
    /// unchanged.
    pub fn apply_delta(&mut self, delta: &PoolDelta) -> Result<()> {
        *self = self.with_delta(delta)?;
        Ok(())
    }
}
