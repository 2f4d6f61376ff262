//! Per-principal liquidity positions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, Shares};
use crate::error::{AmmError, Result};

/// One principal's share of the pool.
///
/// Created on first deposit, removed when its shares reach zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiquidityPosition {
    owner: AccountId,
    shares: Shares,
}

impl LiquidityPosition {
    /// Creates a position record.
    #[must_use]
    pub const fn new(owner: AccountId, shares: Shares) -> Self {
        Self { owner, shares }
    }

    /// Returns the owning principal.
    #[must_use]
    pub const fn owner(&self) -> AccountId {
        self.owner
    }

    /// Returns the position's share balance.
    pub const fn shares(&self) -> Shares {
        self.shares
    }
}

/// All open positions for one pool.
///
/// # Accounting invariant
///
/// The sum of all positions' shares equals the pool's `total_shares` at
/// all times. The book never changes except in the same commit step as
/// the matching share-supply delta.
///
/// Mutations are two-phase: `stage_credit` / `stage_debit` compute the
/// new balance fallibly without touching the map, and `commit` applies a
/// staged balance infallibly. The one-shot `credit` / `debit` helpers
/// combine both for callers with no other fallible work in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionBook {
    positions: BTreeMap<AccountId, Shares>,
}

impl PositionBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of open positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if no positions are open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns `owner`'s share balance, zero if no position exists.
    pub fn shares_of(&self, owner: AccountId) -> Shares {
        self.positions.get(&owner).copied().unwrap_or(Shares::ZERO)
    }

    /// Returns `owner`'s position, if one is open.
    #[must_use]
    pub fn get(&self, owner: AccountId) -> Option<LiquidityPosition> {
        self.positions
            .get(&owner)
            .map(|shares| LiquidityPosition::new(owner, *shares))
    }

    /// Computes the balance `owner` would hold after a credit, without
    /// mutating the book.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the new balance exceeds `u128`.
    pub fn stage_credit(&self, owner: AccountId, shares: Shares) -> Result<Shares> {
        self.shares_of(owner).add_or(&shares, "position credit")
    }

    /// Computes the balance `owner` would hold after a debit, without
    /// mutating the book.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientShares`] if the debit exceeds the
    /// position.
    pub fn stage_debit(&self, owner: AccountId, shares: Shares) -> Result<Shares> {
        self.shares_of(owner)
            .checked_sub(&shares)
            .ok_or(AmmError::InsufficientShares)
    }

    /// Commits a staged balance. A zero balance removes the position.
    pub fn commit(&mut self, owner: AccountId, balance: Shares) {
        if balance.is_zero() {
            self.positions.remove(&owner);
        } else {
            self.positions.insert(owner, balance);
        }
    }

    /// Credits `owner` by `shares` in one step.
    ///
    /// # Errors
    ///
    /// Same contract as [`PositionBook::stage_credit`]; on error the book
    /// is unchanged.
    pub fn credit(&mut self, owner: AccountId, shares: Shares) -> Result<()> {
        let balance = self.stage_credit(owner, shares)?;
        self.commit(owner, balance);
        Ok(())
    }

    /// Debits `owner` by `shares` in one step, removing the position when
    /// it reaches zero.
    ///
    /// # Errors
    ///
    /// Same contract as [`PositionBook::stage_debit`]; on error the book
    /// is unchanged.
    pub fn debit(&mut self, owner: AccountId, shares: Shares) -> Result<()> {
        let balance = self.stage_debit(owner, shares)?;
        self.commit(owner, balance);
        Ok(())
    }

    /// Sums every open position's shares.
    ///
    /// Under the accounting invariant this equals the pool's total share
    /// supply; saturation can only occur if the invariant is already
    /// broken.
    pub fn total(&self) -> Shares {
        self.positions
            .values()
            .fold(Shares::ZERO, |acc, s| {
                Shares::new(acc.get().saturating_add(s.get()))
            })
    }

    /// Iterates over all open positions in owner order.
    pub fn iter(&self) -> impl Iterator<Item = LiquidityPosition> + '_ {
        self.positions
            .iter()
            .map(|(owner, shares)| LiquidityPosition::new(*owner, *shares))
    }
}
