//! Transient quote values.
//!
//! Quotes are derived, never persisted: each one is recomputed from a
//! snapshot of pool state and discarded after use. Two quotes computed
//! against the same snapshot with the same inputs are identical.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, BasisPoints, Shares, Token};
use crate::error::{AmmError, Result};

/// The priced outcome of a prospective swap.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `price_impact <= 10_000` basis points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapQuote {
    token_in: Token,
    token_out: Token,
    amount_in: Amount,
    amount_out: Amount,
    price_impact: BasisPoints,
}

impl SwapQuote {
    /// Creates a validated `SwapQuote`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAmount`] if either amount is zero.
    pub const fn new(
        token_in: Token,
        token_out: Token,
        amount_in: Amount,
        amount_out: Amount,
        price_impact: BasisPoints,
    ) -> Result<Self> {
        if amount_in.is_zero() || amount_out.is_zero() {
            return Err(AmmError::InvalidAmount);
        }
        Ok(Self {
            token_in,
            token_out,
            amount_in,
            amount_out,
            price_impact,
        })
    }

    /// Returns the token being sold.
    #[must_use]
    pub const fn token_in(&self) -> Token {
        self.token_in
    }

    /// Returns the token being bought.
    #[must_use]
    pub const fn token_out(&self) -> Token {
        self.token_out
    }

    /// Returns the input amount.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the price impact of the trade's own size.
    #[must_use]
    pub const fn price_impact(&self) -> BasisPoints {
        self.price_impact
    }
}

impl fmt::Display for SwapQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapQuote(in={}, out={}, impact={})",
            self.amount_in, self.amount_out, self.price_impact
        )
    }
}

/// The outcome of a prospective liquidity deposit.
///
/// `amount_a` / `amount_b` are the amounts the pool would actually take
/// after ratio adjustment; `shares` is what the depositor would be minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepositQuote {
    amount_a: Amount,
    amount_b: Amount,
    shares: Shares,
}

impl DepositQuote {
    /// Creates a `DepositQuote`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAmount`] if either amount is zero, or
    /// [`AmmError::InsufficientLiquidity`] if no shares would be minted.
    pub const fn new(amount_a: Amount, amount_b: Amount, shares: Shares) -> Result<Self> {
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(AmmError::InvalidAmount);
        }
        if shares.is_zero() {
            return Err(AmmError::InsufficientLiquidity);
        }
        Ok(Self {
            amount_a,
            amount_b,
            shares,
        })
    }

    /// Returns the token-A amount the pool would take.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Returns the token-B amount the pool would take.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Returns the shares that would be minted.
    pub const fn shares(&self) -> Shares {
        self.shares
    }
}

/// The outcome of a prospective liquidity withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WithdrawQuote {
    amount_a: Amount,
    amount_b: Amount,
    shares: Shares,
}

impl WithdrawQuote {
    /// Creates a `WithdrawQuote`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAmount`] if `shares` is zero.
    pub const fn new(amount_a: Amount, amount_b: Amount, shares: Shares) -> Result<Self> {
        if shares.is_zero() {
            return Err(AmmError::InvalidAmount);
        }
        Ok(Self {
            amount_a,
            amount_b,
            shares,
        })
    }

    /// Returns the token-A amount that would be returned.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Returns the token-B amount that would be returned.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Returns the shares that would be burned.
    pub const fn shares(&self) -> Shares {
        self.shares
    }
}
