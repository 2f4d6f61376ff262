//! Boundary facade exposed to UI/CLI layers.
//!
//! [`Dex`] binds one [`ReservePool`] to its position book, its allowance
//! gate, and the external token ledger, and exposes the four boundary
//! calls: quote, execute, spot price, and position lookup. All amounts
//! cross this boundary as exact 10^18-scaled integers; decimal strings
//! exist only in the [`display`] helpers.
//!
//! # Atomicity
//!
//! `execute` performs every fallible step — quoting, allowance checks,
//! staging the pool candidate, staging the position balance — before it
//! mutates anything, then commits allowances, pool, and positions
//! together. A failed precondition therefore leaves all four record sets
//! exactly as they were.

pub mod display;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    AccountId, Amount, DepositQuote, Price, Shares, SwapQuote, Token, TokenPair, WithdrawQuote,
};
use crate::engine::{liquidity, oracle, swap};
use crate::error::Result;
use crate::gate::{TokenLedger, TransactionGate};
use crate::pool::{LiquidityPosition, PositionBook, ReservePool};

/// A request against the pool, threaded with the requesting principal at
/// execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Sell exactly `amount_in` of `token_in` for the counterpart token.
    Swap {
        /// Token being sold.
        token_in: Token,
        /// Exact input amount.
        amount_in: Amount,
    },
    /// Deposit up to the given amounts as liquidity.
    AddLiquidity {
        /// Desired token-A contribution.
        amount_a: Amount,
        /// Desired token-B contribution.
        amount_b: Amount,
    },
    /// Burn `shares` of the caller's position for both reserves.
    RemoveLiquidity {
        /// Shares to burn.
        shares: Shares,
    },
}

/// The priced outcome of an [`Action`], before or after execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quote {
    /// Outcome of a swap.
    Swap(SwapQuote),
    /// Outcome of a liquidity deposit.
    Deposit(DepositQuote),
    /// Outcome of a liquidity withdrawal.
    Withdraw(WithdrawQuote),
}

/// Proof of an executed action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    principal: AccountId,
    settled: Quote,
}

impl Receipt {
    /// Returns the principal the action was executed for.
    #[must_use]
    pub const fn principal(&self) -> AccountId {
        self.principal
    }

    /// Returns the realized quote.
    #[must_use]
    pub const fn settled(&self) -> &Quote {
        &self.settled
    }
}

/// The AMM facade: one pool, its positions, its gate, and the token
/// ledger it reads allowances from.
///
/// Mutating calls take `&mut self`, so Rust's ownership rules enforce the
/// serializing-authority model: no two mutations on the same pool can
/// interleave, while any number of concurrent readers may quote against a
/// shared snapshot.
#[derive(Debug, Clone)]
pub struct Dex<L> {
    pool: ReservePool,
    positions: PositionBook,
    gate: TransactionGate,
    ledger: L,
}

impl<L: TokenLedger> Dex<L> {
    /// Creates a facade for `pair`, acting as spender `pool_account`
    /// against `ledger`.
    #[must_use]
    pub fn new(pair: TokenPair, pool_account: AccountId, ledger: L) -> Self {
        Self {
            pool: ReservePool::new(pair),
            positions: PositionBook::new(),
            gate: TransactionGate::new(pool_account),
            ledger,
        }
    }

    /// Returns the pool snapshot.
    #[must_use]
    pub const fn pool(&self) -> &ReservePool {
        &self.pool
    }

    /// Returns the position book.
    #[must_use]
    pub const fn positions(&self) -> &PositionBook {
        &self.positions
    }

    /// Returns the allowance gate.
    #[must_use]
    pub const fn gate(&self) -> &TransactionGate {
        &self.gate
    }

    /// Returns the token ledger.
    #[must_use]
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Returns the token ledger mutably (minting, approvals).
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// Prices `action` against the current pool snapshot without touching
    /// any state.
    ///
    /// # Errors
    ///
    /// Propagates the underlying quote failure; see
    /// [`swap::quote_exact_input`], [`liquidity::quote_deposit`], and
    /// [`liquidity::quote_withdraw`]. Quotes for `RemoveLiquidity` are
    /// principal-free and price the burn against the total supply; the
    /// position bound is enforced at execution time.
    pub fn get_quote(&self, action: Action, principal: AccountId) -> Result<Quote> {
        match action {
            Action::Swap {
                token_in,
                amount_in,
            } => swap::quote_exact_input(&self.pool, token_in, amount_in).map(Quote::Swap),
            Action::AddLiquidity { amount_a, amount_b } => {
                liquidity::quote_deposit(&self.pool, amount_a, amount_b).map(Quote::Deposit)
            }
            Action::RemoveLiquidity { shares } => {
                liquidity::quote_withdraw(&self.pool, &self.positions, principal, shares)
                    .map(Quote::Withdraw)
            }
        }
    }

    /// Executes `action` on behalf of `principal`.
    ///
    /// # Errors
    ///
    /// Propagates quote and staging failures, plus
    /// [`AmmError::InsufficientAllowance`](crate::error::AmmError::InsufficientAllowance)
    /// when the approve-then-act protocol was not honored. On any error,
    /// reserves, shares, positions, and allowances are all unchanged.
    pub fn execute(&mut self, action: Action, principal: AccountId) -> Result<Receipt> {
        let settled = match action {
            Action::Swap {
                token_in,
                amount_in,
            } => {
                let quote = swap::quote_exact_input(&self.pool, token_in, amount_in)?;
                self.gate
                    .check(&self.ledger, token_in, principal, amount_in)?;
                let delta = swap::delta_for(&self.pool, &quote)?;
                let staged = self.pool.with_delta(&delta)?;
                // All fallible work done; consume and commit together.
                self.gate
                    .consume(&mut self.ledger, token_in, principal, amount_in)?;
                self.pool = staged;
                Quote::Swap(quote)
            }
            Action::AddLiquidity { amount_a, amount_b } => {
                let quote = liquidity::quote_deposit(&self.pool, amount_a, amount_b)?;
                let pair = *self.pool.pair();
                self.gate
                    .check(&self.ledger, pair.token_a(), principal, quote.amount_a())?;
                self.gate
                    .check(&self.ledger, pair.token_b(), principal, quote.amount_b())?;
                let (staged_pool, staged_balance) =
                    liquidity::stage_deposit(&self.pool, &self.positions, principal, &quote)?;
                self.gate.consume(
                    &mut self.ledger,
                    pair.token_a(),
                    principal,
                    quote.amount_a(),
                )?;
                self.gate.consume(
                    &mut self.ledger,
                    pair.token_b(),
                    principal,
                    quote.amount_b(),
                )?;
                self.pool = staged_pool;
                self.positions.commit(principal, staged_balance);
                Quote::Deposit(quote)
            }
            Action::RemoveLiquidity { shares } => {
                // Burning the caller's own shares needs no allowance.
                let quote =
                    liquidity::quote_withdraw(&self.pool, &self.positions, principal, shares)?;
                let (staged_pool, staged_balance) =
                    liquidity::stage_withdraw(&self.pool, &self.positions, principal, &quote)?;
                self.pool = staged_pool;
                self.positions.commit(principal, staged_balance);
                Quote::Withdraw(quote)
            }
        };
        debug!(principal = %principal, ?settled, "action executed");
        Ok(Receipt { principal, settled })
    }

    /// Returns the spot price of `token` from current reserves.
    ///
    /// # Errors
    ///
    /// See [`oracle::spot_price`].
    pub fn get_spot_price(&self, token: Token) -> Result<Price> {
        oracle::spot_price(&self.pool, token)
    }

    /// Returns `principal`'s open position, if any.
    #[must_use]
    pub fn get_position(&self, principal: AccountId) -> Option<LiquidityPosition> {
        self.positions.get(principal)
    }
}
