//! Allowance gating for reserve-mutating operations.
//!
//! Every operation that pulls tokens from a principal (swap input,
//! liquidity deposit) follows a two-phase protocol: the principal first
//! grants the pool an allowance on the token contract, then the mutating
//! call verifies and consumes that allowance at execution time. The
//! authoritative check lives here, against the external allowance ledger
//! — never in transient client state.

mod memory;

pub use memory::InMemoryTokenLedger;

use crate::domain::{AccountId, Amount, Token};
use crate::error::{AmmError, Result};

/// The external token contracts, as seen by the core.
///
/// Balances and allowances are owned by the token contracts; the core
/// only reads them and decrements allowances it has verified. Each method
/// models one atomic external call with a typed success/failure outcome —
/// the core never retries.
pub trait TokenLedger {
    /// Returns `owner`'s balance of `token`.
    fn balance_of(&self, token: Token, owner: AccountId) -> Amount;

    /// Returns the remaining allowance `owner` has granted `spender`.
    fn allowance(&self, token: Token, owner: AccountId, spender: AccountId) -> Amount;

    /// Sets the allowance `owner` grants `spender`, replacing any
    /// previous value.
    fn approve(
        &mut self,
        token: Token,
        owner: AccountId,
        spender: AccountId,
        amount: Amount,
    ) -> Result<()>;

    /// Decrements `owner`'s allowance to `spender` by `amount`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientAllowance`] if the remaining
    /// allowance does not cover `amount`; the record is then unchanged.
    fn debit_allowance(
        &mut self,
        token: Token,
        owner: AccountId,
        spender: AccountId,
        amount: Amount,
    ) -> Result<()>;

    /// Increases `to`'s balance of `token` by `amount` (supply increase).
    fn mint(&mut self, token: Token, to: AccountId, amount: Amount) -> Result<()>;
}

/// Precondition gate for the approve-then-act protocol.
///
/// The gate is parameterized by the pool's own spender identity. `check`
/// is a pure read used while staging an operation; `consume` performs the
/// decrement and belongs to the operation's commit step, after every
/// other fallible computation has succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionGate {
    spender: AccountId,
}

impl TransactionGate {
    /// Creates a gate acting on behalf of `spender` (the pool).
    #[must_use]
    pub const fn new(spender: AccountId) -> Self {
        Self { spender }
    }

    /// Returns the gate's spender identity.
    #[must_use]
    pub const fn spender(&self) -> AccountId {
        self.spender
    }

    /// Verifies that `owner` has granted the pool an allowance covering
    /// `required`, without consuming anything.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientAllowance`] if not covered.
    pub fn check<L: TokenLedger + ?Sized>(
        &self,
        ledger: &L,
        token: Token,
        owner: AccountId,
        required: Amount,
    ) -> Result<()> {
        if ledger.allowance(token, owner, self.spender) < required {
            return Err(AmmError::InsufficientAllowance);
        }
        Ok(())
    }

    /// Consumes `amount` of `owner`'s allowance as part of an operation's
    /// commit step.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientAllowance`] if the ledger rejects
    /// the decrement.
    pub fn consume<L: TokenLedger + ?Sized>(
        &self,
        ledger: &mut L,
        token: Token,
        owner: AccountId,
        amount: Amount,
    ) -> Result<()> {
        ledger.debit_allowance(token, owner, self.spender, amount)
    }
}
