//! In-memory reference implementation of the token ledger.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::TokenLedger;
use crate::domain::{AccountId, Amount, Token};
use crate::error::{AmmError, Result};

/// Mintable ERC20-style balances and allowances held in memory.
///
/// The reference collaborator for tests and demos. Real deployments
/// substitute the settlement layer's own [`TokenLedger`] implementation;
/// the core is indifferent to which one it talks to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InMemoryTokenLedger {
    balances: BTreeMap<(Token, AccountId), Amount>,
    allowances: BTreeMap<(Token, AccountId, AccountId), Amount>,
    supply: BTreeMap<Token, Amount>,
}

impl InMemoryTokenLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total minted supply of `token`.
    pub fn total_supply(&self, token: Token) -> Amount {
        self.supply.get(&token).copied().unwrap_or(Amount::ZERO)
    }
}

impl TokenLedger for InMemoryTokenLedger {
    fn balance_of(&self, token: Token, owner: AccountId) -> Amount {
        self.balances
            .get(&(token, owner))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn allowance(&self, token: Token, owner: AccountId, spender: AccountId) -> Amount {
        self.allowances
            .get(&(token, owner, spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn approve(
        &mut self,
        token: Token,
        owner: AccountId,
        spender: AccountId,
        amount: Amount,
    ) -> Result<()> {
        // ERC20 semantics: approve overwrites, it does not accumulate.
        if amount.is_zero() {
            self.allowances.remove(&(token, owner, spender));
        } else {
            self.allowances.insert((token, owner, spender), amount);
        }
        Ok(())
    }

    fn debit_allowance(
        &mut self,
        token: Token,
        owner: AccountId,
        spender: AccountId,
        amount: Amount,
    ) -> Result<()> {
        let key = (token, owner, spender);
        let remaining = self.allowances.get(&key).copied().unwrap_or(Amount::ZERO);
        let left = remaining
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientAllowance)?;
        if left.is_zero() {
            self.allowances.remove(&key);
        } else {
            self.allowances.insert(key, left);
        }
        Ok(())
    }

    fn mint(&mut self, token: Token, to: AccountId, amount: Amount) -> Result<()> {
        let balance = self
            .balance_of(token, to)
            .add_or(&amount, "mint balance")?;
        let supply = self
            .total_supply(token)
            .add_or(&amount, "mint supply")?;
        self.balances.insert((token, to), balance);
        self.supply.insert(token, supply);
        Ok(())
    }
}
