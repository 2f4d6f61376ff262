//! Ordered pair of distinct tokens.

use serde::{Deserialize, Serialize};

use super::Token;
use crate::error::{AmmError, Result};

/// Which of the pair's two reserves a token maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The first token of the pair (reserve A).
    A,
    /// The second token of the pair (reserve B).
    B,
}

impl Side {
    /// Returns the opposite side.
    #[must_use]
    pub const fn other(&self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// The two distinct tokens traded by one pool, in canonical order.
///
/// The pair is canonically ordered on construction:
/// `token_a() < token_b()` by identifier bytes. Ordering is immutable for
/// the lifetime of the pool, so "reserve A" and "reserve B" always refer
/// to the same tokens.
///
/// # Examples
///
/// ```
/// use cpamm::domain::{Token, TokenPair};
///
/// let x = Token::from_bytes([2u8; 32]);
/// let y = Token::from_bytes([1u8; 32]);
/// let pair = TokenPair::new(x, y).expect("distinct tokens");
/// assert_eq!(pair.token_a(), y); // canonical order
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenPair {
    token_a: Token,
    token_b: Token,
}

impl TokenPair {
    /// Creates a canonically ordered pair from two distinct tokens.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::UnknownToken`] if both tokens are identical —
    /// a pool cannot trade a token against itself.
    pub fn new(first: Token, second: Token) -> Result<Self> {
        if first == second {
            return Err(AmmError::UnknownToken);
        }
        let (token_a, token_b) = if first < second {
            (first, second)
        } else {
            (second, first)
        };
        Ok(Self { token_a, token_b })
    }

    /// Returns the first token of the canonical order.
    #[must_use]
    pub const fn token_a(&self) -> Token {
        self.token_a
    }

    /// Returns the second token of the canonical order.
    #[must_use]
    pub const fn token_b(&self) -> Token {
        self.token_b
    }

    /// Returns `true` if `token` is one of the pair.
    #[must_use]
    pub fn contains(&self, token: Token) -> bool {
        token == self.token_a || token == self.token_b
    }

    /// Resolves which reserve side `token` maps to.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::UnknownToken`] if `token` is not in the pair.
    pub fn side_of(&self, token: Token) -> Result<Side> {
        if token == self.token_a {
            Ok(Side::A)
        } else if token == self.token_b {
            Ok(Side::B)
        } else {
            Err(AmmError::UnknownToken)
        }
    }

    /// Returns the counterpart of `token` within the pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::UnknownToken`] if `token` is not in the pair.
    pub fn other(&self, token: Token) -> Result<Token> {
        match self.side_of(token)? {
            Side::A => Ok(self.token_b),
            Side::B => Ok(self.token_a),
        }
    }
}
