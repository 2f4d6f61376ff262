//! Fundamental domain value types for the AMM core.
//!
//! Tokens, principals, amounts, shares, prices, and quotes. All types are
//! newtypes with validated constructors; arithmetic is checked and rounding
//! is always explicit.

mod account;
mod amount;
mod basis_points;
mod delta;
mod price;
mod quote;
mod rounding;
mod shares;
mod token;
mod token_pair;

pub use account::AccountId;
pub use amount::Amount;
pub use basis_points::BasisPoints;
pub use delta::{SignedAmount, SignedShares};
pub use price::Price;
pub use quote::{DepositQuote, SwapQuote, WithdrawQuote};
pub use rounding::Rounding;
pub use shares::Shares;
pub use token::Token;
pub use token_pair::{Side, TokenPair};
