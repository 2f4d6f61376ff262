//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use cpamm::prelude::*;
//! ```

pub use crate::api::{display, Action, Dex, Quote, Receipt};
pub use crate::domain::{
    AccountId, Amount, BasisPoints, DepositQuote, Price, Rounding, Shares, Side, SwapQuote, Token,
    TokenPair, WithdrawQuote,
};
pub use crate::engine::{liquidity, oracle, swap};
pub use crate::error::{AmmError, Result};
pub use crate::gate::{InMemoryTokenLedger, TokenLedger, TransactionGate};
pub use crate::pool::{LiquidityPosition, PoolDelta, PositionBook, ReservePool};
