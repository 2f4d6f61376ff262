//! Pool state: reserves, share supply, and liquidity positions.
//!
//! [`ReservePool`] owns the two reserves and the outstanding share supply;
//! it is mutated exclusively through [`PoolDelta`]s so that every change is
//! atomic and invariant-checked. [`PositionBook`] tracks per-principal
//! share balances whose sum always equals the pool's total.

mod position_book;
mod reserve_pool;

#[cfg(test)]
mod proptest_properties;

pub use position_book::{LiquidityPosition, PositionBook};
pub use reserve_pool::{PoolDelta, ReservePool};
