//! # cpamm
//!
//! Constant-product AMM core: reserve accounting, swap pricing, liquidity
//! shares, and allowance gating for one two-token pool.
//!
//! The crate is the deterministic heart of an automated market maker,
//! reconstructed as a standalone, testable library: no wallet plumbing,
//! no transaction submission, no UI state. Everything here is exact
//! 10^18-scaled integer arithmetic — intermediate products are widened to
//! 256 bits before division, and floating point appears nowhere.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  UI / CLI    │  decimal strings stop here (api::display)
//! └──────┬──────┘
//!        │ get_quote / execute / get_spot_price / get_position
//!        ▼
//! ┌─────────────┐
//! │   api::Dex   │  allowance gate + atomic stage-then-commit
//! └──────┬──────┘
//!        │ quote_* (pure) and stage/apply (atomic)
//!        ▼
//! ┌─────────────┐
//! │   engine     │  swap pricing, liquidity accounting, spot price
//! └──────┬──────┘
//!        │ PoolDelta (sole mutation primitive)
//!        ▼
//! ┌─────────────┐
//! │    pool      │  ReservePool + PositionBook invariants
//! └──────┬──────┘
//!        ▼
//! ┌─────────────┐
//! │ domain, math │  checked newtypes, 256-bit mul_div, isqrt
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`Token`](domain::Token), [`Price`](domain::Price), quotes |
//! | [`math`]   | 256-bit [`mul_div`](math::mul_div) and [`isqrt_product`](math::isqrt_product) |
//! | [`pool`]   | [`ReservePool`](pool::ReservePool) state, [`PoolDelta`](pool::PoolDelta) mutations, [`PositionBook`](pool::PositionBook) |
//! | [`engine`] | Pure quoting and atomic application of swaps and liquidity changes |
//! | [`gate`]   | [`TokenLedger`](gate::TokenLedger) seam and the approve-then-act [`TransactionGate`](gate::TransactionGate) |
//! | [`api`]    | [`Dex`](api::Dex) boundary facade and decimal-string conversion |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum with stable codes |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Quick Start
//!
//! ```rust
//! use cpamm::api::{Action, Dex, Quote};
//! use cpamm::domain::{AccountId, Amount, Token, TokenPair};
//! use cpamm::gate::{InMemoryTokenLedger, TokenLedger};
//!
//! let token_a = Token::from_bytes([1u8; 32]);
//! let token_b = Token::from_bytes([2u8; 32]);
//! let pair = TokenPair::new(token_a, token_b).expect("distinct tokens");
//!
//! let alice = AccountId::from_bytes([0xaa; 32]);
//! let pool_account = AccountId::from_bytes([0xdd; 32]);
//!
//! // Fund and approve against the (external) token ledger.
//! let mut ledger = InMemoryTokenLedger::new();
//! for token in [token_a, token_b] {
//!     ledger.mint(token, alice, Amount::from_whole(10_000)).expect("mint");
//!     ledger
//!         .approve(token, alice, pool_account, Amount::from_whole(10_000))
//!         .expect("approve");
//! }
//!
//! // Seed the pool, then swap.
//! let mut dex = Dex::new(pair, pool_account, ledger);
//! dex.execute(
//!     Action::AddLiquidity {
//!         amount_a: Amount::from_whole(1_000),
//!         amount_b: Amount::from_whole(2_000),
//!     },
//!     alice,
//! )
//! .expect("seed deposit");
//!
//! let receipt = dex
//!     .execute(
//!         Action::Swap { token_in: token_a, amount_in: Amount::from_whole(100) },
//!         alice,
//!     )
//!     .expect("swap");
//!
//! let Quote::Swap(quote) = receipt.settled() else { unreachable!() };
//! assert_eq!(quote.amount_out(), Amount::new(181_818_181_818_181_818_181));
//! ```
//!
//! # Concurrency Model
//!
//! Quotes are pure functions over a pool snapshot and may run in
//! parallel without contention. Mutations take `&mut` and apply one at a
//! time; each stages every new value before committing any of them, so a
//! failed precondition leaves reserves, shares, positions, and allowances
//! exactly as they were.

pub mod api;
pub mod domain;
pub mod engine;
pub mod error;
pub mod gate;
pub mod math;
pub mod pool;
pub mod prelude;
