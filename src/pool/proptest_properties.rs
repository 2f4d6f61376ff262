//! Property-based tests using `proptest` for core AMM invariants.
//!
//! Covers the crate-wide guarantees:
//!
//! 1. **Output bounds** — every exact-input quote satisfies
//!    `0 < amount_out < reserve_out`.
//! 2. **No value creation** — the reserve product never decreases across
//!    any swap sequence.
//! 3. **Quote idempotence** — identical inputs against an unchanged pool
//!    produce identical quotes.
//! 4. **Deposit/withdraw round trip** — stranded dust is bounded by the
//!    flooring tolerance.
//! 5. **Share conservation** — the position book total always equals the
//!    pool's share supply.
//! 6. **Allowance atomicity** — a rejected execution changes nothing.

use proptest::prelude::*;

use crate::api::{Action, Dex};
use crate::domain::{AccountId, Amount, Shares, Token, TokenPair};
use crate::engine::{liquidity, swap};
use crate::error::AmmError;
use crate::gate::{InMemoryTokenLedger, TokenLedger};
use crate::math::U256;
use crate::pool::{PositionBook, ReservePool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn tok_a() -> Token {
    Token::from_bytes([1u8; 32])
}

fn tok_b() -> Token {
    Token::from_bytes([2u8; 32])
}

fn alice() -> AccountId {
    AccountId::from_bytes([0xaa; 32])
}

fn bob() -> AccountId {
    AccountId::from_bytes([0xbb; 32])
}

fn pool_account() -> AccountId {
    AccountId::from_bytes([0xdd; 32])
}

fn make_pair() -> TokenPair {
    let Ok(pair) = TokenPair::new(tok_a(), tok_b()) else {
        panic!("valid pair");
    };
    pair
}

fn make_pool(ra: u64, rb: u64) -> ReservePool {
    let mut pool = ReservePool::new(make_pair());
    let Ok(_) = pool.initialize(Amount::from_whole(ra), Amount::from_whole(rb)) else {
        panic!("valid reserves");
    };
    pool
}

fn product(pool: &ReservePool) -> U256 {
    U256::from(pool.reserve_a().get()) * U256::from(pool.reserve_b().get())
}

/// Whole-token reserves deep enough that whole-token inputs never floor
/// to a zero output.
fn reserve() -> impl Strategy<Value = u64> {
    1u64..=1_000_000_000
}

fn trade() -> impl Strategy<Value = u64> {
    1u64..=1_000_000_000
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn swap_output_strictly_bounded(
        ra in reserve(),
        rb in reserve(),
        input in trade(),
    ) {
        let pool = make_pool(ra, rb);
        let Ok(quote) = swap::quote_exact_input(&pool, tok_a(), Amount::from_whole(input)) else {
            return Err(TestCaseError::fail("quote unexpectedly failed"));
        };
        prop_assert!(quote.amount_out() > Amount::ZERO);
        prop_assert!(quote.amount_out() < pool.reserve_b());
    }

    #[test]
    fn reserve_product_never_decreases(
        ra in reserve(),
        rb in reserve(),
        trades in prop::collection::vec((any::<bool>(), trade()), 1..8),
    ) {
        let mut pool = make_pool(ra, rb);
        let mut k = product(&pool);
        for (a_to_b, input) in trades {
            let token_in = if a_to_b { tok_a() } else { tok_b() };
            let Ok(_) = swap::apply_swap(&mut pool, token_in, Amount::from_whole(input)) else {
                return Err(TestCaseError::fail("swap unexpectedly failed"));
            };
            let k_next = product(&pool);
            prop_assert!(k_next >= k);
            k = k_next;
        }
    }

    #[test]
    fn quotes_are_idempotent(
        ra in reserve(),
        rb in reserve(),
        input in trade(),
    ) {
        let pool = make_pool(ra, rb);
        let first = swap::quote_exact_input(&pool, tok_b(), Amount::from_whole(input));
        let second = swap::quote_exact_input(&pool, tok_b(), Amount::from_whole(input));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn deposit_withdraw_round_trip_bounded(
        ra in reserve(),
        rb in reserve(),
        da in trade(),
        db in trade(),
    ) {
        let mut pool = make_pool(ra, rb);
        let mut book = PositionBook::new();
        let Ok(()) = book.credit(alice(), pool.total_shares()) else {
            return Err(TestCaseError::fail("seed credit failed"));
        };
        let ra_before = pool.reserve_a().get();
        let rb_before = pool.reserve_b().get();

        let deposit = liquidity::apply_deposit(
            &mut pool,
            &mut book,
            bob(),
            Amount::from_whole(da),
            Amount::from_whole(db),
        );
        let Ok(deposit) = deposit else {
            // A deposit too lopsided to mint a share is legitimately
            // rejected; nothing must have changed.
            prop_assert_eq!(pool.reserve_a().get(), ra_before);
            prop_assert_eq!(pool.reserve_b().get(), rb_before);
            return Ok(());
        };
        let total_staked = pool.total_shares().get();
        let ra_staked = pool.reserve_a().get();
        let rb_staked = pool.reserve_b().get();
        let Ok(_) = liquidity::apply_withdraw(&mut pool, &mut book, bob(), deposit.shares())
        else {
            return Err(TestCaseError::fail("withdraw unexpectedly failed"));
        };

        // Strand per side is below reserve_side/total_shares + 1 (one
        // floor in the mint, one in the withdrawal division), measured
        // against the post-deposit state.
        let strand_a = pool.reserve_a().get() - ra_before;
        let strand_b = pool.reserve_b().get() - rb_before;
        prop_assert!(
            U256::from(strand_a) * U256::from(total_staked)
                <= U256::from(ra_staked) + U256::from(total_staked)
        );
        prop_assert!(
            U256::from(strand_b) * U256::from(total_staked)
                <= U256::from(rb_staked) + U256::from(total_staked)
        );
    }

    #[test]
    fn position_book_matches_share_supply(
        ra in reserve(),
        rb in reserve(),
        da in trade(),
        withdraw_div in 1u128..=4,
    ) {
        let mut pool = ReservePool::new(make_pair());
        let mut book = PositionBook::new();
        let Ok(_) = liquidity::apply_deposit(
            &mut pool,
            &mut book,
            alice(),
            Amount::from_whole(ra),
            Amount::from_whole(rb),
        ) else {
            return Err(TestCaseError::fail("seed deposit failed"));
        };
        prop_assert_eq!(book.total(), pool.total_shares());

        if liquidity::apply_deposit(
            &mut pool,
            &mut book,
            bob(),
            Amount::from_whole(da),
            Amount::from_whole(da),
        )
        .is_ok()
        {
            prop_assert_eq!(book.total(), pool.total_shares());
        }

        let burn = Shares::new(book.shares_of(alice()).get() / withdraw_div);
        if !burn.is_zero() {
            let Ok(_) = liquidity::apply_withdraw(&mut pool, &mut book, alice(), burn) else {
                return Err(TestCaseError::fail("withdraw unexpectedly failed"));
            };
        }
        prop_assert_eq!(book.total(), pool.total_shares());
    }

    #[test]
    fn rejected_execution_changes_nothing(
        ra in reserve(),
        rb in reserve(),
        input in trade(),
        approved_fraction in 0u64..=99,
    ) {
        let mut dex = Dex::new(make_pair(), pool_account(), InMemoryTokenLedger::new());
        for token in [tok_a(), tok_b()] {
            let Ok(()) = dex.ledger_mut().mint(token, alice(), Amount::MAX) else {
                return Err(TestCaseError::fail("mint failed"));
            };
            let Ok(()) = dex.ledger_mut().approve(token, alice(), pool_account(), Amount::MAX)
            else {
                return Err(TestCaseError::fail("approve failed"));
            };
        }
        let Ok(_) = dex.execute(
            Action::AddLiquidity {
                amount_a: Amount::from_whole(ra),
                amount_b: Amount::from_whole(rb),
            },
            alice(),
        ) else {
            return Err(TestCaseError::fail("seed deposit failed"));
        };

        // bob approves strictly less than the trade needs.
        let short = Amount::new(
            Amount::from_whole(input).get() / 100 * u128::from(approved_fraction),
        );
        let Ok(()) = dex.ledger_mut().approve(tok_a(), bob(), pool_account(), short) else {
            return Err(TestCaseError::fail("approve failed"));
        };

        let pool_before = *dex.pool();
        let positions_before = dex.positions().clone();
        let allowance_before = dex.ledger().allowance(tok_a(), bob(), pool_account());

        let got = dex.execute(
            Action::Swap { token_in: tok_a(), amount_in: Amount::from_whole(input) },
            bob(),
        );
        prop_assert_eq!(got, Err(AmmError::InsufficientAllowance));
        prop_assert_eq!(*dex.pool(), pool_before);
        prop_assert_eq!(dex.positions(), &positions_before);
        prop_assert_eq!(
            dex.ledger().allowance(tok_a(), bob(), pool_account()),
            allowance_before
        );
    }
}
