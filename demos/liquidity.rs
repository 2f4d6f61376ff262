//! Liquidity demo: two providers deposit, trade fees-free, and withdraw.
//!
//! ```bash
//! cargo run --example liquidity
//! ```

use cpamm::api::display::format_amount;
use cpamm::api::{Action, Dex, Quote};
use cpamm::domain::{AccountId, Amount, Token, TokenPair};
use cpamm::error::Result;
use cpamm::gate::{InMemoryTokenLedger, TokenLedger};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let token_a = Token::from_bytes([1u8; 32]);
    let token_b = Token::from_bytes([2u8; 32]);
    let pair = TokenPair::new(token_a, token_b)?;

    let alice = AccountId::from_bytes([0xaa; 32]);
    let bob = AccountId::from_bytes([0xbb; 32]);
    let pool_account = AccountId::from_bytes([0xdd; 32]);

    let mut dex = Dex::new(pair, pool_account, InMemoryTokenLedger::new());
    for (principal, whole) in [(alice, 10_000u64), (bob, 1_000)] {
        for token in [token_a, token_b] {
            dex.ledger_mut()
                .mint(token, principal, Amount::from_whole(whole))?;
            dex.ledger_mut()
                .approve(token, principal, pool_account, Amount::from_whole(whole))?;
        }
    }

    // Alice seeds the pool; the first deposit sets the price.
    dex.execute(
        Action::AddLiquidity {
            amount_a: Amount::from_whole(1_000),
            amount_b: Amount::from_whole(2_000),
        },
        alice,
    )?;

    // Bob offers 500 B alongside 100 A; the pool scales B down to the
    // 1:2 reserve ratio instead of letting him donate the excess.
    let receipt = dex.execute(
        Action::AddLiquidity {
            amount_a: Amount::from_whole(100),
            amount_b: Amount::from_whole(500),
        },
        bob,
    )?;
    let Quote::Deposit(deposit) = *receipt.settled() else {
        unreachable!("deposit action settles a deposit quote");
    };
    println!(
        "bob deposited {} A + {} B for {} shares",
        format_amount(deposit.amount_a()),
        format_amount(deposit.amount_b()),
        deposit.shares(),
    );

    // Bob exits entirely.
    let receipt = dex.execute(
        Action::RemoveLiquidity {
            shares: deposit.shares(),
        },
        bob,
    )?;
    if let Quote::Withdraw(withdraw) = receipt.settled() {
        println!(
            "bob withdrew {} A + {} B",
            format_amount(withdraw.amount_a()),
            format_amount(withdraw.amount_b()),
        );
    }
    println!(
        "pool back to {} A / {} B with {} open position(s)",
        format_amount(dex.pool().reserve_a()),
        format_amount(dex.pool().reserve_b()),
        dex.positions().len(),
    );
    Ok(())
}
