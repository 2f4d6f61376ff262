//! Swap demo: seed a pool, quote, approve, and execute.
//!
//! ```bash
//! cargo run --example swap
//! ```

use cpamm::api::display::{format_amount, format_price};
use cpamm::api::{Action, Dex, Quote};
use cpamm::domain::{AccountId, Amount, Token, TokenPair};
use cpamm::error::Result;
use cpamm::gate::{InMemoryTokenLedger, TokenLedger};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let token_a = Token::from_bytes([1u8; 32]);
    let token_b = Token::from_bytes([2u8; 32]);
    let pair = TokenPair::new(token_a, token_b)?;

    let alice = AccountId::from_bytes([0xaa; 32]);
    let pool_account = AccountId::from_bytes([0xdd; 32]);

    let mut dex = Dex::new(pair, pool_account, InMemoryTokenLedger::new());

    // Fund alice and grant the pool an allowance on both tokens.
    for token in [token_a, token_b] {
        dex.ledger_mut()
            .mint(token, alice, Amount::from_whole(10_000))?;
        dex.ledger_mut()
            .approve(token, alice, pool_account, Amount::from_whole(10_000))?;
    }

    // Seed 1000 A / 2000 B.
    dex.execute(
        Action::AddLiquidity {
            amount_a: Amount::from_whole(1_000),
            amount_b: Amount::from_whole(2_000),
        },
        alice,
    )?;
    println!(
        "pool seeded: {} A / {} B",
        format_amount(dex.pool().reserve_a()),
        format_amount(dex.pool().reserve_b()),
    );
    println!("spot price of A: {}", format_price(dex.get_spot_price(token_a)?));

    // Quote, then execute, 100 A -> B.
    let action = Action::Swap {
        token_in: token_a,
        amount_in: Amount::from_whole(100),
    };
    if let Quote::Swap(quote) = dex.get_quote(action, alice)? {
        println!(
            "quote: {} A -> {} B (impact {})",
            format_amount(quote.amount_in()),
            format_amount(quote.amount_out()),
            quote.price_impact(),
        );
    }

    let receipt = dex.execute(action, alice)?;
    if let Quote::Swap(quote) = receipt.settled() {
        println!(
            "swapped: received {} B",
            format_amount(quote.amount_out()),
        );
    }
    println!(
        "pool now: {} A / {} B, spot price of A: {}",
        format_amount(dex.pool().reserve_a()),
        format_amount(dex.pool().reserve_b()),
        format_price(dex.get_spot_price(token_a)?),
    );
    Ok(())
}
