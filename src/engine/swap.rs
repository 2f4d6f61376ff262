//! Constant-product swap pricing.
//!
//! The pool prices trades from its own reserves with `x · y = k`:
//!
//! ```text
//! amount_out = reserve_out × amount_in / (reserve_in + amount_in)
//! ```
//!
//! No protocol fee is levied. Outputs round down and required inputs
//! round up, so every rounding favors the pool: the reserve product never
//! decreases across a swap, and the output is strictly less than the
//! outgoing reserve — the pool can never be fully drained by trading.

use tracing::debug;

use crate::domain::{
    Amount, BasisPoints, Rounding, Side, SignedAmount, SignedShares, SwapQuote, Token,
};
use crate::error::{AmmError, Result};
use crate::math::U256;
use crate::pool::{PoolDelta, ReservePool};

/// Quotes the output of selling exactly `amount_in` of `token_in`.
///
/// Pure: the pool snapshot is only read, and identical inputs against the
/// same snapshot always produce an identical quote.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
/// - [`AmmError::UnknownToken`] if `token_in` is not in the pair.
/// - [`AmmError::EmptyPool`] if either reserve is zero.
/// - [`AmmError::InsufficientLiquidity`] if the output rounds to zero.
/// - [`AmmError::Overflow`] if `reserve_in + amount_in` exceeds `u128`.
pub fn quote_exact_input(
    pool: &ReservePool,
    token_in: Token,
    amount_in: Amount,
) -> Result<SwapQuote> {
    if amount_in.is_zero() {
        return Err(AmmError::InvalidAmount);
    }
    let (reserve_in, reserve_out) = pool.oriented_reserves(token_in)?;
    // Unreachable while the pool invariant holds; checked anyway so a
    // corrupted snapshot surfaces as an error instead of a bad price.
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::EmptyPool);
    }

    let denominator = reserve_in.add_or(&amount_in, "swap denominator")?;
    let amount_out = amount_in.mul_div(reserve_out, denominator, Rounding::Down)?;
    if amount_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    if amount_out >= reserve_out {
        // Mathematically impossible for the floored formula; guard the
        // drain-protection contract explicitly.
        return Err(AmmError::InsufficientLiquidity);
    }

    let impact = price_impact(reserve_in, reserve_out, amount_in, amount_out)?;
    let token_out = pool.pair().other(token_in)?;
    SwapQuote::new(token_in, token_out, amount_in, amount_out, impact)
}

/// Quotes the input required to buy exactly `amount_out` of the
/// counterpart token, rounding the requirement up.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `amount_out` is zero.
/// - [`AmmError::UnknownToken`] if `token_in` is not in the pair.
/// - [`AmmError::EmptyPool`] if either reserve is zero.
/// - [`AmmError::InsufficientLiquidity`] if `amount_out` meets or exceeds
///   the outgoing reserve.
pub fn quote_exact_output(
    pool: &ReservePool,
    token_in: Token,
    amount_out: Amount,
) -> Result<SwapQuote> {
    if amount_out.is_zero() {
        return Err(AmmError::InvalidAmount);
    }
    let (reserve_in, reserve_out) = pool.oriented_reserves(token_in)?;
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::EmptyPool);
    }
    if amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }

    let remaining = reserve_out.sub_or(&amount_out, "exact-out remainder")?;
    let amount_in = reserve_in.mul_div(amount_out, remaining, Rounding::Up)?;

    let impact = price_impact(reserve_in, reserve_out, amount_in, amount_out)?;
    let token_out = pool.pair().other(token_in)?;
    SwapQuote::new(token_in, token_out, amount_in, amount_out, impact)
}

/// Builds the reserve delta realizing `quote` against `pool`.
///
/// # Errors
///
/// Returns [`AmmError::UnknownToken`] if the quote's input token is not
/// in the pool's pair.
pub fn delta_for(pool: &ReservePool, quote: &SwapQuote) -> Result<PoolDelta> {
    let delta = match pool.pair().side_of(quote.token_in())? {
        Side::A => PoolDelta::new(
            SignedAmount::Credit(quote.amount_in()),
            SignedAmount::Debit(quote.amount_out()),
            SignedShares::Zero,
        ),
        Side::B => PoolDelta::new(
            SignedAmount::Debit(quote.amount_out()),
            SignedAmount::Credit(quote.amount_in()),
            SignedShares::Zero,
        ),
    };
    Ok(delta)
}

/// Executes an exact-input swap against the pool.
///
/// Recomputes the quote against the current state, then applies the full
/// reserve delta atomically. Share supply is untouched.
///
/// # Errors
///
/// Fails with whatever [`quote_exact_input`] or
/// [`ReservePool::apply_delta`] fails with; on error the pool is
/// unchanged.
pub fn apply_swap(pool: &mut ReservePool, token_in: Token, amount_in: Amount) -> Result<SwapQuote> {
    let quote = quote_exact_input(pool, token_in, amount_in)?;
    let delta = delta_for(pool, &quote)?;
    pool.apply_delta(&delta)?;
    debug!(
        token_in = %quote.token_in(),
        amount_in = %quote.amount_in(),
        amount_out = %quote.amount_out(),
        impact = %quote.price_impact(),
        "swap applied"
    );
    Ok(quote)
}

/// Price impact of the trade's own size, in basis points:
///
/// ```text
/// 10_000 − ⌊10_000 · (reserve_out − amount_out) · reserve_in
///           / (reserve_out · (reserve_in + amount_in))⌋
/// ```
///
/// Evaluated entirely in 256-bit integers; equals zero only for trades
/// too small to move the price a whole basis point.
fn price_impact(
    reserve_in: Amount,
    reserve_out: Amount,
    amount_in: Amount,
    amount_out: Amount,
) -> Result<BasisPoints> {
    let remaining_out = reserve_out.sub_or(&amount_out, "impact remainder")?;
    let retained = U256::from(remaining_out.get()) * U256::from(reserve_in.get());
    let denominator = U256::from(reserve_out.get())
        * (U256::from(reserve_in.get()) + U256::from(amount_in.get()));
    // retained <= denominator, so the result is at most 10_000.
    let lost = denominator - retained;
    let scaled = lost
        .checked_mul(U256::from(BasisPoints::DENOMINATOR))
        .ok_or(AmmError::Overflow("price impact numerator"))?;
    let bps = (scaled / denominator).as_u32();
    Ok(BasisPoints::new(bps))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::TokenPair;

    fn tok(byte: u8) -> Token {
        Token::from_bytes([byte; 32])
    }

    fn make_pool(a: u64, b: u64) -> ReservePool {
        let Ok(pair) = TokenPair::new(tok(1), tok(2)) else {
            panic!("expected valid pair");
        };
        let mut pool = ReservePool::new(pair);
        let Ok(_) = pool.initialize(Amount::from_whole(a), Amount::from_whole(b)) else {
            panic!("expected initialize to succeed");
        };
        pool
    }

    // -- quote_exact_input ----------------------------------------------------

    #[test]
    fn quote_matches_reference_scenario() {
        // 1000 A / 2000 B, sell 100 A:
        // out = floor(100e18 * 2000e18 / 1100e18) = 181818181818181818181
        let pool = make_pool(1_000, 2_000);
        let Ok(q) = quote_exact_input(&pool, tok(1), Amount::from_whole(100)) else {
            panic!("expected Ok");
        };
        assert_eq!(q.amount_out(), Amount::new(181_818_181_818_181_818_181));
        assert_eq!(q.token_out(), tok(2));
    }

    #[test]
    fn quote_reverse_direction() {
        let pool = make_pool(1_000, 2_000);
        let Ok(q) = quote_exact_input(&pool, tok(2), Amount::from_whole(200)) else {
            panic!("expected Ok");
        };
        // out = floor(200e18 * 1000e18 / 2200e18) = 90.909..e18
        assert_eq!(q.amount_out(), Amount::new(90_909_090_909_090_909_090));
        assert_eq!(q.token_out(), tok(1));
    }

    #[test]
    fn quote_zero_input_rejected() {
        let pool = make_pool(1_000, 2_000);
        assert_eq!(
            quote_exact_input(&pool, tok(1), Amount::ZERO),
            Err(AmmError::InvalidAmount)
        );
    }

    #[test]
    fn quote_unknown_token_rejected() {
        let pool = make_pool(1_000, 2_000);
        assert_eq!(
            quote_exact_input(&pool, tok(9), Amount::from_whole(1)),
            Err(AmmError::UnknownToken)
        );
    }

    #[test]
    fn quote_empty_pool_rejected() {
        let Ok(pair) = TokenPair::new(tok(1), tok(2)) else {
            panic!("expected valid pair");
        };
        let pool = ReservePool::new(pair);
        assert_eq!(
            quote_exact_input(&pool, tok(1), Amount::from_whole(1)),
            Err(AmmError::EmptyPool)
        );
    }

    #[test]
    fn quote_dust_input_rejected() {
        // 1 raw unit against deep reserves floors to zero output.
        let pool = make_pool(1_000_000, 1);
        assert_eq!(
            quote_exact_input(&pool, tok(1), Amount::new(1)),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn quote_output_strictly_below_reserve() {
        // Input vastly larger than the pool still cannot drain it.
        let pool = make_pool(10, 10);
        let Ok(q) = quote_exact_input(&pool, tok(1), Amount::from_whole(1_000_000)) else {
            panic!("expected Ok");
        };
        assert!(q.amount_out() < Amount::from_whole(10));
    }

    #[test]
    fn quote_is_idempotent() {
        let pool = make_pool(1_000, 2_000);
        let a = quote_exact_input(&pool, tok(1), Amount::from_whole(100));
        let b = quote_exact_input(&pool, tok(1), Amount::from_whole(100));
        assert_eq!(a, b);
    }

    // -- price impact ---------------------------------------------------------

    #[test]
    fn impact_grows_with_trade_size() {
        let pool = make_pool(1_000, 2_000);
        let Ok(small) = quote_exact_input(&pool, tok(1), Amount::from_whole(1)) else {
            panic!("expected Ok");
        };
        let Ok(large) = quote_exact_input(&pool, tok(1), Amount::from_whole(500)) else {
            panic!("expected Ok");
        };
        assert!(small.price_impact() < large.price_impact());
    }

    #[test]
    fn impact_of_reference_scenario() {
        // retained = (2000e18 - out) * 1000e18 / (2000e18 * 1100e18)
        //          = 1818181818181818181819 / 2200000... -> 8264 bps kept
        // impact   = 10000 - 8264 = 1736? floor arithmetic decides:
        // lost = den - ret; bps = floor(10000 * lost / den)
        let pool = make_pool(1_000, 2_000);
        let Ok(q) = quote_exact_input(&pool, tok(1), Amount::from_whole(100)) else {
            panic!("expected Ok");
        };
        // Exact check fixes the rounding direction once and for all.
        assert_eq!(q.price_impact(), BasisPoints::new(1735));
    }

    #[test]
    fn impact_bounded_by_whole() {
        let pool = make_pool(10, 10);
        let Ok(q) = quote_exact_input(&pool, tok(1), Amount::from_whole(1_000_000_000)) else {
            panic!("expected Ok");
        };
        assert!(q.price_impact() <= BasisPoints::ONE);
    }

    // -- quote_exact_output ---------------------------------------------------

    #[test]
    fn exact_output_rounds_input_up() {
        let pool = make_pool(1_000, 2_000);
        // Want exactly the scenario output; required input must not be
        // less than the 100 that produced it.
        let want = Amount::new(181_818_181_818_181_818_181);
        let Ok(q) = quote_exact_output(&pool, tok(1), want) else {
            panic!("expected Ok");
        };
        assert_eq!(q.amount_out(), want);
        assert!(q.amount_in() <= Amount::from_whole(100));
        // Round-trip consistency: that input buys at least `want`.
        let Ok(forward) = quote_exact_input(&pool, tok(1), q.amount_in()) else {
            panic!("expected Ok");
        };
        assert!(forward.amount_out() >= want);
    }

    #[test]
    fn exact_output_zero_rejected() {
        let pool = make_pool(1_000, 2_000);
        assert_eq!(
            quote_exact_output(&pool, tok(1), Amount::ZERO),
            Err(AmmError::InvalidAmount)
        );
    }

    #[test]
    fn exact_output_at_reserve_rejected() {
        let pool = make_pool(1_000, 2_000);
        assert_eq!(
            quote_exact_output(&pool, tok(1), Amount::from_whole(2_000)),
            Err(AmmError::InsufficientLiquidity)
        );
        assert_eq!(
            quote_exact_output(&pool, tok(1), Amount::from_whole(2_001)),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    // -- apply_swap -----------------------------------------------------------

    #[test]
    fn apply_swap_moves_reserves() {
        let mut pool = make_pool(1_000, 2_000);
        let Ok(q) = apply_swap(&mut pool, tok(1), Amount::from_whole(100)) else {
            panic!("expected Ok");
        };
        assert_eq!(pool.reserve_a(), Amount::from_whole(1_100));
        let Some(expected_b) = Amount::from_whole(2_000).checked_sub(&q.amount_out()) else {
            panic!("expected checked_sub to succeed");
        };
        assert_eq!(pool.reserve_b(), expected_b);
        assert_eq!(pool.total_shares(), make_pool(1_000, 2_000).total_shares());
    }

    #[test]
    fn apply_swap_product_never_decreases() {
        let mut pool = make_pool(1_000, 2_000);
        let k_before = U256::from(pool.reserve_a().get()) * U256::from(pool.reserve_b().get());
        let Ok(_) = apply_swap(&mut pool, tok(1), Amount::from_whole(123)) else {
            panic!("expected Ok");
        };
        let k_after = U256::from(pool.reserve_a().get()) * U256::from(pool.reserve_b().get());
        assert!(k_after >= k_before);
    }

    #[test]
    fn apply_swap_failure_leaves_pool() {
        let mut pool = make_pool(1_000, 2_000);
        let before = pool;
        let got = apply_swap(&mut pool, tok(9), Amount::from_whole(1));
        assert_eq!(got, Err(AmmError::UnknownToken));
        assert_eq!(pool, before);
    }

    #[test]
    fn delta_for_orients_by_side() {
        let pool = make_pool(1_000, 2_000);
        let Ok(q) = quote_exact_input(&pool, tok(2), Amount::from_whole(10)) else {
            panic!("expected Ok");
        };
        let Ok(delta) = delta_for(&pool, &q) else {
            panic!("expected Ok");
        };
        assert_eq!(delta.delta_b, SignedAmount::Credit(q.amount_in()));
        assert_eq!(delta.delta_a, SignedAmount::Debit(q.amount_out()));
        assert_eq!(delta.delta_shares, SignedShares::Zero);
    }
}
