//! Spot price derivation.
//!
//! The pool's spot price is a pure function of its current reserves.
//! Nothing is stored or cached — every call recomputes the ratio from
//! the snapshot it is given.

use crate::domain::{Price, Rounding, Token};
use crate::error::{AmmError, Result};
use crate::pool::ReservePool;

/// Returns the spot price of `of_token`, in units of the counterpart
/// token per unit of `of_token`, scaled by 10^18.
///
/// ```text
/// price(of) = reserve_other / reserve_of
/// ```
///
/// # Errors
///
/// - [`AmmError::UnknownToken`] if `of_token` is not in the pool's pair.
/// - [`AmmError::EmptyPool`] if the denominator reserve is zero.
pub fn spot_price(pool: &ReservePool, of_token: Token) -> Result<Price> {
    let side = pool.pair().side_of(of_token)?;
    let reserve_of = pool.reserve(side);
    let reserve_other = pool.reserve(side.other());
    if reserve_of.is_zero() {
        return Err(AmmError::EmptyPool);
    }
    Price::from_amounts(reserve_other, reserve_of, Rounding::Down)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{Amount, TokenPair};

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

    #[test]
    fn price_of_a_in_b() {
        let pool = make_pool(1_000, 2_000);
        // 2000 B / 1000 A = 2.0
        assert_eq!(spot_price(&pool, tok(1)), Ok(Price::new(2 * Price::WAD)));
    }

    #[test]
    fn price_of_b_in_a() {
        let pool = make_pool(1_000, 2_000);
        // 1000 A / 2000 B = 0.5
        assert_eq!(spot_price(&pool, tok(2)), Ok(Price::new(Price::WAD / 2)));
    }

    #[test]
    fn prices_are_reciprocal_for_whole_ratios() {
        let pool = make_pool(500, 2_000);
        assert_eq!(spot_price(&pool, tok(1)), Ok(Price::new(4 * Price::WAD)));
        assert_eq!(spot_price(&pool, tok(2)), Ok(Price::new(Price::WAD / 4)));
    }

    #[test]
    fn unknown_token_rejected() {
        let pool = make_pool(1_000, 2_000);
        assert_eq!(spot_price(&pool, tok(9)), Err(AmmError::UnknownToken));
    }

    #[test]
    fn empty_pool_rejected() {
        let Ok(pair) = TokenPair::new(tok(1), tok(2)) else {
            panic!("expected valid pair");
        };
        let pool = ReservePool::new(pair);
        assert_eq!(spot_price(&pool, tok(1)), Err(AmmError::EmptyPool));
    }

    #[test]
    fn price_moves_against_the_bought_token() {
        let mut pool = make_pool(1_000, 2_000);
        let Ok(before) = spot_price(&pool, tok(1)) else {
            panic!("expected Ok");
        };
        // Sell A for B: more A, less B -> price of A (in B) drops.
        let Ok(_) = crate::engine::swap::apply_swap(&mut pool, tok(1), Amount::from_whole(100))
        else {
            panic!("expected Ok");
        };
        let Ok(after) = spot_price(&pool, tok(1)) else {
            panic!("expected Ok");
        };
        assert!(after < before);
    }
}
