//! 256-bit widening multiply-divide and integer square root.

use uint::construct_uint;

use crate::domain::Rounding;
use crate::error::AmmError;

construct_uint! {
    /// 256-bit unsigned integer for intermediate products.
    pub struct U256(4);
}

/// Computes `a * b / denom` with a 256-bit numerator.
///
/// The product `a * b` of two `u128` values always fits in 256 bits, so the
/// numerator never loses precision before the division. The quotient is
/// floored or ceiled per `rounding`.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denom` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit in `u128`.
pub fn mul_div(a: u128, b: u128, denom: u128, rounding: Rounding) -> crate::error::Result<u128> {
    if denom == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let numerator = U256::from(a) * U256::from(b);
    let denominator = U256::from(denom);
    let (quotient, remainder) = numerator.div_mod(denominator);
    let quotient = if rounding.is_up() && !remainder.is_zero() {
        // remainder != 0 implies quotient < numerator / 1, so +1 cannot
        // overflow U256.
        quotient + U256::one()
    } else {
        quotient
    };
    if quotient > U256::from(u128::MAX) {
        return Err(AmmError::Overflow("mul_div quotient exceeds u128"));
    }
    Ok(quotient.as_u128())
}

/// Floor integer square root of the 256-bit product `a * b`.
///
/// Used to seed the initial share supply: the root of a 256-bit value
/// always fits in `u128`, so the result is total.
#[must_use]
pub fn isqrt_product(a: u128, b: u128) -> u128 {
    let n = U256::from(a) * U256::from(b);
    if n.is_zero() {
        return 0;
    }
    // Newton's method; converges from above to floor(sqrt(n)).
    let mut x = n;
    let mut y = (x + U256::one()) >> 1;
    while y < x {
        x = y;
        y = (x + n / x) >> 1;
    }
    x.as_u128()
}
