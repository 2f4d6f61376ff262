//! Liquidity provisioning and withdrawal accounting.
//!
//! Deposits after the first must preserve the reserve ratio — an
//! unbalanced deposit would donate value to (or extract value from)
//! existing holders. The caller supplies both desired amounts; the side
//! implying the smaller contribution governs, and the other amount is
//! scaled down to the ratio:
//!
//! ```text
//! shares   = ⌊total_shares × amount_gov / reserve_gov⌋
//! other    = ⌊amount_gov × reserve_other / reserve_gov⌋
//! ```
//!
//! Withdrawals return the proportional share of both reserves, rounding
//! down, and burn the position's shares.

use tracing::debug;

use crate::domain::{
    AccountId, Amount, DepositQuote, Rounding, Shares, SignedAmount, SignedShares, WithdrawQuote,
};
use crate::error::{AmmError, Result};
use crate::pool::{PoolDelta, PositionBook, ReservePool};

/// Quotes a deposit of up to `amount_a` and `amount_b`.
///
/// For an uninitialized pool both amounts are taken as-is and the minted
/// shares are `isqrt(amount_a * amount_b)` — the first deposit sets the
/// price. Otherwise the deposit is reduced to the pool ratio as described
/// in the module docs.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if either amount is zero.
/// - [`AmmError::InsufficientLiquidity`] if the deposit is too small to
///   mint a share (or the ratio-adjusted counterpart rounds to zero).
/// - [`AmmError::Overflow`] on arithmetic overflow.
pub fn quote_deposit(
    pool: &ReservePool,
    amount_a: Amount,
    amount_b: Amount,
) -> Result<DepositQuote> {
    if amount_a.is_zero() || amount_b.is_zero() {
        return Err(AmmError::InvalidAmount);
    }
    if !pool.is_initialized() {
        let minted = Shares::new(crate::math::isqrt_product(amount_a.get(), amount_b.get()));
        return DepositQuote::new(amount_a, amount_b, minted);
    }

    let reserve_a = pool.reserve_a();
    let reserve_b = pool.reserve_b();
    let total = Amount::new(pool.total_shares().get());

    // Which side implies the smaller contribution governs the deposit.
    let implied_b = amount_a.mul_div(reserve_b, reserve_a, Rounding::Down)?;
    let (take_a, take_b, governing, reserve_gov) = if implied_b <= amount_b {
        (amount_a, implied_b, amount_a, reserve_a)
    } else {
        let implied_a = amount_b.mul_div(reserve_a, reserve_b, Rounding::Down)?;
        (implied_a, amount_b, amount_b, reserve_b)
    };

    let minted = Shares::new(
        governing
            .mul_div(total, reserve_gov, Rounding::Down)?
            .get(),
    );
    DepositQuote::new(take_a, take_b, minted)
}

/// Computes the pool state and owner balance a deposit would commit,
/// without mutating anything.
///
/// The staging half of [`apply_deposit`], exposed so callers with
/// additional fallible work (allowance consumption) can finish all of it
/// before committing.
///
/// # Errors
///
/// Propagates staging failures from the pool or position book.
pub fn stage_deposit(
    pool: &ReservePool,
    positions: &PositionBook,
    owner: AccountId,
    quote: &DepositQuote,
) -> Result<(ReservePool, Shares)> {
    let staged_pool = if pool.is_initialized() {
        pool.with_delta(&PoolDelta::new(
            SignedAmount::Credit(quote.amount_a()),
            SignedAmount::Credit(quote.amount_b()),
            SignedShares::Mint(quote.shares()),
        ))?
    } else {
        let mut seeded = *pool;
        seeded.initialize(quote.amount_a(), quote.amount_b())?;
        seeded
    };
    let staged_balance = positions.stage_credit(owner, quote.shares())?;
    Ok((staged_pool, staged_balance))
}

/// Applies a deposit: credits reserves, mints shares, and credits the
/// owner's position in one atomic step.
///
/// # Errors
///
/// Fails with whatever [`quote_deposit`] or [`stage_deposit`] fails with;
/// on error pool and positions are unchanged.
pub fn apply_deposit(
    pool: &mut ReservePool,
    positions: &mut PositionBook,
    owner: AccountId,
    amount_a: Amount,
    amount_b: Amount,
) -> Result<DepositQuote> {
    let quote = quote_deposit(pool, amount_a, amount_b)?;
    let (staged_pool, staged_balance) = stage_deposit(pool, positions, owner, &quote)?;

    // Every fallible step is done; commit together.
    *pool = staged_pool;
    positions.commit(owner, staged_balance);
    debug!(
        owner = %owner,
        amount_a = %quote.amount_a(),
        amount_b = %quote.amount_b(),
        minted = %quote.shares(),
        "liquidity deposited"
    );
    Ok(quote)
}

/// Quotes a withdrawal of `shares` from `owner`'s position.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `shares` is zero.
/// - [`AmmError::InsufficientShares`] if `shares` exceeds the position.
pub fn quote_withdraw(
    pool: &ReservePool,
    positions: &PositionBook,
    owner: AccountId,
    shares: Shares,
) -> Result<WithdrawQuote> {
    if shares.is_zero() {
        return Err(AmmError::InvalidAmount);
    }
    if shares > positions.shares_of(owner) {
        return Err(AmmError::InsufficientShares);
    }
    // The position invariant guarantees total_shares >= shares > 0 here.
    let total = Amount::new(pool.total_shares().get());
    let burn = Amount::new(shares.get());
    let amount_a = pool.reserve_a().mul_div(burn, total, Rounding::Down)?;
    let amount_b = pool.reserve_b().mul_div(burn, total, Rounding::Down)?;
    WithdrawQuote::new(amount_a, amount_b, shares)
}

/// Computes the pool state and owner balance a withdrawal would commit,
/// without mutating anything.
///
/// # Errors
///
/// Propagates staging failures from the pool or position book.
pub fn stage_withdraw(
    pool: &ReservePool,
    positions: &PositionBook,
    owner: AccountId,
    quote: &WithdrawQuote,
) -> Result<(ReservePool, Shares)> {
    let staged_pool = pool.with_delta(&PoolDelta::new(
        SignedAmount::Debit(quote.amount_a()),
        SignedAmount::Debit(quote.amount_b()),
        SignedShares::Burn(quote.shares()),
    ))?;
    let staged_balance = positions.stage_debit(owner, quote.shares())?;
    Ok((staged_pool, staged_balance))
}

/// Applies a withdrawal: debits reserves, burns shares, and debits the
/// owner's position in one atomic step. A position drained to zero is
/// removed; burning the entire supply leaves the pool uninitialized.
///
/// # Errors
///
/// Fails with whatever [`quote_withdraw`] or [`stage_withdraw`] fails
/// with; on error pool and positions are unchanged.
pub fn apply_withdraw(
    pool: &mut ReservePool,
    positions: &mut PositionBook,
    owner: AccountId,
    shares: Shares,
) -> Result<WithdrawQuote> {
    let quote = quote_withdraw(pool, positions, owner, shares)?;
    let (staged_pool, staged_balance) = stage_withdraw(pool, positions, owner, &quote)?;

    *pool = staged_pool;
    positions.commit(owner, staged_balance);
    debug!(
        owner = %owner,
        amount_a = %quote.amount_a(),
        amount_b = %quote.amount_b(),
        burned = %quote.shares(),
        "liquidity withdrawn"
    );
    Ok(quote)
}
