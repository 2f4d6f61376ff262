//! Unified error types for the AMM core.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type. Every variant is a local, recoverable condition reported to
//! the caller; nothing here panics or aborts. Mutating operations guarantee
//! that returning an error leaves reserves, shares, positions, and
//! allowances exactly as they were.

use thiserror::Error;

/// Unified error enum for every fallible operation in the crate.
///
/// Variants that benefit from context carry a `&'static str` describing the
/// failing computation. [`AmmError::code`] exposes a stable machine-readable
/// identifier for each variant, independent of the display message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AmmError {
    /// A zero amount was supplied where a positive amount is required.
    #[error("amount must be positive")]
    InvalidAmount,

    /// A subtraction would have produced a negative value.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// An intermediate or final value exceeded the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A divisor was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A reserve that must be positive was observed to be zero.
    #[error("pool has no reserves")]
    EmptyPool,

    /// The referenced token is not one of the pool's pair.
    #[error("token is not part of the pool pair")]
    UnknownToken,

    /// The pool cannot satisfy the swap: the quote would round to zero
    /// output, or an exact-output request meets or exceeds the reserve.
    #[error("insufficient liquidity for this swap")]
    InsufficientLiquidity,

    /// The caller's liquidity position does not cover the requested burn.
    #[error("insufficient liquidity shares")]
    InsufficientShares,

    /// The allowance granted to the pool does not cover the required amount.
    #[error("insufficient allowance")]
    InsufficientAllowance,

    /// `initialize` was called on a pool that already has share supply.
    #[error("pool is already initialized")]
    AlreadyInitialized,
}

impl AmmError {
    /// Returns the stable error code for this variant.
    ///
    /// Codes are part of the boundary contract: they never change even if
    /// the display message is reworded.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::Underflow(_) => "UNDERFLOW",
            Self::Overflow(_) => "OVERFLOW",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::EmptyPool => "EMPTY_POOL",
            Self::UnknownToken => "UNKNOWN_TOKEN",
            Self::InsufficientLiquidity => "INSUFFICIENT_LIQUIDITY",
            Self::InsufficientShares => "INSUFFICIENT_SHARES",
            Self::InsufficientAllowance => "INSUFFICIENT_ALLOWANCE",
            Self::AlreadyInitialized => "ALREADY_INITIALIZED",
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;
