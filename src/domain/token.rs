//! Token identity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The opaque, address-equivalent identity of a token.
///
/// Wraps a fixed 32-byte identifier. Every token handled by the core uses
/// the same fixed precision of [`Token::DECIMALS`] decimal places; amounts
/// are always raw 10^18-scaled integers and never carry per-token scale.
///
/// # Examples
///
/// ```
/// use cpamm::domain::Token;
///
/// let tok = Token::from_bytes([1u8; 32]);
/// assert_eq!(tok.as_bytes(), [1u8; 32]);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Token([u8; 32]);

impl Token {
    /// Decimal precision shared by every token in the system.
    pub const DECIMALS: u32 = 18;

    /// Creates a `Token` from raw identifier bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte identifier.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}…",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}
