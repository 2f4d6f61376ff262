//! Decimal-string conversion for the boundary.
//!
//! The core computes exclusively on raw 10^18-scaled integers; these
//! helpers exist so UI layers can render and accept human decimal
//! strings. Conversion is pure integer arithmetic — parsing never routes
//! through floating point.

use crate::domain::{Amount, Price};
use crate::error::{AmmError, Result};

const WAD: u128 = Amount::WAD;
const FRAC_DIGITS: usize = 18;

/// Formats a raw amount as a decimal token string.
///
/// Trailing fractional zeros are trimmed; whole values render with no
/// decimal point.
///
/// # Examples
///
/// ```
/// use cpamm::api::display::format_amount;
/// use cpamm::domain::Amount;
///
/// assert_eq!(format_amount(Amount::from_whole(100)), "100");
/// assert_eq!(format_amount(Amount::new(181_818_181_818_181_818_181)), "181.818181818181818181");
/// ```
#[must_use]
pub fn format_amount(amount: Amount) -> String {
    format_raw(amount.get())
}

/// Formats a raw 10^18-scaled price ratio as a decimal string.
#[must_use]
pub fn format_price(price: Price) -> String {
    format_raw(price.get())
}

fn format_raw(raw: u128) -> String {
    let whole = raw / WAD;
    let frac = raw % WAD;
    if frac == 0 {
        return whole.to_string();
    }
    // Fraction is always rendered over the full 18 places before trimming.
    let frac = format!("{frac:018}");
    let trimmed = frac.trim_end_matches('0');
    format!("{whole}.{trimmed}")
}

/// Parses a decimal token string into a raw amount.
///
/// Accepts an integer part with an optional fraction of up to 18 digits
/// (`"100"`, `"0.5"`, `"181.818181818181818181"`).
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] for empty input, non-digit characters,
///   or more than 18 fractional digits.
/// - [`AmmError::Overflow`] if the value exceeds the `u128` range.
pub fn parse_amount(text: &str) -> Result<Amount> {
    let (whole_text, frac_text) = match text.split_once('.') {
        Some((w, f)) => (w, f),
        None => (text, ""),
    };
    if whole_text.is_empty() || !whole_text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmmError::InvalidAmount);
    }
    if frac_text.len() > FRAC_DIGITS || !frac_text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmmError::InvalidAmount);
    }

    let whole: u128 = whole_text
        .parse()
        .map_err(|_| AmmError::Overflow("whole part exceeds u128"))?;
    let frac: u128 = if frac_text.is_empty() {
        0
    } else {
        // Pad to 18 digits: "5" after the point means 5 * 10^17 raw.
        let parsed: u128 = frac_text
            .parse()
            .map_err(|_| AmmError::InvalidAmount)?;
        parsed * 10u128.pow((FRAC_DIGITS - frac_text.len()) as u32)
    };

    let scaled = whole
        .checked_mul(WAD)
        .ok_or(AmmError::Overflow("amount exceeds fixed-point range"))?;
    let raw = scaled
        .checked_add(frac)
        .ok_or(AmmError::Overflow("amount exceeds fixed-point range"))?;
    Ok(Amount::new(raw))
}
