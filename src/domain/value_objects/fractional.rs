//! # Fractional Price Codec
//!
//! Conversions between decimal prices and the US Treasury fractional
//! quotation convention.
//!
//! Treasury prices are quoted in 32nds, with the residual expressed in
//! eighths of a 32nd (i.e. 256ths). The textual form is `h-tte` where `h`
//! is the integer handle, `tt` the number of 32nds (two digits, `00..31`)
//! and `e` the number of 256ths beyond that (`0..7`). An `e` of `4` is
//! rendered as the literal `+` in the canonical form; [`decode`] accepts
//! either rendering.
//!
//! # Examples
//!
//! ```
//! use bond_fabric::domain::value_objects::fractional;
//! use rust_decimal::Decimal;
//!
//! let px = fractional::decode("100-160").unwrap();
//! assert_eq!(px, Decimal::new(1005, 1)); // 100.5
//! assert_eq!(fractional::encode(px), "100-160");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

/// The minimum Treasury price increment, 1/256.
pub const TICK: Decimal = Decimal::from_parts(390_625, 0, 0, false, 8);

/// Error type for fractional price parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FractionalPriceError {
    /// The `-` separating handle and fraction is missing.
    #[error("missing '-' separator in fractional price '{0}'")]
    MissingSeparator(String),

    /// The handle is not a non-negative integer.
    #[error("invalid handle in fractional price '{0}'")]
    InvalidHandle(String),

    /// The fractional part is not two digits followed by a digit or `+`.
    #[error("invalid fractional part in fractional price '{0}'")]
    InvalidFraction(String),

    /// The fractional part is syntactically valid but out of range.
    #[error("fractional part out of range in '{0}' (tt in 00..31, e in 0..7 or '+')")]
    OutOfRange(String),
}

/// Result type for fractional price parsing.
pub type FractionalPriceResult<T> = Result<T, FractionalPriceError>;

/// Encodes a non-negative decimal price in the fractional convention.
///
/// The residual beyond the handle is truncated to a whole number of
/// 256ths; an eighths digit of `4` is rendered as `+`.
///
/// # Examples
///
/// ```
/// use bond_fabric::domain::value_objects::fractional;
/// use rust_decimal::Decimal;
///
/// assert_eq!(fractional::encode(Decimal::new(1005, 1)), "100-160");
/// assert_eq!(fractional::encode(Decimal::from(99) + fractional::TICK * Decimal::from(4)), "99-00+");
/// ```
#[must_use]
pub fn encode(price: Decimal) -> String {
    let handle = price.trunc().to_i64().unwrap_or(0);
    let residual = ((price - price.trunc()) * Decimal::from(256))
        .trunc()
        .to_u32()
        .unwrap_or(0);
    let thirty_seconds = residual / 8;
    let eighths = residual % 8;

    let mut rendered = format!("{handle}-{thirty_seconds:02}");
    if eighths == 4 {
        rendered.push('+');
    } else {
        rendered.push_str(&eighths.to_string());
    }
    rendered
}

/// Decodes a fractional price string into a decimal price.
///
/// Accepts `h-tte` with `tt` in `00..31` and `e` in `0..7` or `+`
/// (meaning 4). The result is `h + tt/32 + e/256`, exact in `Decimal`.
///
/// # Errors
///
/// Returns a [`FractionalPriceError`] describing the first malformed
/// component.
///
/// # Examples
///
/// ```
/// use bond_fabric::domain::value_objects::fractional;
/// use rust_decimal::Decimal;
///
/// let plus = fractional::decode("99-00+").unwrap();
/// let digit = fractional::decode("99-004").unwrap();
/// assert_eq!(plus, digit);
/// assert!(fractional::decode("99-330").is_err());
/// ```
pub fn decode(text: &str) -> FractionalPriceResult<Decimal> {
    let (handle_text, fraction) = text
        .split_once('-')
        .ok_or_else(|| FractionalPriceError::MissingSeparator(text.to_string()))?;

    let handle: u64 = handle_text
        .parse()
        .map_err(|_| FractionalPriceError::InvalidHandle(text.to_string()))?;

    let bytes = fraction.as_bytes();
    if bytes.len() != 3 || !bytes[0].is_ascii_digit() || !bytes[1].is_ascii_digit() {
        return Err(FractionalPriceError::InvalidFraction(text.to_string()));
    }

    let thirty_seconds = u32::from(bytes[0] - b'0') * 10 + u32::from(bytes[1] - b'0');
    let eighths: u32 = match bytes[2] {
        b'+' => 4,
        digit @ b'0'..=b'9' => u32::from(digit - b'0'),
        _ => return Err(FractionalPriceError::InvalidFraction(text.to_string())),
    };

    if thirty_seconds > 31 || eighths > 7 {
        return Err(FractionalPriceError::OutOfRange(text.to_string()));
    }

    Ok(Decimal::from(handle)
        + Decimal::from(thirty_seconds) / Decimal::from(32)
        + Decimal::from(eighths) / Decimal::from(256))
}
