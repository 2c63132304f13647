//! # Domain Enums
//!
//! Enumeration types shared across the trading fabric:
//!
//! - [`Side`] - Buy or Sell direction of an inquiry
//! - [`PricingSide`] - Bid or Offer side of market data
//! - [`OrderType`] - Execution order types
//! - [`Market`] - Execution venues
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits. `Display` and `FromStr` use the
//! wire forms (`BUY`, `OFFER`, `MARKET`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side of a customer inquiry.
///
/// # Examples
///
/// ```
/// use bond_fabric::domain::value_objects::enums::Side;
///
/// assert_eq!(Side::Buy.to_string(), "BUY");
/// assert_eq!("SELL".parse::<Side>().unwrap(), Side::Sell);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Side {
    /// The client is buying.
    Buy = 0,
    /// The client is selling.
    Sell = 1,
}

impl Side {
    /// Returns the opposite side.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for Side {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            _ => Err(ParseEnumError::InvalidValue("Side", s.to_string())),
        }
    }
}

/// Side of a market data order.
///
/// # Examples
///
/// ```
/// use bond_fabric::domain::value_objects::enums::PricingSide;
///
/// assert_eq!(PricingSide::Bid.to_string(), "BID");
/// assert_eq!("OFFER".parse::<PricingSide>().unwrap(), PricingSide::Offer);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum PricingSide {
    /// Resting buy interest.
    Bid = 0,
    /// Resting sell interest.
    Offer = 1,
}

impl fmt::Display for PricingSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bid => write!(f, "BID"),
            Self::Offer => write!(f, "OFFER"),
        }
    }
}

impl FromStr for PricingSide {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BID" => Ok(Self::Bid),
            "OFFER" => Ok(Self::Offer),
            _ => Err(ParseEnumError::InvalidValue("PricingSide", s.to_string())),
        }
    }
}

/// Type of an execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum OrderType {
    /// Fill-or-kill.
    Fok = 0,
    /// Immediate-or-cancel.
    Ioc = 1,
    /// Market order.
    Market = 2,
    /// Limit order.
    Limit = 3,
    /// Stop order.
    Stop = 4,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fok => write!(f, "FOK"),
            Self::Ioc => write!(f, "IOC"),
            Self::Market => write!(f, "MARKET"),
            Self::Limit => write!(f, "LIMIT"),
            Self::Stop => write!(f, "STOP"),
        }
    }
}

impl FromStr for OrderType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FOK" => Ok(Self::Fok),
            "IOC" => Ok(Self::Ioc),
            "MARKET" => Ok(Self::Market),
            "LIMIT" => Ok(Self::Limit),
            "STOP" => Ok(Self::Stop),
            _ => Err(ParseEnumError::InvalidValue("OrderType", s.to_string())),
        }
    }
}

/// Execution venue.
///
/// Accepted by [`execute_order`](crate::application::services::execution::ExecutionService::execute_order)
/// for diagnostics; routing selection is a future extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Market {
    /// BrokerTec.
    Brokertec = 0,
    /// eSpeed.
    Espeed = 1,
    /// CME.
    Cme = 2,
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brokertec => write!(f, "BROKERTEC"),
            Self::Espeed => write!(f, "ESPEED"),
            Self::Cme => write!(f, "CME"),
        }
    }
}

impl FromStr for Market {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BROKERTEC" => Ok(Self::Brokertec),
            "ESPEED" => Ok(Self::Espeed),
            "CME" => Ok(Self::Cme),
            _ => Err(ParseEnumError::InvalidValue("Market", s.to_string())),
        }
    }
}

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    /// The provided string value is not valid for the enum.
    InvalidValue(&'static str, String),
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue(enum_name, value) => {
                write!(f, "invalid {} value: '{}'", enum_name, value)
            }
        }
    }
}

impl std::error::Error for ParseEnumError {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod side {
        use super::*;

        #[test]
        fn opposite() {
            assert_eq!(Side::Buy.opposite(), Side::Sell);
            assert_eq!(Side::Sell.opposite(), Side::Buy);
        }

        #[test]
        fn display_and_from_str() {
            assert_eq!(Side::Buy.to_string(), "BUY");
            assert_eq!("SELL".parse::<Side>().unwrap(), Side::Sell);
        }

        #[test]
        fn from_str_rejects_unknown() {
            assert!("HOLD".parse::<Side>().is_err());
            // Wire literals are case sensitive.
            assert!("buy".parse::<Side>().is_err());
        }

        #[test]
        fn serde_uses_wire_form() {
            assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), "\"BUY\"");
        }
    }

    mod pricing_side {
        use super::*;

        #[test]
        fn display_and_from_str() {
            assert_eq!(PricingSide::Bid.to_string(), "BID");
            assert_eq!(PricingSide::Offer.to_string(), "OFFER");
            assert_eq!("BID".parse::<PricingSide>().unwrap(), PricingSide::Bid);
        }

        #[test]
        fn from_str_rejects_unknown() {
            assert!("ASK".parse::<PricingSide>().is_err());
        }
    }

    mod order_type {
        use super::*;

        #[test]
        fn wire_forms() {
            for (value, text) in [
                (OrderType::Fok, "FOK"),
                (OrderType::Ioc, "IOC"),
                (OrderType::Market, "MARKET"),
                (OrderType::Limit, "LIMIT"),
                (OrderType::Stop, "STOP"),
            ] {
                assert_eq!(value.to_string(), text);
                assert_eq!(text.parse::<OrderType>().unwrap(), value);
            }
        }

        #[test]
        fn serde_roundtrip() {
            for value in [
                OrderType::Fok,
                OrderType::Ioc,
                OrderType::Market,
                OrderType::Limit,
                OrderType::Stop,
            ] {
                let json = serde_json::to_string(&value).unwrap();
                let back: OrderType = serde_json::from_str(&json).unwrap();
                assert_eq!(value, back);
            }
        }
    }

    mod market {
        use super::*;

        #[test]
        fn wire_forms() {
            for (value, text) in [
                (Market::Brokertec, "BROKERTEC"),
                (Market::Espeed, "ESPEED"),
                (Market::Cme, "CME"),
            ] {
                assert_eq!(value.to_string(), text);
                assert_eq!(text.parse::<Market>().unwrap(), value);
            }
        }
    }

    mod parse_enum_error {
        use super::*;

        #[test]
        fn display_format() {
            let err = ParseEnumError::InvalidValue("Side", "HOLD".to_string());
            assert_eq!(err.to_string(), "invalid Side value: 'HOLD'");
        }
    }
}
