//! # Price Quote
//!
//! Mid/spread price quote for a product.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::entities::bond::Bond;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::fractional;

/// A price quote consisting of a mid price and a bid/offer spread.
///
/// # Invariants
///
/// - `bid_offer_spread >= 0`
///
/// # Examples
///
/// ```
/// use bond_fabric::domain::entities::bond::Bond;
/// use bond_fabric::domain::entities::price::Price;
/// use rust_decimal::Decimal;
///
/// let quote = Price::new(Bond::default(), Decimal::from(99), Decimal::new(3125, 5)).unwrap();
/// assert_eq!(quote.mid(), Decimal::from(99));
///
/// // Negative spreads are rejected.
/// assert!(Price::new(Bond::default(), Decimal::from(99), Decimal::from(-1)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// The product the quote is for.
    product: Bond,
    /// Mid price.
    mid: Decimal,
    /// Bid/offer spread around the mid.
    bid_offer_spread: Decimal,
}

impl Price {
    /// Creates a new price quote with validation.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeSpread`] if the spread is negative.
    pub fn new(product: Bond, mid: Decimal, bid_offer_spread: Decimal) -> DomainResult<Self> {
        if bid_offer_spread.is_sign_negative() && !bid_offer_spread.is_zero() {
            return Err(DomainError::NegativeSpread(bid_offer_spread));
        }
        Ok(Self {
            product,
            mid,
            bid_offer_spread,
        })
    }

    /// Returns the product.
    #[inline]
    #[must_use]
    pub fn product(&self) -> &Bond {
        &self.product
    }

    /// Returns the mid price.
    #[inline]
    #[must_use]
    pub fn mid(&self) -> Decimal {
        self.mid
    }

    /// Returns the bid/offer spread.
    #[inline]
    #[must_use]
    pub fn bid_offer_spread(&self) -> Decimal {
        self.bid_offer_spread
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.product.product_id(),
            fractional::encode(self.mid),
            fractional::encode(self.bid_offer_spread)
        )
    }
}
