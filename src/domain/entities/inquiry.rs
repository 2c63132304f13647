//! # Inquiry
//!
//! A customer RFQ working its way through the quoting lifecycle.
//!
//! State transitions are expressed as explicit methods on the entity:
//! [`quote`](Inquiry::quote) moves `Received → Quoted`,
//! [`complete`](Inquiry::complete) moves `Quoted → Done`, and
//! [`reject`](Inquiry::reject) overwrites the state with `Rejected`
//! regardless of the current state (a desk override, not a protocol
//! transition).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::entities::bond::Bond;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::enums::Side;
use crate::domain::value_objects::fractional;
use crate::domain::value_objects::inquiry_state::InquiryState;

/// A customer inquiry.
///
/// # Examples
///
/// ```
/// use bond_fabric::domain::entities::bond::Bond;
/// use bond_fabric::domain::entities::inquiry::Inquiry;
/// use bond_fabric::domain::value_objects::enums::Side;
/// use bond_fabric::domain::value_objects::inquiry_state::InquiryState;
/// use rust_decimal::Decimal;
///
/// let mut inquiry = Inquiry::new(
///     "INQ1",
///     Bond::default(),
///     Side::Buy,
///     1_000_000,
///     Decimal::from(99),
///     InquiryState::Received,
/// );
///
/// inquiry.quote().unwrap();
/// inquiry.complete().unwrap();
/// assert_eq!(inquiry.state(), InquiryState::Done);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    /// Unique inquiry identifier (not a product identifier).
    inquiry_id: String,
    /// The product being inquired about.
    product: Bond,
    /// Whether the client is buying or selling.
    side: Side,
    /// Quantity the client is inquiring for.
    quantity: u64,
    /// The price we have responded back with.
    price: Decimal,
    /// Current lifecycle state.
    state: InquiryState,
}

impl Inquiry {
    /// Creates a new inquiry.
    #[must_use]
    pub fn new(
        inquiry_id: impl Into<String>,
        product: Bond,
        side: Side,
        quantity: u64,
        price: Decimal,
        state: InquiryState,
    ) -> Self {
        Self {
            inquiry_id: inquiry_id.into(),
            product,
            side,
            quantity,
            price,
            state,
        }
    }

    /// Returns the inquiry identifier.
    #[inline]
    #[must_use]
    pub fn inquiry_id(&self) -> &str {
        &self.inquiry_id
    }

    /// Returns the product.
    #[inline]
    #[must_use]
    pub fn product(&self) -> &Bond {
        &self.product
    }

    /// Returns the side.
    #[inline]
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Returns the quantity.
    #[inline]
    #[must_use]
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Returns the quoted price.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the current state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> InquiryState {
        self.state
    }

    /// Overwrites the quoted price. The state is untouched.
    pub fn set_price(&mut self, price: Decimal) {
        self.price = price;
    }

    /// Marks the inquiry as quoted.
    ///
    /// Transitions: `Received → Quoted`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidStateTransition`] if the inquiry is
    /// not in the `Received` state.
    pub fn quote(&mut self) -> DomainResult<()> {
        self.transition(InquiryState::Received, InquiryState::Quoted)
    }

    /// Marks the inquiry as completed.
    ///
    /// Transitions: `Quoted → Done`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidStateTransition`] if the inquiry is
    /// not in the `Quoted` state.
    pub fn complete(&mut self) -> DomainResult<()> {
        self.transition(InquiryState::Quoted, InquiryState::Done)
    }

    /// Rejects the inquiry, overwriting whatever state it is in.
    pub fn reject(&mut self) {
        self.state = InquiryState::Rejected;
    }

    fn transition(&mut self, expected: InquiryState, target: InquiryState) -> DomainResult<()> {
        if self.state != expected {
            return Err(DomainError::InvalidStateTransition {
                from: self.state,
                to: target,
            });
        }
        self.state = target;
        Ok(())
    }
}

impl fmt::Display for Inquiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.inquiry_id,
            self.product.product_id(),
            self.side,
            self.quantity,
            fractional::encode(self.price),
            self.state
        )
    }
}
