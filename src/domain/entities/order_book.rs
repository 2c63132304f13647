//! # Order Book
//!
//! Market data orders and the per-product order book.
//!
//! The book keeps its bid and offer stacks exactly as ingested; no
//! ordering invariant is enforced at rest. [`OrderBook::bid_offer`]
//! computes the true best bid/offer on demand, and
//! [`OrderBook::aggregate_depth`] collapses duplicate price levels into a
//! fresh book.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::domain::entities::bond::Bond;
use crate::domain::value_objects::enums::PricingSide;
use crate::domain::value_objects::fractional;

/// A market data order: price, quantity and side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Price of the order.
    price: Decimal,
    /// Quantity of the order.
    quantity: u64,
    /// Side of the order.
    side: PricingSide,
}

impl Order {
    /// Creates a new order.
    #[must_use]
    pub const fn new(price: Decimal, quantity: u64, side: PricingSide) -> Self {
        Self {
            price,
            quantity,
            side,
        }
    }

    /// Returns the price.
    #[inline]
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the quantity.
    #[inline]
    #[must_use]
    pub const fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Returns the side.
    #[inline]
    #[must_use]
    pub const fn side(&self) -> PricingSide {
        self.side
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} @ {}",
            self.side,
            self.quantity,
            fractional::encode(self.price)
        )
    }
}

/// The best bid and offer of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidOffer {
    /// The best bid order.
    bid: Order,
    /// The best offer order.
    offer: Order,
}

impl BidOffer {
    /// Creates a new bid/offer pair.
    #[must_use]
    pub const fn new(bid: Order, offer: Order) -> Self {
        Self { bid, offer }
    }

    /// Returns the bid order.
    #[inline]
    #[must_use]
    pub const fn bid(&self) -> &Order {
        &self.bid
    }

    /// Returns the offer order.
    #[inline]
    #[must_use]
    pub const fn offer(&self) -> &Order {
        &self.offer
    }

    /// Returns the offer price minus the bid price.
    #[inline]
    #[must_use]
    pub fn spread(&self) -> Decimal {
        self.offer.price() - self.bid.price()
    }
}

/// Per-product order book with a bid and an offer stack.
///
/// # Examples
///
/// ```
/// use bond_fabric::domain::entities::bond::Bond;
/// use bond_fabric::domain::entities::order_book::{Order, OrderBook};
/// use bond_fabric::domain::value_objects::enums::PricingSide;
/// use rust_decimal::Decimal;
///
/// let book = OrderBook::new(
///     Bond::default(),
///     vec![Order::new(Decimal::from(99), 100, PricingSide::Bid)],
///     vec![Order::new(Decimal::from(100), 200, PricingSide::Offer)],
/// );
/// let bbo = book.bid_offer().unwrap();
/// assert_eq!(bbo.spread(), Decimal::ONE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBook {
    /// The product the book is for.
    product: Bond,
    /// Bid orders, in ingest order.
    bid_stack: Vec<Order>,
    /// Offer orders, in ingest order.
    offer_stack: Vec<Order>,
}

impl OrderBook {
    /// Creates a new order book.
    #[must_use]
    pub fn new(product: Bond, bid_stack: Vec<Order>, offer_stack: Vec<Order>) -> Self {
        Self {
            product,
            bid_stack,
            offer_stack,
        }
    }

    /// Returns the product.
    #[inline]
    #[must_use]
    pub fn product(&self) -> &Bond {
        &self.product
    }

    /// Returns the bid stack.
    #[inline]
    #[must_use]
    pub fn bid_stack(&self) -> &[Order] {
        &self.bid_stack
    }

    /// Returns the offer stack.
    #[inline]
    #[must_use]
    pub fn offer_stack(&self) -> &[Order] {
        &self.offer_stack
    }

    /// Computes the best bid/offer by scanning the stacks.
    ///
    /// The best bid is the strict maximum of bid prices and the best offer
    /// the strict minimum of offer prices; on equal prices the first
    /// occurrence wins. Returns `None` when either side is empty.
    #[must_use]
    pub fn bid_offer(&self) -> Option<BidOffer> {
        let mut best_bid: Option<&Order> = None;
        for order in &self.bid_stack {
            if best_bid.map_or(true, |best| order.price() > best.price()) {
                best_bid = Some(order);
            }
        }

        let mut best_offer: Option<&Order> = None;
        for order in &self.offer_stack {
            if best_offer.map_or(true, |best| order.price() < best.price()) {
                best_offer = Some(order);
            }
        }

        match (best_bid, best_offer) {
            (Some(bid), Some(offer)) => Some(BidOffer::new(*bid, *offer)),
            _ => None,
        }
    }

    /// Collapses duplicate price levels by summing quantity per price.
    ///
    /// Bid and offer stacks are aggregated independently into a fresh
    /// book; the order of levels in the result is unspecified. The
    /// original book is unmodified.
    #[must_use]
    pub fn aggregate_depth(&self) -> OrderBook {
        OrderBook::new(
            self.product.clone(),
            Self::aggregate_stack(&self.bid_stack, PricingSide::Bid),
            Self::aggregate_stack(&self.offer_stack, PricingSide::Offer),
        )
    }

    fn aggregate_stack(stack: &[Order], side: PricingSide) -> Vec<Order> {
        let mut by_price: HashMap<Decimal, u64> = HashMap::new();
        for order in stack {
            *by_price.entry(order.price()).or_insert(0) += order.quantity();
        }
        by_price
            .into_iter()
            .map(|(price, quantity)| Order::new(price, quantity, side))
            .collect()
    }
}
