//! # Execution Orders
//!
//! Orders produced by the algo layer and handed to execution.
//!
//! An [`AlgoExecution`] wraps exactly one [`ExecutionOrder`]; the order
//! lives and dies with the algo emission that produced it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::entities::bond::Bond;
use crate::domain::value_objects::enums::{OrderType, PricingSide};
use crate::domain::value_objects::fractional;

/// An execution order that can be placed on an exchange.
///
/// `parent_order_id` is empty for top-level orders; `is_child_order`
/// renders as `YES`/`NO` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionOrder {
    /// The product being traded.
    product: Bond,
    /// Side of the book being crossed.
    side: PricingSide,
    /// Unique order identifier.
    order_id: String,
    /// Order type.
    order_type: OrderType,
    /// Limit/cross price.
    price: Decimal,
    /// Quantity shown to the market.
    visible_quantity: u64,
    /// Quantity held back.
    hidden_quantity: u64,
    /// Identifier of the parent order, empty for top-level orders.
    parent_order_id: String,
    /// Whether this order is a child of another order.
    is_child_order: bool,
}

impl ExecutionOrder {
    /// Creates a new execution order.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        product: Bond,
        side: PricingSide,
        order_id: impl Into<String>,
        order_type: OrderType,
        price: Decimal,
        visible_quantity: u64,
        hidden_quantity: u64,
        parent_order_id: impl Into<String>,
        is_child_order: bool,
    ) -> Self {
        Self {
            product,
            side,
            order_id: order_id.into(),
            order_type,
            price,
            visible_quantity,
            hidden_quantity,
            parent_order_id: parent_order_id.into(),
            is_child_order,
        }
    }

    /// Returns the product.
    #[inline]
    #[must_use]
    pub fn product(&self) -> &Bond {
        &self.product
    }

    /// Returns the side being crossed.
    #[inline]
    #[must_use]
    pub fn side(&self) -> PricingSide {
        self.side
    }

    /// Returns the order identifier.
    #[inline]
    #[must_use]
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    /// Returns the order type.
    #[inline]
    #[must_use]
    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    /// Returns the price.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the visible quantity.
    #[inline]
    #[must_use]
    pub fn visible_quantity(&self) -> u64 {
        self.visible_quantity
    }

    /// Returns the hidden quantity.
    #[inline]
    #[must_use]
    pub fn hidden_quantity(&self) -> u64 {
        self.hidden_quantity
    }

    /// Returns the parent order identifier (empty for top-level orders).
    #[inline]
    #[must_use]
    pub fn parent_order_id(&self) -> &str {
        &self.parent_order_id
    }

    /// Returns true if this order is a child order.
    #[inline]
    #[must_use]
    pub fn is_child_order(&self) -> bool {
        self.is_child_order
    }
}

impl fmt::Display for ExecutionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{},{},{}",
            self.product.product_id(),
            self.side,
            self.order_id,
            self.order_type,
            fractional::encode(self.price),
            self.visible_quantity,
            self.hidden_quantity,
            self.parent_order_id,
            if self.is_child_order { "YES" } else { "NO" }
        )
    }
}

/// An algo emission wrapping exactly one execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgoExecution {
    /// The order produced by the algo decision.
    execution_order: ExecutionOrder,
}

impl AlgoExecution {
    /// Creates a new algo execution around an order.
    #[must_use]
    pub fn new(execution_order: ExecutionOrder) -> Self {
        Self { execution_order }
    }

    /// Returns the wrapped execution order.
    #[inline]
    #[must_use]
    pub fn execution_order(&self) -> &ExecutionOrder {
        &self.execution_order
    }
}
