//! # Algo Execution Service
//!
//! Decides when and how to cross the spread.
//!
//! On each order book snapshot the service extracts the best bid/offer
//! and, if the spread has collapsed to at most the configured threshold
//! (1/128 by default), emits exactly one market order. Aggression
//! alternates between the bid and the offer side across emissions so
//! that activity is roughly balanced over a session.

use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::application::config::AlgoConfig;
use crate::application::fabric::{Service, ServiceListener};
use crate::domain::entities::execution::{AlgoExecution, ExecutionOrder};
use crate::domain::entities::order_book::OrderBook;
use crate::domain::value_objects::enums::{OrderType, PricingSide};
use crate::domain::value_objects::ids::OrderIdGenerator;

/// Service producing algo executions from order book updates, keyed on
/// product identifier.
///
/// The crossing counter is held per service instance and shared across
/// products, so alternation is global: BID, OFFER, BID, OFFER, ...
/// starting from BID.
pub struct AlgoExecutionService {
    algo_executions: HashMap<String, AlgoExecution>,
    listeners: Vec<Rc<dyn ServiceListener<AlgoExecution>>>,
    order_ids: OrderIdGenerator,
    config: AlgoConfig,
    crossings: u64,
}

impl AlgoExecutionService {
    /// Creates an algo execution service with the default 1/128 spread
    /// threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AlgoConfig::default())
    }

    /// Creates an algo execution service with an explicit configuration.
    #[must_use]
    pub fn with_config(config: AlgoConfig) -> Self {
        Self {
            algo_executions: HashMap::new(),
            listeners: Vec::new(),
            order_ids: OrderIdGenerator::new(),
            config,
            crossings: 0,
        }
    }

    /// Returns the number of crossings emitted so far.
    #[inline]
    #[must_use]
    pub fn crossings(&self) -> u64 {
        self.crossings
    }

    /// Runs the crossing decision against an order book snapshot.
    ///
    /// Emits at most one [`AlgoExecution`]: none if either side of the
    /// book is empty or the spread is above the threshold. An emission
    /// overwrites the stored entry for the product and notifies all
    /// listeners before returning.
    pub fn on_order_book(&mut self, book: &OrderBook) {
        let Some(bid_offer) = book.bid_offer() else {
            return;
        };
        if bid_offer.spread() > self.config.spread_threshold {
            return;
        }

        let (price, quantity, side) = if self.crossings % 2 == 0 {
            (
                bid_offer.bid().price(),
                bid_offer.bid().quantity(),
                PricingSide::Bid,
            )
        } else {
            (
                bid_offer.offer().price(),
                bid_offer.offer().quantity(),
                PricingSide::Offer,
            )
        };
        self.crossings += 1;

        let order = ExecutionOrder::new(
            book.product().clone(),
            side,
            self.order_ids.generate(),
            OrderType::Market,
            price,
            quantity,
            0,
            "",
            false,
        );
        debug!(
            product = %book.product().product_id(),
            side = %side,
            order_id = %order.order_id(),
            "spread crossed, emitting execution"
        );

        let key = book.product().product_id().to_string();
        self.algo_executions.insert(key.clone(), AlgoExecution::new(order));
        if let Some(stored) = self.algo_executions.get(&key) {
            for listener in &self.listeners {
                listener.process_add(stored);
            }
        }
    }
}

impl Default for AlgoExecutionService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<AlgoExecution> for AlgoExecutionService {
    fn get_data(&self, key: &str) -> Option<&AlgoExecution> {
        self.algo_executions.get(key)
    }

    /// Stores the algo execution without notifying listeners; fan-out
    /// happens from [`on_order_book`](Self::on_order_book).
    fn on_message(&mut self, data: AlgoExecution) {
        let key = data.execution_order().product().product_id().to_string();
        self.algo_executions.insert(key, data);
    }

    fn add_listener(&mut self, listener: Rc<dyn ServiceListener<AlgoExecution>>) {
        self.listeners.push(listener);
    }

    fn listeners(&self) -> &[Rc<dyn ServiceListener<AlgoExecution>>] {
        &self.listeners
    }
}
