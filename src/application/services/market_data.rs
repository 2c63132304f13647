//! # Market Data Service
//!
//! Keyed store of the latest order book per product, with best
//! bid/offer extraction and depth aggregation.

use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::application::config::MarketDataConfig;
use crate::application::fabric::{Service, ServiceListener};
use crate::domain::entities::order_book::{BidOffer, OrderBook};

/// Service distributing order book market data, keyed on product
/// identifier.
///
/// `on_message` overwrites the per-product book and notifies listeners.
/// The configured book depth governs how many levels per side the
/// connector buffers into one snapshot.
pub struct MarketDataService {
    order_books: HashMap<String, OrderBook>,
    listeners: Vec<Rc<dyn ServiceListener<OrderBook>>>,
    config: MarketDataConfig,
}

impl MarketDataService {
    /// Creates a market data service with the default depth of 5.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MarketDataConfig::default())
    }

    /// Creates a market data service with an explicit configuration.
    #[must_use]
    pub fn with_config(config: MarketDataConfig) -> Self {
        Self {
            order_books: HashMap::new(),
            listeners: Vec::new(),
            config,
        }
    }

    /// Returns the configured book depth.
    #[inline]
    #[must_use]
    pub fn book_depth(&self) -> usize {
        self.config.book_depth
    }

    /// Computes the best bid/offer of the stored book for a product.
    ///
    /// Returns `None` when no book is stored or either side of the book
    /// is empty.
    #[must_use]
    pub fn get_best_bid_offer(&self, product_id: &str) -> Option<BidOffer> {
        self.order_books
            .get(product_id)
            .and_then(OrderBook::bid_offer)
    }

    /// Returns a fresh book for the product with duplicate price levels
    /// collapsed by summing quantity. The stored book is unmodified.
    #[must_use]
    pub fn aggregate_depth(&self, product_id: &str) -> Option<OrderBook> {
        self.order_books
            .get(product_id)
            .map(OrderBook::aggregate_depth)
    }
}

impl Default for MarketDataService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<OrderBook> for MarketDataService {
    fn get_data(&self, key: &str) -> Option<&OrderBook> {
        self.order_books.get(key)
    }

    fn on_message(&mut self, data: OrderBook) {
        let key = data.product().product_id().to_string();
        debug!(
            product = %key,
            bids = data.bid_stack().len(),
            offers = data.offer_stack().len(),
            "order book snapshot"
        );
        self.order_books.insert(key.clone(), data);
        if let Some(stored) = self.order_books.get(&key) {
            for listener in &self.listeners {
                listener.process_add(stored);
            }
        }
    }

    fn add_listener(&mut self, listener: Rc<dyn ServiceListener<OrderBook>>) {
        self.listeners.push(listener);
    }

    fn listeners(&self) -> &[Rc<dyn ServiceListener<OrderBook>>] {
        &self.listeners
    }
}
