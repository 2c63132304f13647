//! # Market Data Connector
//!
//! Parses the market data stream into [`OrderBook`] snapshots.
//!
//! Line format: `productId,priceFrac,quantity,side`. The stream is
//! consumed in blocks of `2 * depth` parsed lines; every full block is
//! one complete book snapshot for one product (the block's last product
//! identifier names the book).

use std::io::BufRead;
use std::mem;

use tracing::warn;

use crate::application::fabric::{Connector, Service};
use crate::application::services::market_data::MarketDataService;
use crate::domain::entities::bond::Bond;
use crate::domain::entities::order_book::{Order, OrderBook};
use crate::domain::value_objects::enums::PricingSide;
use crate::domain::value_objects::fractional;
use crate::infrastructure::connectors::{ConnectorResult, IngestReport};
use crate::infrastructure::registry;

/// Subscribe-only connector for the market data stream.
pub struct MarketDataConnector;

impl MarketDataConnector {
    /// Ingests the stream into the service, one book per full block.
    ///
    /// Malformed lines are skipped with a diagnostic and do not count
    /// towards the block; an incomplete trailing block is dropped and
    /// reported as skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::Io`](crate::infrastructure::connectors::ConnectorError::Io)
    /// if reading from the stream fails.
    pub fn subscribe<R: BufRead>(
        service: &mut MarketDataService,
        input: R,
    ) -> ConnectorResult<IngestReport> {
        let block = service.book_depth() * 2;
        let mut report = IngestReport::default();
        let mut bid_stack: Vec<Order> = Vec::new();
        let mut offer_stack: Vec<Order> = Vec::new();
        let mut product_id = String::new();

        for line in input.lines() {
            let line = line?;
            let Some((line_product, order)) = Self::parse_line(&line) else {
                report.skipped += 1;
                continue;
            };

            product_id = line_product;
            match order.side() {
                PricingSide::Bid => bid_stack.push(order),
                PricingSide::Offer => offer_stack.push(order),
            }

            if bid_stack.len() + offer_stack.len() == block {
                let product = registry::bond(&product_id).unwrap_or_else(|| {
                    warn!(product_id, "unknown product in market data stream");
                    Bond::default()
                });
                service.on_message(OrderBook::new(
                    product,
                    mem::take(&mut bid_stack),
                    mem::take(&mut offer_stack),
                ));
                report.published += 1;
            }
        }

        let leftover = bid_stack.len() + offer_stack.len();
        if leftover > 0 {
            warn!(leftover, "dropping incomplete market data block");
            report.skipped += leftover;
        }

        Ok(report)
    }

    fn parse_line(line: &str) -> Option<(String, Order)> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 4 {
            warn!(line, "market data record has wrong field count");
            return None;
        }

        let price = match fractional::decode(fields[1]) {
            Ok(price) => price,
            Err(err) => {
                warn!(line, %err, "unparseable price");
                return None;
            }
        };
        let quantity: u64 = match fields[2].parse() {
            Ok(quantity) => quantity,
            Err(_) => {
                warn!(line, "unparseable quantity");
                return None;
            }
        };
        let side: PricingSide = match fields[3].parse() {
            Ok(side) => side,
            Err(err) => {
                warn!(line, %err, "unknown side");
                return None;
            }
        };

        Some((fields[0].to_string(), Order::new(price, quantity, side)))
    }
}

impl Connector<OrderBook> for MarketDataConnector {}
