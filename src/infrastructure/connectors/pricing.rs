//! # Pricing Connector
//!
//! Parses the price stream into [`Price`] quotes.
//!
//! Line format: `productId,bidFrac,offerFrac` with fractional-notation
//! prices. The mid is `(bid + offer) / 2` and the spread `offer - bid`.

use std::io::BufRead;

use rust_decimal::Decimal;
use tracing::warn;

use crate::application::fabric::{Connector, Service};
use crate::application::services::pricing::PricingService;
use crate::domain::entities::bond::Bond;
use crate::domain::entities::price::Price;
use crate::domain::value_objects::fractional;
use crate::infrastructure::connectors::{ConnectorResult, IngestReport};
use crate::infrastructure::registry;

/// Subscribe-only connector for the pricing stream.
pub struct PricingConnector;

impl PricingConnector {
    /// Ingests every line of the stream into the service.
    ///
    /// Malformed records (bad field count, unparseable prices, a crossed
    /// bid/offer) are skipped with a diagnostic and counted in the
    /// report. Unknown products are accepted with default bond metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::Io`](crate::infrastructure::connectors::ConnectorError::Io)
    /// if reading from the stream fails.
    pub fn subscribe<R: BufRead>(
        service: &mut PricingService,
        input: R,
    ) -> ConnectorResult<IngestReport> {
        let mut report = IngestReport::default();
        for line in input.lines() {
            let line = line?;
            match Self::parse_line(&line) {
                Some(price) => {
                    service.on_message(price);
                    report.published += 1;
                }
                None => report.skipped += 1,
            }
        }
        Ok(report)
    }

    fn parse_line(line: &str) -> Option<Price> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 3 {
            warn!(line, "pricing record has wrong field count");
            return None;
        }
        let (product_id, bid_text, offer_text) = (fields[0], fields[1], fields[2]);

        let bid = match fractional::decode(bid_text) {
            Ok(bid) => bid,
            Err(err) => {
                warn!(line, %err, "unparseable bid");
                return None;
            }
        };
        let offer = match fractional::decode(offer_text) {
            Ok(offer) => offer,
            Err(err) => {
                warn!(line, %err, "unparseable offer");
                return None;
            }
        };

        let mid = (bid + offer) / Decimal::from(2);
        let spread = offer - bid;
        let product = registry::bond(product_id).unwrap_or_else(|| {
            warn!(product_id, "unknown product in pricing stream");
            Bond::default()
        });

        match Price::new(product, mid, spread) {
            Ok(price) => Some(price),
            Err(err) => {
                warn!(line, %err, "rejected pricing record");
                None
            }
        }
    }
}

impl Connector<Price> for PricingConnector {}
