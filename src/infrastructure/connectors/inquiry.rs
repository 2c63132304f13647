//! # Inquiry Connector
//!
//! Parses the inquiry stream into [`Inquiry`] messages.
//!
//! Line format: `inquiryId,productId,side,quantity,priceFrac,state`.
//! Every parsed inquiry re-enters the service through `on_message`,
//! which drives the quoting state machine; for a `RECEIVED` record the
//! full round trip to `DONE` completes before the next line is read.

use std::io::BufRead;

use tracing::warn;

use crate::application::fabric::{Connector, Service};
use crate::application::services::inquiry::InquiryService;
use crate::domain::entities::bond::Bond;
use crate::domain::entities::inquiry::Inquiry;
use crate::domain::value_objects::enums::Side;
use crate::domain::value_objects::fractional;
use crate::domain::value_objects::inquiry_state::InquiryState;
use crate::infrastructure::connectors::{ConnectorResult, IngestReport};
use crate::infrastructure::registry;

/// Subscribe-only connector for the inquiry stream.
pub struct InquiryConnector;

impl InquiryConnector {
    /// Ingests every line of the stream into the service.
    ///
    /// Malformed records (bad field count, unknown side or state,
    /// unparseable quantity or price) are skipped with a diagnostic.
    /// Unknown products are accepted with default bond metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::Io`](crate::infrastructure::connectors::ConnectorError::Io)
    /// if reading from the stream fails.
    pub fn subscribe<R: BufRead>(
        service: &mut InquiryService,
        input: R,
    ) -> ConnectorResult<IngestReport> {
        let mut report = IngestReport::default();
        for line in input.lines() {
            let line = line?;
            match Self::parse_line(&line) {
                Some(inquiry) => {
                    service.on_message(inquiry);
                    report.published += 1;
                }
                None => report.skipped += 1,
            }
        }
        Ok(report)
    }

    fn parse_line(line: &str) -> Option<Inquiry> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 6 {
            warn!(line, "inquiry record has wrong field count");
            return None;
        }

        let side: Side = match fields[2].parse() {
            Ok(side) => side,
            Err(err) => {
                warn!(line, %err, "unknown side");
                return None;
            }
        };
        let quantity: u64 = match fields[3].parse() {
            Ok(quantity) => quantity,
            Err(_) => {
                warn!(line, "unparseable quantity");
                return None;
            }
        };
        let price = match fractional::decode(fields[4]) {
            Ok(price) => price,
            Err(err) => {
                warn!(line, %err, "unparseable price");
                return None;
            }
        };
        let state: InquiryState = match fields[5].parse() {
            Ok(state) => state,
            Err(err) => {
                warn!(line, %err, "unknown inquiry state");
                return None;
            }
        };

        let product = registry::bond(fields[1]).unwrap_or_else(|| {
            warn!(product_id = fields[1], "unknown product in inquiry stream");
            Bond::default()
        });

        Some(Inquiry::new(fields[0], product, side, quantity, price, state))
    }
}

impl Connector<Inquiry> for InquiryConnector {}
