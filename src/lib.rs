//! # bond-fabric
//!
//! Service-oriented event fabric for a US Treasury trading platform.
//!
//! Each stage of the pipeline is a keyed store publishing add events to
//! its listeners; stages are composed by listeners that translate
//! between the data models of adjacent stages:
//!
//! ```text
//! price stream ──▶ PricingService
//! market data ───▶ MarketDataService ──▶ AlgoExecutionService ──▶ ExecutionService
//! inquiries ─────▶ InquiryService (RECEIVED → QUOTED → DONE)
//! ```
//!
//! The fabric is single-threaded and cooperative: every publication,
//! including all downstream fan-out, completes synchronously before the
//! next ingress record is processed. Prices are `rust_decimal::Decimal`
//! values quoted in the Treasury 32nds/256ths fractional convention
//! (see [`domain::value_objects::fractional`]).
//!
//! # Examples
//!
//! ```
//! use bond_fabric::application::fabric::Service;
//! use bond_fabric::application::pipeline::TradingPipeline;
//! use bond_fabric::infrastructure::connectors::MarketDataConnector;
//! use std::io::Cursor;
//!
//! let pipeline = TradingPipeline::new();
//!
//! // A depth-5 snapshot with a zero spread at the top of the book
//! // triggers an execution.
//! let stream = "\
//! 912828M80,100-000,1000000,BID\n\
//! 912828M80,100-001,1000000,BID\n\
//! 912828M80,100-002,1000000,BID\n\
//! 912828M80,100-003,1000000,BID\n\
//! 912828M80,100-004,1000000,BID\n\
//! 912828M80,100-004,1000000,OFFER\n\
//! 912828M80,100-005,1000000,OFFER\n\
//! 912828M80,100-006,1000000,OFFER\n\
//! 912828M80,100-007,1000000,OFFER\n\
//! 912828M80,100-010,1000000,OFFER\n";
//! MarketDataConnector::subscribe(&mut pipeline.market_data.borrow_mut(), Cursor::new(stream))
//!     .unwrap();
//!
//! assert!(pipeline.execution.borrow().get_data("912828M80").is_some());
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::fabric::{Connector, Service, ServiceListener};
pub use application::pipeline::TradingPipeline;
pub use application::services::{
    AlgoExecutionService, ExecutionService, InquiryService, MarketDataService, PricingService,
};
pub use domain::entities::{
    AlgoExecution, BidOffer, Bond, ExecutionOrder, Inquiry, Order, OrderBook, Price,
};
pub use domain::value_objects::{InquiryState, Market, OrderIdGenerator, OrderType, PricingSide, Side};
