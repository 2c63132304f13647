//! # Domain Entities
//!
//! The data model flowing through the fabric:
//!
//! - [`bond::Bond`]: Treasury product metadata
//! - [`order_book`]: `Order`, `BidOffer`, `OrderBook`
//! - [`price::Price`]: mid/spread quote
//! - [`execution`]: `ExecutionOrder`, `AlgoExecution`
//! - [`inquiry::Inquiry`]: customer RFQ

pub mod bond;
pub mod execution;
pub mod inquiry;
pub mod order_book;
pub mod price;

pub use bond::{Bond, BondIdType};
pub use execution::{AlgoExecution, ExecutionOrder};
pub use inquiry::Inquiry;
pub use order_book::{BidOffer, Order, OrderBook};
pub use price::Price;
