//! # Value Objects
//!
//! Immutable types with validation and wire semantics.
//!
//! ## Numeric / Encoding
//!
//! - [`fractional`]: 32nds/256ths Treasury price codec
//! - [`ids`]: Park–Miller order-id generator
//! - [`timestamp`]: UTC timestamp with the log-line format
//!
//! ## Domain Enums
//!
//! - [`enums`]: `Side`, `PricingSide`, `OrderType`, `Market`
//! - [`inquiry_state`]: inquiry lifecycle states

pub mod enums;
pub mod fractional;
pub mod ids;
pub mod inquiry_state;
pub mod timestamp;

pub use enums::{Market, OrderType, ParseEnumError, PricingSide, Side};
pub use ids::OrderIdGenerator;
pub use inquiry_state::InquiryState;
pub use timestamp::Timestamp;
