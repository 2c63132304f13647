//! # Application Layer
//!
//! The service fabric contracts, the five pipeline stages, their
//! configuration, and the cross-service wiring.

pub mod config;
pub mod fabric;
pub mod pipeline;
pub mod services;

pub use config::{AlgoConfig, MarketDataConfig};
pub use fabric::{Connector, Service, ServiceListener};
pub use pipeline::TradingPipeline;
