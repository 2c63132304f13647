//! # Infrastructure Layer
//!
//! Boundary adapters and static reference data: the stream connectors
//! and the Treasury product registry.

pub mod connectors;
pub mod registry;

pub use connectors::{ConnectorError, ConnectorResult, IngestReport};
