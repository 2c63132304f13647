//! # Stream Connectors
//!
//! Boundary adapters between the services and their external line
//! streams. All three connectors are subscribe-only and tolerant:
//! malformed records are skipped with a diagnostic, never propagated,
//! and the stream is consumed to end-of-input within the `subscribe`
//! call.

pub mod inquiry;
pub mod market_data;
pub mod pricing;

use thiserror::Error;

pub use inquiry::InquiryConnector;
pub use market_data::MarketDataConnector;
pub use pricing::PricingConnector;

/// Error type for connector subscriptions.
///
/// Only stream-level failures surface here; per-record problems are
/// counted in the [`IngestReport`] instead.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// Reading from the input stream failed.
    #[error("stream read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for connector subscriptions.
pub type ConnectorResult<T> = Result<T, ConnectorError>;

/// Summary of one subscription pass over a stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Number of values published into the service.
    pub published: usize,
    /// Number of records dropped as malformed or incomplete.
    pub skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "boom");
        let err = ConnectorError::from(io);
        assert!(err.to_string().contains("stream read failed"));
    }

    #[test]
    fn report_default_is_empty() {
        let report = IngestReport::default();
        assert_eq!(report.published, 0);
        assert_eq!(report.skipped, 0);
    }
}
