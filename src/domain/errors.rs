//! # Domain Errors
//!
//! Error types for domain-level rule violations.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::value_objects::inquiry_state::InquiryState;

/// Error raised by domain entities when an invariant or transition rule
/// is violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A bid/offer spread was negative.
    #[error("negative bid/offer spread: {0}")]
    NegativeSpread(Decimal),

    /// An inquiry transition was requested from an incompatible state.
    #[error("invalid inquiry transition: {from} -> {to}")]
    InvalidStateTransition {
        /// The state the inquiry is currently in.
        from: InquiryState,
        /// The state that was requested.
        to: InquiryState,
    },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
