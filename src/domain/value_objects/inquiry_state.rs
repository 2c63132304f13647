//! # Inquiry State
//!
//! Lifecycle states of a customer inquiry.
//!
//! The happy path bounces an inquiry through
//! `Received → Quoted → Done`; `Rejected` and `CustomerRejected` are the
//! terminal failure states.
//!
//! # State Machine
//!
//! ```text
//! Received → Quoted → Done
//!     ↓         ↓
//!     └─────────┴→ Rejected / CustomerRejected
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::value_objects::enums::ParseEnumError;

/// Lifecycle state of a customer inquiry.
///
/// # Terminal States
///
/// - [`Done`](InquiryState::Done): quoted and completed
/// - [`Rejected`](InquiryState::Rejected): rejected by the desk
/// - [`CustomerRejected`](InquiryState::CustomerRejected): rejected by the client
///
/// # Examples
///
/// ```
/// use bond_fabric::domain::value_objects::inquiry_state::InquiryState;
///
/// assert!(!InquiryState::Received.is_terminal());
/// assert!(InquiryState::Done.is_terminal());
/// assert_eq!(InquiryState::CustomerRejected.to_string(), "CUSTOMER_REJECTED");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum InquiryState {
    /// The inquiry has arrived and is awaiting a quote.
    Received = 0,

    /// A quote has been produced and is on its way back to the client.
    Quoted = 1,

    /// The inquiry completed (terminal).
    Done = 2,

    /// The desk rejected the inquiry (terminal).
    Rejected = 3,

    /// The client rejected the quote (terminal).
    CustomerRejected = 4,
}

impl InquiryState {
    /// Returns true if this is a terminal state.
    ///
    /// Re-delivery of an inquiry in a terminal state is an idempotent
    /// no-op in the inquiry service.
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Rejected | Self::CustomerRejected)
    }

    /// Returns true if this is an active (non-terminal) state.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.is_terminal()
    }
}

impl fmt::Display for InquiryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Received => "RECEIVED",
            Self::Quoted => "QUOTED",
            Self::Done => "DONE",
            Self::Rejected => "REJECTED",
            Self::CustomerRejected => "CUSTOMER_REJECTED",
        };
        write!(f, "{s}")
    }
}

impl FromStr for InquiryState {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RECEIVED" => Ok(Self::Received),
            "QUOTED" => Ok(Self::Quoted),
            "DONE" => Ok(Self::Done),
            "REJECTED" => Ok(Self::Rejected),
            "CUSTOMER_REJECTED" => Ok(Self::CustomerRejected),
            _ => Err(ParseEnumError::InvalidValue("InquiryState", s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const ALL: [InquiryState; 5] = [
        InquiryState::Received,
        InquiryState::Quoted,
        InquiryState::Done,
        InquiryState::Rejected,
        InquiryState::CustomerRejected,
    ];

    #[test]
    fn terminal_states() {
        assert!(!InquiryState::Received.is_terminal());
        assert!(!InquiryState::Quoted.is_terminal());
        assert!(InquiryState::Done.is_terminal());
        assert!(InquiryState::Rejected.is_terminal());
        assert!(InquiryState::CustomerRejected.is_terminal());
    }

    #[test]
    fn active_is_not_terminal() {
        for state in ALL {
            assert_eq!(state.is_active(), !state.is_terminal());
        }
    }

    #[test]
    fn display_and_from_str_roundtrip() {
        for state in ALL {
            assert_eq!(state.to_string().parse::<InquiryState>().unwrap(), state);
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!("PENDING".parse::<InquiryState>().is_err());
        assert!("done".parse::<InquiryState>().is_err());
    }

    #[test]
    fn serde_uses_wire_form() {
        assert_eq!(
            serde_json::to_string(&InquiryState::CustomerRejected).unwrap(),
            "\"CUSTOMER_REJECTED\""
        );
        let back: InquiryState = serde_json::from_str("\"QUOTED\"").unwrap();
        assert_eq!(back, InquiryState::Quoted);
    }
}
