//! # Inquiry Service
//!
//! Customer RFQ state machine, keyed on inquiry identifier.
//!
//! A `RECEIVED` inquiry is stored and immediately auto-quoted: the
//! service mutates the state to `QUOTED` and re-enters its own
//! `on_message`, which completes the inquiry to `DONE`, stores it and
//! fans out to listeners. The whole `RECEIVED → QUOTED → DONE` round
//! trip runs synchronously inside the outer `on_message` call, so every
//! listener observes exactly one `process_add` per received inquiry,
//! already in the `DONE` state.
//!
//! The auto-quote used to bounce through the connector's publish path;
//! it is now an internal transition with identical observable behavior.

use std::collections::HashMap;
use std::rc::Rc;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::application::fabric::{Service, ServiceListener};
use crate::domain::entities::inquiry::Inquiry;
use crate::domain::value_objects::inquiry_state::InquiryState;

/// Service for customer inquiries.
///
/// Keyed on the inquiry identifier (not a product identifier - every
/// inquiry is unique).
#[derive(Default)]
pub struct InquiryService {
    inquiries: HashMap<String, Inquiry>,
    listeners: Vec<Rc<dyn ServiceListener<Inquiry>>>,
}

impl InquiryService {
    /// Creates an empty inquiry service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sends an explicit quote back to the client.
    ///
    /// Overwrites the stored inquiry's price and notifies listeners.
    /// The state is left untouched; this path is distinct from the
    /// auto-quote performed on ingest. Unknown inquiry identifiers are
    /// ignored with a diagnostic.
    pub fn send_quote(&mut self, inquiry_id: &str, price: Decimal) {
        let Some(inquiry) = self.inquiries.get_mut(inquiry_id) else {
            warn!(inquiry_id, "send_quote for unknown inquiry");
            return;
        };
        inquiry.set_price(price);
        if let Some(stored) = self.inquiries.get(inquiry_id) {
            for listener in &self.listeners {
                listener.process_add(stored);
            }
        }
    }

    /// Rejects an inquiry from the client.
    ///
    /// Sets the stored state to `REJECTED` without notifying listeners.
    /// Unknown inquiry identifiers are ignored with a diagnostic.
    pub fn reject_inquiry(&mut self, inquiry_id: &str) {
        let Some(inquiry) = self.inquiries.get_mut(inquiry_id) else {
            warn!(inquiry_id, "reject for unknown inquiry");
            return;
        };
        inquiry.reject();
    }
}

impl Service<Inquiry> for InquiryService {
    fn get_data(&self, key: &str) -> Option<&Inquiry> {
        self.inquiries.get(key)
    }

    /// Drives the inquiry state machine.
    ///
    /// - `RECEIVED`: store, auto-quote to `QUOTED` and re-enter.
    /// - `QUOTED`: complete to `DONE`, store, notify listeners.
    /// - terminal states: idempotent no-op.
    fn on_message(&mut self, mut data: Inquiry) {
        match data.state() {
            InquiryState::Received => {
                self.inquiries
                    .insert(data.inquiry_id().to_string(), data.clone());
                if data.quote().is_ok() {
                    self.on_message(data);
                }
            }
            InquiryState::Quoted => {
                if data.complete().is_err() {
                    return;
                }
                let key = data.inquiry_id().to_string();
                debug!(inquiry_id = %key, "inquiry done");
                self.inquiries.insert(key.clone(), data);
                if let Some(stored) = self.inquiries.get(&key) {
                    for listener in &self.listeners {
                        listener.process_add(stored);
                    }
                }
            }
            InquiryState::Done | InquiryState::Rejected | InquiryState::CustomerRejected => {}
        }
    }

    fn add_listener(&mut self, listener: Rc<dyn ServiceListener<Inquiry>>) {
        self.listeners.push(listener);
    }

    fn listeners(&self) -> &[Rc<dyn ServiceListener<Inquiry>>] {
        &self.listeners
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::bond::Bond;
    use crate::domain::value_objects::enums::Side;
    use std::cell::RefCell;

    fn received(inquiry_id: &str) -> Inquiry {
        Inquiry::new(
            inquiry_id,
            Bond::default(),
            Side::Buy,
            1_000_000,
            Decimal::from(99),
            InquiryState::Received,
        )
    }

    struct Recorder {
        seen: Rc<RefCell<Vec<(String, InquiryState, Decimal)>>>,
    }

    impl ServiceListener<Inquiry> for Recorder {
        fn process_add(&self, data: &Inquiry) {
            self.seen.borrow_mut().push((
                data.inquiry_id().to_string(),
                data.state(),
                data.price(),
            ));
        }
    }

    fn service_with_recorder() -> (InquiryService, Rc<RefCell<Vec<(String, InquiryState, Decimal)>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut service = InquiryService::new();
        service.add_listener(Rc::new(Recorder {
            seen: Rc::clone(&seen),
        }));
        (service, seen)
    }

    #[test]
    fn received_inquiry_completes_to_done_with_one_notification() {
        let (mut service, seen) = service_with_recorder();
        service.on_message(received("INQ1"));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "INQ1");
        assert_eq!(seen[0].1, InquiryState::Done);
        assert_eq!(seen[0].2, Decimal::from(99));

        assert_eq!(
            service.get_data("INQ1").unwrap().state(),
            InquiryState::Done
        );
    }

    #[test]
    fn each_listener_sees_exactly_one_add() {
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));
        let mut service = InquiryService::new();
        service.add_listener(Rc::new(Recorder {
            seen: Rc::clone(&first),
        }));
        service.add_listener(Rc::new(Recorder {
            seen: Rc::clone(&second),
        }));

        service.on_message(received("INQ1"));

        assert_eq!(first.borrow().len(), 1);
        assert_eq!(second.borrow().len(), 1);
    }

    #[test]
    fn quoted_arrival_goes_straight_to_done() {
        let (mut service, seen) = service_with_recorder();
        let mut inquiry = received("INQ2");
        inquiry.quote().unwrap();

        service.on_message(inquiry);

        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(
            service.get_data("INQ2").unwrap().state(),
            InquiryState::Done
        );
    }

    #[test]
    fn terminal_states_are_no_ops() {
        let (mut service, seen) = service_with_recorder();
        for state in [
            InquiryState::Done,
            InquiryState::Rejected,
            InquiryState::CustomerRejected,
        ] {
            let inquiry = Inquiry::new(
                "TERM",
                Bond::default(),
                Side::Sell,
                1,
                Decimal::ZERO,
                state,
            );
            service.on_message(inquiry);
        }

        assert!(seen.borrow().is_empty());
        assert!(service.get_data("TERM").is_none());
    }

    #[test]
    fn redelivery_of_done_inquiry_is_idempotent() {
        let (mut service, seen) = service_with_recorder();
        service.on_message(received("INQ1"));

        let done = service.get_data("INQ1").unwrap().clone();
        service.on_message(done);

        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn send_quote_overwrites_price_and_notifies_without_state_change() {
        let (mut service, seen) = service_with_recorder();
        service.on_message(received("INQ1"));
        seen.borrow_mut().clear();

        service.send_quote("INQ1", Decimal::from(100));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].1, InquiryState::Done);
        assert_eq!(seen[0].2, Decimal::from(100));
        assert_eq!(service.get_data("INQ1").unwrap().price(), Decimal::from(100));
    }

    #[test]
    fn send_quote_for_unknown_inquiry_is_ignored() {
        let (mut service, seen) = service_with_recorder();
        service.send_quote("MISSING", Decimal::from(100));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn reject_sets_state_without_notifying() {
        let (mut service, seen) = service_with_recorder();
        service.on_message(received("INQ1"));
        seen.borrow_mut().clear();

        service.reject_inquiry("INQ1");

        assert!(seen.borrow().is_empty());
        assert_eq!(
            service.get_data("INQ1").unwrap().state(),
            InquiryState::Rejected
        );
    }

    #[test]
    fn reject_for_unknown_inquiry_is_ignored() {
        let mut service = InquiryService::new();
        service.reject_inquiry("MISSING");
        assert!(service.get_data("MISSING").is_none());
    }
}
