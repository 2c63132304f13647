//! # Service Fabric Contracts
//!
//! The generic keyed-store / pub-sub contracts every stage of the
//! pipeline implements:
//!
//! - [`Service`]: a keyed store of the latest value per string key,
//!   publishing add events to its listeners
//! - [`ServiceListener`]: a consumer of a service's add/update/remove
//!   events
//! - [`Connector`]: a boundary adapter between a service and an external
//!   stream
//!
//! The fabric is single-threaded and cooperative: every `on_message`
//! fans out to listeners synchronously, in insertion order, and returns
//! only once all downstream work has completed. Listener handles are
//! `Rc<dyn ServiceListener<_>>`; listeners that need state use interior
//! mutability. Values are handed to listeners as borrows into the owning
//! service's storage, so a listener cannot retain them past the call.

use std::rc::Rc;

/// Consumer of a service's data events.
///
/// Callbacks a listener does not care about are left as the default
/// no-ops.
pub trait ServiceListener<V> {
    /// Called for a new or overwritten value on the source service.
    fn process_add(&self, data: &V);

    /// Called when a value is removed from the source service.
    fn process_remove(&self, _data: &V) {}

    /// Called for an in-place update on the source service.
    fn process_update(&self, _data: &V) {}
}

/// A keyed store with pub/sub outputs.
///
/// Keys are strings: the product identifier for price, book and
/// execution stages, the inquiry identifier for inquiries. Publishing a
/// value under an existing key overwrites the prior value.
///
/// `on_message` is the single ingress for new or updated values; it
/// updates the store and notifies listeners via
/// [`ServiceListener::process_add`] unless the concrete service
/// documents a different policy.
pub trait Service<V> {
    /// Returns the current value for a key, if any.
    fn get_data(&self, key: &str) -> Option<&V>;

    /// Ingests a new or updated value.
    fn on_message(&mut self, data: V);

    /// Installs a listener. Listeners are notified in installation order.
    fn add_listener(&mut self, listener: Rc<dyn ServiceListener<V>>);

    /// Returns the installed listeners, in installation order.
    fn listeners(&self) -> &[Rc<dyn ServiceListener<V>>];
}

/// Boundary adapter between a service and an external stream.
///
/// The outbound direction is [`publish`](Connector::publish);
/// subscribe-only connectors keep the default no-op. The inbound
/// direction is an inherent `subscribe` on each concrete connector
/// (generic over the input reader, so it is not part of this
/// object-safe contract).
pub trait Connector<V> {
    /// Pushes a value out through the boundary.
    fn publish(&mut self, _data: &V) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Minimal service used to pin down the fabric contract itself.
    #[derive(Default)]
    struct CountingService {
        store: HashMap<String, u64>,
        listeners: Vec<Rc<dyn ServiceListener<u64>>>,
    }

    impl Service<u64> for CountingService {
        fn get_data(&self, key: &str) -> Option<&u64> {
            self.store.get(key)
        }

        fn on_message(&mut self, data: u64) {
            self.store.insert("only".to_string(), data);
            if let Some(stored) = self.store.get("only") {
                for listener in &self.listeners {
                    listener.process_add(stored);
                }
            }
        }

        fn add_listener(&mut self, listener: Rc<dyn ServiceListener<u64>>) {
            self.listeners.push(listener);
        }

        fn listeners(&self) -> &[Rc<dyn ServiceListener<u64>>] {
            &self.listeners
        }
    }

    struct Tagger {
        tag: u64,
        log: Rc<RefCell<Vec<u64>>>,
    }

    impl ServiceListener<u64> for Tagger {
        fn process_add(&self, _data: &u64) {
            self.log.borrow_mut().push(self.tag);
        }
    }

    #[test]
    fn listeners_fire_in_installation_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut service = CountingService::default();
        for tag in [1, 2, 3] {
            service.add_listener(Rc::new(Tagger {
                tag,
                log: Rc::clone(&log),
            }));
        }

        service.on_message(42);
        assert_eq!(*log.borrow(), vec![1, 2, 3]);
        assert_eq!(service.listeners().len(), 3);
    }

    #[test]
    fn overwrite_semantics() {
        let mut service = CountingService::default();
        service.on_message(1);
        service.on_message(2);
        assert_eq!(service.get_data("only"), Some(&2));
        assert_eq!(service.get_data("missing"), None);
    }

    #[test]
    fn default_callbacks_are_no_ops() {
        struct AddOnly;
        impl ServiceListener<u64> for AddOnly {
            fn process_add(&self, _data: &u64) {}
        }
        // Just exercising the defaults; nothing observable should happen.
        let listener = AddOnly;
        listener.process_remove(&1);
        listener.process_update(&1);
    }
}
