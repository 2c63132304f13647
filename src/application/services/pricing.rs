//! # Pricing Service
//!
//! Keyed store of the latest mid/spread quote per product.

use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::application::fabric::{Service, ServiceListener};
use crate::domain::entities::price::Price;

/// Service managing mid prices and bid/offer spreads, keyed on product
/// identifier.
///
/// `on_message` overwrites the stored quote for the product and then
/// notifies every listener via `process_add`.
///
/// # Examples
///
/// ```
/// use bond_fabric::application::fabric::Service;
/// use bond_fabric::application::services::pricing::PricingService;
/// use bond_fabric::domain::entities::bond::Bond;
/// use bond_fabric::domain::entities::price::Price;
/// use rust_decimal::Decimal;
///
/// let mut pricing = PricingService::new();
/// let quote = Price::new(Bond::default(), Decimal::from(99), Decimal::ZERO).unwrap();
/// pricing.on_message(quote);
/// assert!(pricing.get_data("").is_some());
/// ```
#[derive(Default)]
pub struct PricingService {
    prices: HashMap<String, Price>,
    listeners: Vec<Rc<dyn ServiceListener<Price>>>,
}

impl PricingService {
    /// Creates an empty pricing service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Service<Price> for PricingService {
    fn get_data(&self, key: &str) -> Option<&Price> {
        self.prices.get(key)
    }

    fn on_message(&mut self, data: Price) {
        let key = data.product().product_id().to_string();
        debug!(product = %key, mid = %data.mid(), "price quote");
        self.prices.insert(key.clone(), data);
        if let Some(stored) = self.prices.get(&key) {
            for listener in &self.listeners {
                listener.process_add(stored);
            }
        }
    }

    fn add_listener(&mut self, listener: Rc<dyn ServiceListener<Price>>) {
        self.listeners.push(listener);
    }

    fn listeners(&self) -> &[Rc<dyn ServiceListener<Price>>] {
        &self.listeners
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::bond::Bond;
    use rust_decimal::Decimal;
    use std::cell::RefCell;

    struct Recorder {
        mids: Rc<RefCell<Vec<Decimal>>>,
    }

    impl ServiceListener<Price> for Recorder {
        fn process_add(&self, data: &Price) {
            self.mids.borrow_mut().push(data.mid());
        }
    }

    fn quote(product_id: &str, mid: Decimal) -> Price {
        let bond = Bond::new(
            product_id,
            crate::domain::entities::bond::BondIdType::Cusip,
            "",
            Decimal::ZERO,
            chrono::NaiveDate::default(),
        );
        Price::new(bond, mid, Decimal::ZERO).unwrap()
    }

    #[test]
    fn stores_and_returns_latest_quote() {
        let mut pricing = PricingService::new();
        pricing.on_message(quote("9128283H1", Decimal::from(99)));
        pricing.on_message(quote("9128283H1", Decimal::from(100)));

        let stored = pricing.get_data("9128283H1").unwrap();
        assert_eq!(stored.mid(), Decimal::from(100));
    }

    #[test]
    fn missing_key_returns_none() {
        let pricing = PricingService::new();
        assert!(pricing.get_data("9128283H1").is_none());
    }

    #[test]
    fn notifies_each_listener_per_publication() {
        let mids = Rc::new(RefCell::new(Vec::new()));
        let mut pricing = PricingService::new();
        pricing.add_listener(Rc::new(Recorder {
            mids: Rc::clone(&mids),
        }));
        pricing.add_listener(Rc::new(Recorder {
            mids: Rc::clone(&mids),
        }));

        pricing.on_message(quote("9128283H1", Decimal::from(99)));
        assert_eq!(mids.borrow().len(), 2);
    }

    #[test]
    fn separate_products_do_not_collide() {
        let mut pricing = PricingService::new();
        pricing.on_message(quote("9128283H1", Decimal::from(99)));
        pricing.on_message(quote("912828M80", Decimal::from(101)));

        assert_eq!(pricing.get_data("9128283H1").unwrap().mid(), Decimal::from(99));
        assert_eq!(pricing.get_data("912828M80").unwrap().mid(), Decimal::from(101));
    }
}
