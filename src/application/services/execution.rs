//! # Execution Service
//!
//! Accepts algo decisions and publishes them as executions.

use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::application::fabric::{Service, ServiceListener};
use crate::domain::entities::execution::ExecutionOrder;
use crate::domain::value_objects::enums::Market;

/// Service for executing orders on an exchange, keyed on product
/// identifier.
///
/// `on_message` stores the order without notifying anyone;
/// [`execute_order`](Self::execute_order) stores again (an idempotent
/// overwrite) and then fans out to listeners. Downstream consumers such
/// as trade booking and history subscribe here.
#[derive(Default)]
pub struct ExecutionService {
    execution_orders: HashMap<String, ExecutionOrder>,
    listeners: Vec<Rc<dyn ServiceListener<ExecutionOrder>>>,
}

impl ExecutionService {
    /// Creates an empty execution service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes an order on a market.
    ///
    /// Stores the order under its product and notifies every listener
    /// via `process_add`. The `market` is recorded for diagnostics only;
    /// venue routing is a future extension point.
    pub fn execute_order(&mut self, order: ExecutionOrder, market: Market) {
        let key = order.product().product_id().to_string();
        debug!(
            product = %key,
            order_id = %order.order_id(),
            market = %market,
            "executing order"
        );
        self.execution_orders.insert(key.clone(), order);
        if let Some(stored) = self.execution_orders.get(&key) {
            for listener in &self.listeners {
                listener.process_add(stored);
            }
        }
    }
}

impl Service<ExecutionOrder> for ExecutionService {
    fn get_data(&self, key: &str) -> Option<&ExecutionOrder> {
        self.execution_orders.get(key)
    }

    /// Stores the order without notifying listeners.
    fn on_message(&mut self, data: ExecutionOrder) {
        let key = data.product().product_id().to_string();
        self.execution_orders.insert(key, data);
    }

    fn add_listener(&mut self, listener: Rc<dyn ServiceListener<ExecutionOrder>>) {
        self.listeners.push(listener);
    }

    fn listeners(&self) -> &[Rc<dyn ServiceListener<ExecutionOrder>>] {
        &self.listeners
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::bond::{Bond, BondIdType};
    use crate::domain::value_objects::enums::{OrderType, PricingSide};
    use rust_decimal::Decimal;
    use std::cell::RefCell;

    fn order(order_id: &str) -> ExecutionOrder {
        let bond = Bond::new(
            "9128283F5",
            BondIdType::Cusip,
            "US10Y",
            Decimal::new(225, 4),
            chrono::NaiveDate::default(),
        );
        ExecutionOrder::new(
            bond,
            PricingSide::Bid,
            order_id,
            OrderType::Market,
            Decimal::from(99),
            1_000_000,
            0,
            "",
            false,
        )
    }

    struct Recorder {
        order_ids: Rc<RefCell<Vec<String>>>,
    }

    impl ServiceListener<ExecutionOrder> for Recorder {
        fn process_add(&self, data: &ExecutionOrder) {
            self.order_ids.borrow_mut().push(data.order_id().to_string());
        }
    }

    #[test]
    fn on_message_stores_without_notifying() {
        let order_ids = Rc::new(RefCell::new(Vec::new()));
        let mut execution = ExecutionService::new();
        execution.add_listener(Rc::new(Recorder {
            order_ids: Rc::clone(&order_ids),
        }));

        execution.on_message(order("QUIET0000001"));

        assert!(order_ids.borrow().is_empty());
        assert!(execution.get_data("9128283F5").is_some());
    }

    #[test]
    fn execute_order_stores_and_notifies() {
        let order_ids = Rc::new(RefCell::new(Vec::new()));
        let mut execution = ExecutionService::new();
        execution.add_listener(Rc::new(Recorder {
            order_ids: Rc::clone(&order_ids),
        }));

        execution.execute_order(order("LOUD00000001"), Market::Brokertec);

        assert_eq!(*order_ids.borrow(), vec!["LOUD00000001".to_string()]);
        assert_eq!(
            execution.get_data("9128283F5").unwrap().order_id(),
            "LOUD00000001"
        );
    }

    #[test]
    fn store_then_execute_is_an_idempotent_overwrite() {
        let mut execution = ExecutionService::new();
        let o = order("SAME00000001");

        execution.on_message(o.clone());
        execution.execute_order(o.clone(), Market::Cme);

        assert_eq!(execution.get_data("9128283F5").unwrap(), &o);
    }
}
