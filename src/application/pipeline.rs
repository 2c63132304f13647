//! # Pipeline Wiring
//!
//! Cross-service listeners and the composition root that wires the
//! five stages together.
//!
//! The listeners translate between the data models of adjacent stages:
//! order book adds trigger the algo decision, and algo emissions are
//! relayed into the execution service. Each listener holds a non-owning
//! subscription handle to its downstream service; the graph has no
//! ownership cycles.

use std::cell::RefCell;
use std::rc::Rc;

use crate::application::config::{AlgoConfig, MarketDataConfig};
use crate::application::fabric::{Service, ServiceListener};
use crate::application::services::algo_execution::AlgoExecutionService;
use crate::application::services::execution::ExecutionService;
use crate::application::services::inquiry::InquiryService;
use crate::application::services::market_data::MarketDataService;
use crate::application::services::pricing::PricingService;
use crate::domain::entities::execution::AlgoExecution;
use crate::domain::entities::order_book::OrderBook;
use crate::domain::value_objects::enums::Market;

/// Listener feeding order book adds into the algo execution decision.
pub struct MarketDataToAlgoListener {
    algo_execution: Rc<RefCell<AlgoExecutionService>>,
}

impl MarketDataToAlgoListener {
    /// Creates a listener driving the given algo execution service.
    #[must_use]
    pub fn new(algo_execution: Rc<RefCell<AlgoExecutionService>>) -> Self {
        Self { algo_execution }
    }
}

impl ServiceListener<OrderBook> for MarketDataToAlgoListener {
    fn process_add(&self, data: &OrderBook) {
        self.algo_execution.borrow_mut().on_order_book(data);
    }
}

/// Listener relaying algo emissions into the execution service.
///
/// Each emission is both stored (`on_message`) and executed
/// (`execute_order`), which re-publishes to the execution service's own
/// listeners.
pub struct AlgoToExecutionListener {
    execution: Rc<RefCell<ExecutionService>>,
}

impl AlgoToExecutionListener {
    /// Creates a listener driving the given execution service.
    #[must_use]
    pub fn new(execution: Rc<RefCell<ExecutionService>>) -> Self {
        Self { execution }
    }
}

impl ServiceListener<AlgoExecution> for AlgoToExecutionListener {
    fn process_add(&self, data: &AlgoExecution) {
        let order = data.execution_order().clone();
        let mut execution = self.execution.borrow_mut();
        execution.on_message(order.clone());
        execution.execute_order(order, Market::Brokertec);
    }
}

/// The wired trading fabric.
///
/// Owns the five services and installs the cross-service listeners so
/// that, for a single product, events flow
/// market data → algo execution → execution in input order, each
/// publication completing (including downstream fan-out) before the next
/// begins.
///
/// # Examples
///
/// ```
/// use bond_fabric::application::pipeline::TradingPipeline;
///
/// let pipeline = TradingPipeline::new();
/// assert_eq!(pipeline.algo_execution.borrow().crossings(), 0);
/// ```
pub struct TradingPipeline {
    /// Mid/spread quote store.
    pub pricing: Rc<RefCell<PricingService>>,
    /// Order book store.
    pub market_data: Rc<RefCell<MarketDataService>>,
    /// Crossing decision stage.
    pub algo_execution: Rc<RefCell<AlgoExecutionService>>,
    /// Execution publication stage.
    pub execution: Rc<RefCell<ExecutionService>>,
    /// Customer RFQ state machine.
    pub inquiry: Rc<RefCell<InquiryService>>,
}

impl TradingPipeline {
    /// Builds the pipeline with default configurations.
    #[must_use]
    pub fn new() -> Self {
        Self::with_configs(MarketDataConfig::default(), AlgoConfig::default())
    }

    /// Builds the pipeline with explicit configurations.
    #[must_use]
    pub fn with_configs(market_data: MarketDataConfig, algo: AlgoConfig) -> Self {
        let pricing = Rc::new(RefCell::new(PricingService::new()));
        let market_data = Rc::new(RefCell::new(MarketDataService::with_config(market_data)));
        let algo_execution = Rc::new(RefCell::new(AlgoExecutionService::with_config(algo)));
        let execution = Rc::new(RefCell::new(ExecutionService::new()));
        let inquiry = Rc::new(RefCell::new(InquiryService::new()));

        market_data
            .borrow_mut()
            .add_listener(Rc::new(MarketDataToAlgoListener::new(Rc::clone(
                &algo_execution,
            ))));
        algo_execution
            .borrow_mut()
            .add_listener(Rc::new(AlgoToExecutionListener::new(Rc::clone(&execution))));

        Self {
            pricing,
            market_data,
            algo_execution,
            execution,
            inquiry,
        }
    }
}

impl Default for TradingPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::bond::{Bond, BondIdType};
    use crate::domain::entities::execution::ExecutionOrder;
    use crate::domain::entities::order_book::Order;
    use crate::domain::value_objects::enums::PricingSide;
    use crate::domain::value_objects::fractional;
    use rust_decimal::Decimal;

    fn px(text: &str) -> Decimal {
        fractional::decode(text).unwrap()
    }

    fn tight_book() -> OrderBook {
        let bond = Bond::new(
            "912828M80",
            BondIdType::Cusip,
            "US5Y",
            Decimal::new(2, 2),
            chrono::NaiveDate::default(),
        );
        OrderBook::new(
            bond,
            vec![Order::new(px("100-004"), 1_000_000, PricingSide::Bid)],
            vec![Order::new(px("100-004"), 1_000_000, PricingSide::Offer)],
        )
    }

    struct ExecutionRecorder {
        orders: Rc<RefCell<Vec<ExecutionOrder>>>,
    }

    impl ServiceListener<ExecutionOrder> for ExecutionRecorder {
        fn process_add(&self, data: &ExecutionOrder) {
            self.orders.borrow_mut().push(data.clone());
        }
    }

    #[test]
    fn book_add_flows_through_to_execution_listeners() {
        let pipeline = TradingPipeline::new();
        let orders = Rc::new(RefCell::new(Vec::new()));
        pipeline
            .execution
            .borrow_mut()
            .add_listener(Rc::new(ExecutionRecorder {
                orders: Rc::clone(&orders),
            }));

        pipeline.market_data.borrow_mut().on_message(tight_book());

        let orders = orders.borrow();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].side(), PricingSide::Bid);
        assert_eq!(orders[0].price(), px("100-004"));

        assert!(pipeline.execution.borrow().get_data("912828M80").is_some());
        assert!(pipeline
            .algo_execution
            .borrow()
            .get_data("912828M80")
            .is_some());
    }

    #[test]
    fn per_product_order_is_preserved_across_stages() {
        let pipeline = TradingPipeline::new();
        let orders = Rc::new(RefCell::new(Vec::new()));
        pipeline
            .execution
            .borrow_mut()
            .add_listener(Rc::new(ExecutionRecorder {
                orders: Rc::clone(&orders),
            }));

        pipeline.market_data.borrow_mut().on_message(tight_book());
        pipeline.market_data.borrow_mut().on_message(tight_book());

        let sides: Vec<PricingSide> = orders.borrow().iter().map(ExecutionOrder::side).collect();
        assert_eq!(sides, vec![PricingSide::Bid, PricingSide::Offer]);
    }
}
