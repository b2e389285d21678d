use kitchen_core::model::Order;

/// A test problem: the orders to simulate and the id to submit against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub test_id: String,
    pub orders: Vec<Order>,
}

impl Problem {
    pub fn new(test_id: impl Into<String>, orders: Vec<Order>) -> Self {
        Self {
            test_id: test_id.into(),
            orders,
        }
    }
}
