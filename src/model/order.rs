use super::pizza::{Pizza, PrepStep};

/// A pizza that went through the ordering workflow.
///
/// Built by [`PizzaStore::order_pizza`](crate::store::PizzaStore::order_pizza).
/// The order owns its pizza outright; the store that produced it keeps nothing.
#[derive(Debug)]
pub struct Order {
    /// Name of the store that took the order.
    pub store: &'static str,
    /// Identifier the pizza was ordered with (e.g. `"cheese"`).
    pub kind: String,
    pub pizza: Box<dyn Pizza>,
    /// Workflow steps in the order they were applied.
    pub steps: Vec<PrepStep>,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `store` - Name of the store that built the pizza
    /// * `kind` - Identifier the pizza was ordered with
    /// * `pizza` - The pizza itself
    /// * `steps` - Workflow steps already applied to `pizza`
    pub fn new(
        store: &'static str,
        kind: impl Into<String>,
        pizza: Box<dyn Pizza>,
        steps: Vec<PrepStep>,
    ) -> Self {
        Self {
            store,
            kind: kind.into(),
            pizza,
            steps,
        }
    }

    /// An order is ready once the pizza has been boxed.
    pub fn is_ready(&self) -> bool {
        matches!(self.steps.last(), Some(PrepStep::Boxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NyStyleCheesePizza;

    #[test]
    fn test_order_not_ready_until_boxed() {
        let order = Order::new(
            "Test Store",
            "cheese",
            Box::new(NyStyleCheesePizza),
            vec![PrepStep::Prepare],
        );
        assert!(!order.is_ready());

        let order = Order::new(
            "Test Store",
            "cheese",
            Box::new(NyStyleCheesePizza),
            vec![PrepStep::Prepare, PrepStep::Boxed],
        );
        assert!(order.is_ready());
    }
}
