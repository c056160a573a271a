use crate::lifecycle::Region;
use crate::model::Order;
use crate::store::{ChicagoPizzaStore, NyPizzaStore, PizzaStore, StoreError};
use std::sync::Arc;
use tracing::info;

/// Owns one store per [`Region`] for the lifetime of the application.
///
/// `Franchise` is responsible for:
/// - **Construction**: Building each regional store exactly once at start-up
/// - **Selection**: Handing out the store for a region as `Arc<dyn PizzaStore>`
///
/// Stores are stateless, so the handles can be cloned into as many tasks as
/// needed. Dropping the franchise while tasks still hold handles is fine.
///
/// # Example
///
/// ```rust
/// use pizza_store::lifecycle::{Franchise, Region};
///
/// let franchise = Franchise::new();
/// let order = franchise.order(Region::Chicago, "cheese").unwrap();
/// assert!(order.is_ready());
/// ```
pub struct Franchise {
    new_york: Arc<dyn PizzaStore>,
    chicago: Arc<dyn PizzaStore>,
}

impl Franchise {
    /// Opens every regional store.
    pub fn new() -> Self {
        let new_york: Arc<dyn PizzaStore> = Arc::new(NyPizzaStore);
        let chicago: Arc<dyn PizzaStore> = Arc::new(ChicagoPizzaStore);

        for store in [&new_york, &chicago] {
            info!(store = store.name(), menu = ?store.kinds(), "Store opened");
        }

        Self { new_york, chicago }
    }

    /// Returns a shared handle to the store serving `region`.
    pub fn store(&self, region: Region) -> Arc<dyn PizzaStore> {
        match region {
            Region::NewYork => Arc::clone(&self.new_york),
            Region::Chicago => Arc::clone(&self.chicago),
        }
    }

    /// Places an order with the store serving `region`.
    pub fn order(&self, region: Region, kind: &str) -> Result<Order, StoreError> {
        self.store(region).order_pizza(kind)
    }
}

impl Default for Franchise {
    fn default() -> Self {
        Self::new()
    }
}
