//! # Pizza Stores
//!
//! This module defines the [`PizzaStore`] trait: the factory contract every
//! regional store implements, plus the ordering workflow shared by all of them.
//!
//! ## Structure
//!
//! - [`PizzaStore`] - The factory trait (required: [`name`](PizzaStore::name), [`menu`](PizzaStore::menu))
//! - [`menu`] - Static identifier → constructor tables
//! - [`error`] - [`StoreError`] returned for identifiers a store does not sell
//! - [`NyPizzaStore`], [`ChicagoPizzaStore`] - The concrete regional stores
//!
//! ## Usage
//!
//! ```rust
//! use pizza_store::model::Pizza;
//! use pizza_store::store::{ChicagoPizzaStore, NyPizzaStore, PizzaStore, StoreError};
//!
//! let stores: [&dyn PizzaStore; 2] = [&NyPizzaStore, &ChicagoPizzaStore];
//! for store in stores {
//!     let pizza = store.create_pizza("cheese").unwrap();
//!     println!("{} made a {}", store.name(), pizza.name());
//! }
//!
//! assert!(matches!(
//!     NyPizzaStore.create_pizza("veggie"),
//!     Err(StoreError::NotFound { .. })
//! ));
//! ```

pub mod chicago_store;
pub mod error;
pub mod menu;
pub mod ny_store;

pub use chicago_store::ChicagoPizzaStore;
pub use error::*;
pub use menu::MenuEntry;
pub use ny_store::NyPizzaStore;

use crate::model::{Order, Pizza};
use tracing::{debug, info, instrument};

/// Factory contract implemented by every regional store.
///
/// # Architecture Note
/// Implementations only supply *data*: a display name and a static
/// [`menu`](PizzaStore::menu). Creation ([`create_pizza`](PizzaStore::create_pizza))
/// and the ordering workflow ([`order_pizza`](PizzaStore::order_pizza)) are
/// provided methods, so two stores can sell the same identifier as different
/// variants without sharing any code path that could mix them up.
///
/// Stores hold no mutable state. The `Send + Sync` bound lets one store be
/// shared (e.g. behind an `Arc`) by any number of concurrent callers.
pub trait PizzaStore: Send + Sync {
    /// Display name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Identifier table. Identifiers must be pairwise distinct.
    fn menu(&self) -> &'static [MenuEntry];

    /// Builds a new pizza for `kind`.
    ///
    /// Matching is exact and case-sensitive. The returned pizza is owned by
    /// the caller.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] if `kind` is not on this store's menu.
    fn create_pizza(&self, kind: &str) -> Result<Box<dyn Pizza>, StoreError> {
        let store = self.name();
        match menu::lookup(self.menu(), kind) {
            Some(entry) => {
                let pizza = entry.build();
                debug!(store, kind, pizza = pizza.name(), "Created");
                Ok(pizza)
            }
            None => {
                debug!(store, kind, "Not on menu");
                Err(StoreError::not_found(store, kind))
            }
        }
    }

    /// Identifiers this store recognizes, in menu order.
    fn kinds(&self) -> Vec<&'static str> {
        self.menu().iter().map(|entry| entry.kind).collect()
    }

    /// Creates a pizza and runs it through prepare, bake, cut and box.
    ///
    /// Nothing runs for an unknown identifier; the
    /// [`StoreError::NotFound`] from [`create_pizza`](PizzaStore::create_pizza)
    /// is returned as is.
    #[instrument(skip(self), fields(store = self.name()))]
    fn order_pizza(&self, kind: &str) -> Result<Order, StoreError> {
        let pizza = self.create_pizza(kind)?;

        let steps = vec![pizza.prepare(), pizza.bake(), pizza.cut(), pizza.boxed()];
        for step in &steps {
            debug!(?step, "Step");
        }

        info!(pizza = pizza.name(), "Order ready");
        Ok(Order::new(self.name(), kind, pizza, steps))
    }
}
