//! # Franchise Lifecycle
//!
//! Start-up wiring for the application: the [`Franchise`] builds each
//! regional store once, [`Region`] selects between them, and
//! [`setup_tracing`] configures logging.
//!
//! ```rust
//! use pizza_store::lifecycle::{Franchise, Region};
//! use pizza_store::store::PizzaStore;
//!
//! let franchise = Franchise::new();
//! let region: Region = "new-york".parse().unwrap();
//! let store = franchise.store(region);
//! assert_eq!(store.kinds(), vec!["cheese", "clam"]);
//! ```

pub mod franchise;
pub mod region;
pub mod tracing;

pub use franchise::*;
pub use region::*;
pub use self::tracing::setup_tracing;
