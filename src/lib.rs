#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Pizza Store
//!
//! > **A Factory Method recipe in Rust.**
//!
//! A franchise of regional pizza stores. Every store takes orders the same
//! way, but each one decides for itself which concrete pizza a name like
//! `"cheese"` turns into: thin crust in New York, deep dish in Chicago.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Traits instead of a base class
//! [`PizzaStore`](store::PizzaStore) is a trait with two required methods
//! (`name`, `menu`). Creation and the ordering workflow are provided methods,
//! so a new regional store is a unit struct plus a static menu table.
//!
//! ### Absence is a value
//! [`create_pizza`](store::PizzaStore::create_pizza) returns
//! `Result<Box<dyn Pizza>, StoreError>`. An unknown identifier is
//! [`StoreError::NotFound`](store::StoreError::NotFound); callers have to
//! handle it before they can touch a pizza.
//!
//! ### Menus are data
//! Identifier → variant mappings live in `static` [`MenuEntry`](store::MenuEntry)
//! tables. Adding a pizza is one new entry, not a new branch.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Products ([`model`])
//! - **Role**: The [`Pizza`](model::Pizza) trait, the regional variants, and the
//!   [`Order`](model::Order) produced by the ordering workflow.
//!
//! ### 2. The Factories ([`store`])
//! - **Role**: The [`PizzaStore`](store::PizzaStore) contract and the concrete
//!   [`NyPizzaStore`](store::NyPizzaStore) and [`ChicagoPizzaStore`](store::ChicagoPizzaStore).
//!
//! ### 3. The Wiring ([`lifecycle`])
//! - **Role**: Builds the stores once at start-up ([`Franchise`](lifecycle::Franchise)),
//!   selects them by [`Region`](lifecycle::Region), and sets up logging.
//!
//! ## 🔀 Concurrency
//!
//! Stores carry no mutable state and are `Send + Sync`. Share one behind an
//! `Arc` and call it from as many tasks as you like; no locks are involved.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod lifecycle;
pub mod model;
pub mod store;
