//! # Logging
//!
//! [`setup_tracing`] installs the `tracing-subscriber` fmt subscriber used by
//! the demo binary. Verbosity comes from `RUST_LOG`.
//!
//! ## What Gets Logged
//!
//! - **Franchise start-up** (`info`): each store and its menu
//! - **Creation** (`debug`): every `create_pizza` call, hit or miss
//! - **Ordering** (`debug`/`info`): each workflow step inside an `order_pizza` span
//!
//! ## Usage Examples
//!
//! ```bash
//! # Orders only
//! RUST_LOG=info cargo run
//!
//! # Every lookup and workflow step
//! RUST_LOG=debug cargo run
//!
//! # Only the store module
//! RUST_LOG=pizza_store::store=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` an order looks like:
//!
//! ```text
//! DEBUG order_pizza{kind="cheese" store="Chicago Pizza Store"}: Created store="Chicago Pizza Store" kind="cheese" pizza="Chicago Style Deep Dish Cheese Pizza"
//! DEBUG order_pizza{kind="cheese" store="Chicago Pizza Store"}: Step step=Prepare
//! DEBUG order_pizza{kind="cheese" store="Chicago Pizza Store"}: Step step=Bake { minutes: 25, degrees: 350 }
//! DEBUG order_pizza{kind="cheese" store="Chicago Pizza Store"}: Step step=Cut(Square)
//! DEBUG order_pizza{kind="cheese" store="Chicago Pizza Store"}: Step step=Boxed
//!  INFO order_pizza{kind="cheese" store="Chicago Pizza Store"}: Order ready pizza="Chicago Style Deep Dish Cheese Pizza"
//! ```

/// Initializes the global subscriber. Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
