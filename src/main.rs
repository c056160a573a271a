//! # Pizza Store demo
//!
//! Opens the franchise and places a few orders concurrently, one Tokio task
//! per order. One of them asks for a pizza its store does not sell, to show
//! the `NotFound` path.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run   # every lookup and workflow step
//! ```

use pizza_store::lifecycle::{setup_tracing, Franchise, Region};
use tracing::{info, warn, Instrument};

const ORDERS: [(Region, &str); 5] = [
    (Region::NewYork, "cheese"),
    (Region::Chicago, "cheese"),
    (Region::NewYork, "clam"),
    (Region::Chicago, "pepperoni"),
    (Region::NewYork, "veggie"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    info!("Opening franchise");
    let franchise = Franchise::new();

    let mut handles = Vec::with_capacity(ORDERS.len());
    for (region, kind) in ORDERS {
        let store = franchise.store(region);
        let span = tracing::info_span!("customer", %region);
        handles.push(tokio::spawn(
            async move { store.order_pizza(kind) }.instrument(span),
        ));
    }

    let mut served = 0;
    for handle in handles {
        match handle.await? {
            Ok(order) => {
                served += 1;
                info!(store = order.store, pizza = %order.pizza.describe(), "Served");
            }
            Err(e) => warn!(error = %e, "Order turned away"),
        }
    }

    info!(served, total = ORDERS.len(), "Franchise closed");
    Ok(())
}
