use pizza_store::lifecycle::{Franchise, Region, UnknownRegion};
use pizza_store::store::StoreError;

/// Full flow: region read from a config value, store looked up, order placed.
#[test]
fn test_order_from_configured_region() {
    let franchise = Franchise::new();

    let region: Region = serde_json::from_str("\"chicago\"").expect("valid region");
    let order = franchise
        .order(region, "pepperoni")
        .expect("Chicago sells pepperoni");

    assert_eq!(order.store, "Chicago Pizza Store");
    assert_eq!(order.kind, "pepperoni");
    assert!(order.pizza.toppings().contains(&"Sliced Pepperoni"));
    assert!(order.is_ready());
}

#[test]
fn test_menus_differ_by_region() {
    let franchise = Franchise::new();

    assert_eq!(franchise.store(Region::NewYork).kinds(), vec!["cheese", "clam"]);
    assert_eq!(
        franchise.store(Region::Chicago).kinds(),
        vec!["cheese", "pepperoni"]
    );

    assert_eq!(
        franchise.order(Region::NewYork, "pepperoni").unwrap_err(),
        StoreError::not_found("New York Pizza Store", "pepperoni")
    );
    assert_eq!(
        franchise.order(Region::Chicago, "clam").unwrap_err(),
        StoreError::not_found("Chicago Pizza Store", "clam")
    );
}

#[test]
fn test_unknown_region_is_rejected() {
    let err = "detroit".parse::<Region>().unwrap_err();
    assert_eq!(err, UnknownRegion("detroit".to_string()));
    assert_eq!(err.to_string(), "Unknown region: detroit");
}

/// Store handles outlive the franchise that created them.
#[tokio::test]
async fn test_store_handles_outlive_franchise() {
    let store = {
        let franchise = Franchise::new();
        franchise.store(Region::NewYork)
    };

    let handle = tokio::spawn(async move { store.order_pizza("cheese") });
    let order = handle.await.unwrap().unwrap();
    assert_eq!(order.pizza.name(), "NY Style Sauce and Cheese Pizza");
}
