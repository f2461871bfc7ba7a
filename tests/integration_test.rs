use order_ledger::composer::OrderError;
use order_ledger::lifecycle::OrderSystem;
use order_ledger::model::{OrderCreate, OrderItemCreate, OrderStatus};

fn item(product_id: u32, quantity: u32, price: f64) -> OrderItemCreate {
    OrderItemCreate {
        product_id,
        quantity,
        price,
    }
}

/// Full end-to-end flow: seed stock, place an order, fetch it back,
/// verify the ledger was decremented.
#[tokio::test]
async fn test_order_placement_end_to_end() {
    let system = OrderSystem::new();

    system.ledger.set_stock(1, 100).await.unwrap();

    let order = system
        .place_order(OrderCreate {
            customer_id: 123,
            items: vec![item(1, 10, 10.0)],
        })
        .await
        .expect("Failed to place order");

    assert_eq!(order.total, 100.0);
    assert_eq!(order.discount, 0.0);
    assert_eq!(order.final_total, 100.0);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].subtotal, 100.0);
    assert!(order.id > 0, "Store should assign an id");

    // Stock was consumed by the reservation
    assert_eq!(system.ledger.get_stock(1).await.unwrap(), 90);

    // The stored copy matches what the caller got
    let fetched = system
        .get_order(order.id)
        .await
        .expect("Failed to fetch order")
        .expect("Order not found");
    assert_eq!(fetched, order);

    let all = system.list_orders().await.unwrap();
    assert_eq!(all.len(), 1);

    system.shutdown().await.expect("Failed to shutdown system");
}

/// An order over the discount threshold gets 10% off.
#[tokio::test]
async fn test_discount_applies_above_threshold() {
    let system = OrderSystem::new();

    system.ledger.set_stock(4, 200).await.unwrap();

    let order = system
        .place_order(OrderCreate {
            customer_id: 123,
            items: vec![item(4, 6, 100.0)],
        })
        .await
        .unwrap();

    assert_eq!(order.total, 600.0);
    assert_eq!(order.discount, 60.0);
    assert_eq!(order.final_total, 540.0);

    system.shutdown().await.unwrap();
}

/// A refused reservation fails the order, names the product, and leaves
/// both the ledger and the store untouched.
#[tokio::test]
async fn test_insufficient_stock_leaves_system_untouched() {
    let system = OrderSystem::new();

    system.ledger.set_stock(2, 5).await.unwrap();

    let err = system
        .place_order(OrderCreate {
            customer_id: 123,
            items: vec![item(2, 10, 5.0)],
        })
        .await
        .unwrap_err();

    assert_eq!(err, OrderError::InsufficientStock(2));
    assert_eq!(system.ledger.get_stock(2).await.unwrap(), 5);
    assert!(system.list_orders().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

/// Unknown products count as zero stock, not as an error.
#[tokio::test]
async fn test_unknown_product_is_zero_stock() {
    let system = OrderSystem::new();

    let err = system
        .place_order(OrderCreate {
            customer_id: 123,
            items: vec![item(99, 1, 1.0)],
        })
        .await
        .unwrap_err();

    assert_eq!(err, OrderError::InsufficientStock(99));

    system.shutdown().await.unwrap();
}

/// A later item's failure releases every earlier reservation: the failed
/// order consumes no stock at all.
#[tokio::test]
async fn test_partial_failure_rolls_back_earlier_items() {
    let system = OrderSystem::new();

    system.ledger.set_stock(1, 100).await.unwrap();
    system.ledger.set_stock(2, 5).await.unwrap();

    let err = system
        .place_order(OrderCreate {
            customer_id: 123,
            items: vec![item(1, 10, 10.0), item(2, 10, 5.0)],
        })
        .await
        .unwrap_err();

    assert_eq!(err, OrderError::InsufficientStock(2));
    assert_eq!(
        system.ledger.get_stock(1).await.unwrap(),
        100,
        "Earlier reservation must be released"
    );
    assert_eq!(system.ledger.get_stock(2).await.unwrap(), 5);
    assert!(system.list_orders().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

/// Spec scenario: 10 concurrent reservations of 10 units against 100 in
/// stock — all succeed, stock lands on exactly zero.
#[tokio::test]
async fn test_concurrent_reservations_drain_to_zero() {
    let system = OrderSystem::new();

    system.ledger.set_stock(1, 100).await.unwrap();

    let mut handles = vec![];
    for _ in 0..10 {
        let ledger = system.ledger.clone();
        handles.push(tokio::spawn(async move { ledger.try_reserve(1, 10).await }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap().unwrap() {
            successes += 1;
        }
    }

    assert_eq!(successes, 10, "Expected every reservation to succeed");
    assert_eq!(system.ledger.get_stock(1).await.unwrap(), 0);

    system.shutdown().await.unwrap();
}

/// Concurrent order placement never oversells: with stock for 10 orders
/// and 15 contenders, exactly 10 succeed and the rest fail cleanly.
#[tokio::test]
async fn test_concurrent_orders_never_oversell() {
    let system = OrderSystem::new();

    system.ledger.set_stock(1, 100).await.unwrap();

    let mut handles = vec![];
    for _ in 0..15 {
        let system_ledger = system.ledger.clone();
        let composer =
            order_ledger::composer::OrderComposer::new(system_ledger);
        handles.push(tokio::spawn(async move {
            composer
                .create_order(OrderCreate {
                    customer_id: 123,
                    items: vec![item(1, 10, 10.0)],
                })
                .await
        }));
    }

    let mut successful = 0;
    let mut refused = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successful += 1,
            Err(OrderError::InsufficientStock(1)) => refused += 1,
            Err(e) => panic!("Unexpected error: {e:?}"),
        }
    }

    assert_eq!(successful, 10, "Expected exactly 10 successful orders");
    assert_eq!(refused, 5, "Expected the rest to be refused");
    assert_eq!(
        system.ledger.get_stock(1).await.unwrap(),
        0,
        "All stock consumed, never negative"
    );

    system.shutdown().await.unwrap();
}
