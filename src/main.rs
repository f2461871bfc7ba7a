//! Demo binary: shows the ledger surviving concurrent contention, then the
//! full placement workflow (discount order, refused order) end to end.

use order_ledger::lifecycle::{setup_tracing, OrderSystem};
use order_ledger::model::{OrderCreate, OrderItemCreate};
use tracing::{info, warn};

/// Sample stock used for the demo.
const SEED_STOCK: [(u32, u32); 5] = [(1, 100), (2, 50), (3, 75), (4, 200), (5, 30)];

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting order system demo");
    let system = OrderSystem::new();

    for (product_id, quantity) in SEED_STOCK {
        system
            .ledger
            .set_stock(product_id, quantity)
            .await
            .map_err(|e| e.to_string())?;
    }

    // 10 concurrent callers each want 10 units of product 1 (stock: 100).
    // Every one must win, and the ledger must land on exactly zero.
    info!("Issuing 10 concurrent reservations of 10 units each");
    let mut handles = vec![];
    for _ in 0..10 {
        let ledger = system.ledger.clone();
        handles.push(tokio::spawn(async move { ledger.try_reserve(1, 10).await }));
    }

    let mut successes = 0;
    for handle in handles {
        let reserved = handle
            .await
            .map_err(|e| e.to_string())?
            .map_err(|e| e.to_string())?;
        if reserved {
            successes += 1;
        }
    }
    let final_stock = system.ledger.get_stock(1).await.map_err(|e| e.to_string())?;
    info!(successes, final_stock, "Contention round complete");

    // A six-item order of product 4 crosses the discount threshold.
    let order = system
        .place_order(OrderCreate {
            customer_id: 123,
            items: vec![OrderItemCreate {
                product_id: 4,
                quantity: 6,
                price: 100.0,
            }],
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(
        order_id = order.id,
        total = order.total,
        discount = order.discount,
        final_total = order.final_total,
        "Order placed"
    );

    // Product 5 only has 30 units; asking for 40 must be refused cleanly.
    match system
        .place_order(OrderCreate {
            customer_id: 123,
            items: vec![OrderItemCreate {
                product_id: 5,
                quantity: 40,
                price: 5.0,
            }],
        })
        .await
    {
        Ok(order) => warn!(order_id = order.id, "Unexpectedly placed oversized order"),
        Err(e) => info!(error = %e, "Oversized order refused as expected"),
    }

    let stored = system.list_orders().await.map_err(|e| e.to_string())?;
    info!(orders = stored.len(), "Stored orders at shutdown");

    system.shutdown().await
}
