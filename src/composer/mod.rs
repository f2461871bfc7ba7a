//! The order composer: pricing plus all-or-nothing stock reservation.

pub mod error;
pub mod pricing;

pub use error::OrderError;

use std::time::SystemTime;
use tracing::{info, instrument, warn};

use crate::ledger::LedgerClient;
use crate::model::{Order, OrderCreate, OrderItem, OrderStatus};

/// Turns a list of requested items into a priced, stock-checked [`Order`].
///
/// The composer reserves stock for each item through the ledger, strictly in
/// the order the caller supplied them. If any item cannot be reserved, every
/// reservation taken so far is released before the error surfaces, so a
/// failed order never consumes stock.
#[derive(Clone)]
pub struct OrderComposer {
    ledger: LedgerClient,
}

impl OrderComposer {
    pub fn new(ledger: LedgerClient) -> Self {
        Self { ledger }
    }

    /// Composes an order, or fails naming the first unreservable product.
    ///
    /// The returned order is fully priced and reserved but not yet
    /// persisted; handing it to the order store is the caller's job.
    #[instrument(skip(self, params), fields(customer_id = params.customer_id))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        let totals = pricing::price(&params.items);

        let mut order = Order {
            id: 0,
            customer_id: params.customer_id,
            total: totals.total,
            discount: totals.discount,
            final_total: totals.final_total,
            status: OrderStatus::Pending,
            created_at: SystemTime::now(),
            items: Vec::with_capacity(params.items.len()),
        };

        // Items reserved so far, in case a later one forces a rollback.
        let mut reserved: Vec<(u32, u32)> = Vec::new();

        for item in &params.items {
            if !self.ledger.try_reserve(item.product_id, item.quantity).await? {
                warn!(
                    product_id = item.product_id,
                    quantity = item.quantity,
                    "Reservation failed, rolling back"
                );
                self.rollback(&reserved).await?;
                return Err(OrderError::InsufficientStock(item.product_id));
            }
            reserved.push((item.product_id, item.quantity));
            order.items.push(OrderItem {
                product_id: item.product_id,
                quantity: item.quantity,
                price: item.price,
                subtotal: f64::from(item.quantity) * item.price,
            });
        }

        info!(
            items = order.items.len(),
            total = order.total,
            final_total = order.final_total,
            "Order composed"
        );
        Ok(order)
    }

    /// Compensating release: returns every quantity taken so far.
    async fn rollback(&self, reserved: &[(u32, u32)]) -> Result<(), OrderError> {
        for &(product_id, quantity) in reserved {
            self.ledger.release(product_id, quantity).await?;
        }
        Ok(())
    }
}
