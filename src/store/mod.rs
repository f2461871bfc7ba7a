//! The order store: the persistence collaborator for composed orders.
//!
//! Stands in for a real database. Like the ledger, it is an actor owning its
//! state; unlike the ledger it also assigns order ids, using an injected
//! generator so tests can control numbering.

mod actor;
mod client;

pub use actor::{OrderStoreActor, StoreRequest};
pub use client::{OrderRepository, OrderStoreClient};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Creates a new order store actor and its client, with sequential ids
/// starting at 1.
pub fn new(buffer_size: usize) -> (OrderStoreActor, OrderStoreClient) {
    let order_id_counter = Arc::new(AtomicU64::new(1));
    let next_order_id = move || order_id_counter.fetch_add(1, Ordering::SeqCst);

    let (sender, receiver) = mpsc::channel(buffer_size);
    (
        OrderStoreActor::new(receiver, next_order_id),
        OrderStoreClient::new(sender),
    )
}
