//! The order store's server half.

use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::framework::Response;
use crate::model::Order;

/// Operations the order store serves.
#[derive(Debug)]
pub enum StoreRequest {
    /// Assigns an id, stores the order, and replies with the id.
    Insert {
        order: Order,
        respond_to: Response<u64>,
    },
    /// Looks up a stored order; `None` for unknown ids.
    Get {
        id: u64,
        respond_to: Response<Option<Order>>,
    },
    /// Every stored order, in id order.
    List {
        respond_to: Response<Vec<Order>>,
    },
}

/// The actor that owns the stored orders.
///
/// A `BTreeMap` keeps listing deterministic (ascending id).
pub struct OrderStoreActor {
    receiver: mpsc::Receiver<StoreRequest>,
    orders: BTreeMap<u64, Order>,
    next_id_fn: Box<dyn Fn() -> u64 + Send + Sync>,
}

impl OrderStoreActor {
    pub(crate) fn new(
        receiver: mpsc::Receiver<StoreRequest>,
        next_id_fn: impl Fn() -> u64 + Send + Sync + 'static,
    ) -> Self {
        Self {
            receiver,
            orders: BTreeMap::new(),
            next_id_fn: Box::new(next_id_fn),
        }
    }

    /// Runs the store's event loop until every client is dropped.
    pub async fn run(mut self) {
        info!("Order store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Insert {
                    mut order,
                    respond_to,
                } => {
                    let id = (self.next_id_fn)();
                    order.id = id;
                    self.orders.insert(id, order);
                    info!(order_id = id, size = self.orders.len(), "Order stored");
                    let _ = respond_to.send(id);
                }
                StoreRequest::Get { id, respond_to } => {
                    let order = self.orders.get(&id).cloned();
                    debug!(order_id = id, found = order.is_some(), "Get");
                    let _ = respond_to.send(order);
                }
                StoreRequest::List { respond_to } => {
                    debug!(size = self.orders.len(), "List");
                    let _ = respond_to.send(self.orders.values().cloned().collect());
                }
            }
        }

        info!(size = self.orders.len(), "Order store shutdown");
    }
}
