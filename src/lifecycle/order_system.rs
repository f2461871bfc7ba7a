use tracing::{error, info};

use crate::composer::{OrderComposer, OrderError};
use crate::ledger::LedgerClient;
use crate::model::{Order, OrderCreate};
use crate::store::{OrderRepository, OrderStoreClient};

const CHANNEL_BUFFER: usize = 32;

/// The runtime orchestrator for the order-placement core.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: spawning the ledger and order store actors
///   and joining them on shutdown.
/// - **Dependency Wiring**: handing the composer its ledger client.
/// - **The placement workflow**: compose, then persist, fail-fast.
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
/// system.ledger.set_stock(1, 100).await?;
/// let order = system.place_order(params).await?;
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for the stock ledger actor (also used for provisioning).
    pub ledger: LedgerClient,

    /// Client for the order store actor.
    pub orders: OrderStoreClient,

    composer: OrderComposer,

    /// Task handles for the running actors, joined on shutdown.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Spawns the ledger and order store actors and wires the composer.
    pub fn new() -> Self {
        let (ledger_actor, ledger) = crate::ledger::new(CHANNEL_BUFFER);
        let (store_actor, orders) = crate::store::new(CHANNEL_BUFFER);

        let ledger_handle = tokio::spawn(ledger_actor.run());
        let store_handle = tokio::spawn(store_actor.run());

        let composer = OrderComposer::new(ledger.clone());

        Self {
            ledger,
            orders,
            composer,
            handles: vec![ledger_handle, store_handle],
        }
    }

    /// Composes an order and hands it to the order store.
    ///
    /// Returns the stored order, id assigned. Fails with
    /// [`OrderError::InsufficientStock`] before anything is persisted if a
    /// reservation is refused; store failures propagate unchanged.
    pub async fn place_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        let mut order = self.composer.create_order(params).await?;
        order.id = self.orders.insert(order.clone()).await?;
        Ok(order)
    }

    /// Fetches a stored order by id; `None` for unknown ids.
    pub async fn get_order(&self, id: u64) -> Result<Option<Order>, OrderError> {
        Ok(self.orders.get(id).await?)
    }

    /// Every stored order, in id order.
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self.orders.list().await?)
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes their channels; each actor drains its
    /// loop and exits. Returns an error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.composer);
        drop(self.ledger);
        drop(self.orders);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
