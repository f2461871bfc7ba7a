//! The ledger's client half: a thin, cloneable handle over the channel.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use super::actor::LedgerRequest;
use crate::framework::ActorError;

/// Client for the stock ledger actor.
///
/// Cloning is cheap (it clones the channel sender). All methods return
/// [`ActorError`] only when the ledger task is gone; domain outcomes such as
/// a refused reservation live in the return value itself.
#[derive(Clone)]
pub struct LedgerClient {
    sender: mpsc::Sender<LedgerRequest>,
}

impl LedgerClient {
    pub fn new(sender: mpsc::Sender<LedgerRequest>) -> Self {
        Self { sender }
    }

    /// Current available quantity for a product; 0 if unknown.
    #[instrument(skip(self))]
    pub async fn get_stock(&self, product_id: u32) -> Result<u32, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(LedgerRequest::GetStock {
                product_id,
                respond_to,
            })
            .await
            .map_err(|_| ActorError::Closed)?;
        response.await.map_err(|_| ActorError::Dropped)
    }

    /// Unconditionally overwrites a product's stock level.
    #[instrument(skip(self))]
    pub async fn set_stock(&self, product_id: u32, quantity: u32) -> Result<(), ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(LedgerRequest::SetStock {
                product_id,
                quantity,
                respond_to,
            })
            .await
            .map_err(|_| ActorError::Closed)?;
        response.await.map_err(|_| ActorError::Dropped)
    }

    /// Atomically reserves `quantity` units; `Ok(false)` means the product
    /// is unknown or short, and nothing was changed.
    #[instrument(skip(self))]
    pub async fn try_reserve(&self, product_id: u32, quantity: u32) -> Result<bool, ActorError> {
        debug!("Sending reservation request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(LedgerRequest::TryReserve {
                product_id,
                quantity,
                respond_to,
            })
            .await
            .map_err(|_| ActorError::Closed)?;
        response.await.map_err(|_| ActorError::Dropped)
    }

    /// Returns previously reserved units to the ledger. Always succeeds.
    #[instrument(skip(self))]
    pub async fn release(&self, product_id: u32, quantity: u32) -> Result<(), ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(LedgerRequest::Release {
                product_id,
                quantity,
                respond_to,
            })
            .await
            .map_err(|_| ActorError::Closed)?;
        response.await.map_err(|_| ActorError::Dropped)
    }
}
