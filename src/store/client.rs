//! The order store's client half and the repository contract.

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use super::actor::StoreRequest;
use crate::framework::ActorError;
use crate::model::Order;

/// What the core consumes from its persistence collaborator: a store/append
/// operation and lookups. Any error propagates unchanged to the caller.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Stores an order and returns its assigned id.
    async fn insert(&self, order: Order) -> Result<u64, ActorError>;

    /// Fetches a stored order; `None` for unknown ids.
    async fn get(&self, id: u64) -> Result<Option<Order>, ActorError>;

    /// Every stored order, in id order.
    async fn list(&self) -> Result<Vec<Order>, ActorError>;
}

/// Client for the order store actor.
#[derive(Clone)]
pub struct OrderStoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl OrderStoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl OrderRepository for OrderStoreClient {
    #[instrument(skip(self, order), fields(customer_id = order.customer_id))]
    async fn insert(&self, order: Order) -> Result<u64, ActorError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Insert { order, respond_to })
            .await
            .map_err(|_| ActorError::Closed)?;
        response.await.map_err(|_| ActorError::Dropped)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: u64) -> Result<Option<Order>, ActorError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get { id, respond_to })
            .await
            .map_err(|_| ActorError::Closed)?;
        response.await.map_err(|_| ActorError::Dropped)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Order>, ActorError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::List { respond_to })
            .await
            .map_err(|_| ActorError::Closed)?;
        response.await.map_err(|_| ActorError::Dropped)
    }
}
