//! Error types for order composition.

use thiserror::Error;

use crate::framework::ActorError;

/// Errors that can occur while composing or placing an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// A line item's reservation failed; names the offending product.
    ///
    /// Recoverable: the caller may retry with adjusted quantities or reject
    /// the order. Stock already taken for earlier items has been released.
    #[error("Insufficient stock for product {0}")]
    InsufficientStock(u32),

    /// A collaborator actor (ledger or order store) is gone.
    ///
    /// Surfaced unchanged, never interpreted or retried here.
    #[error(transparent)]
    Actor(#[from] ActorError),
}
