//! The stock ledger: shared product stock with channel-serialized access.
//!
//! The ledger is the only shared mutable state in this crate. It is owned by
//! a single [`LedgerActor`] task, so every operation — read, overwrite,
//! reserve, release — is processed one at a time. That gives each product
//! linearizable updates (the "as if under one lock" guarantee) without any
//! lock being held across caller logic.

mod actor;
mod client;
pub mod mock;

pub use actor::{LedgerActor, LedgerRequest};
pub use client::LedgerClient;

use tokio::sync::mpsc;

/// Creates a new ledger actor and its client.
///
/// Spawn the actor with `tokio::spawn(actor.run())`; clone the client freely.
pub fn new(buffer_size: usize) -> (LedgerActor, LedgerClient) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (LedgerActor::new(receiver), LedgerClient::new(sender))
}
