//! # Mock Ledger
//!
//! Utilities for testing ledger callers in isolation.
//!
//! # Testing Strategy
//! When testing the order composer we don't want a live [`LedgerActor`]
//! deciding outcomes — we want to script them. [`mock_ledger_client`] hands
//! back a [`LedgerClient`] wired to a channel the test controls; the
//! `expect_*` helpers receive the next request, assert its shape, and hand
//! the test the reply channel so it can answer success, refusal, or silence
//! deterministically.
//!
//! [`LedgerActor`]: crate::ledger::LedgerActor

use tokio::sync::mpsc;

use super::actor::LedgerRequest;
use super::client::LedgerClient;
use crate::framework::Response;

/// Creates a mock ledger client and the receiver for asserting requests.
pub fn mock_ledger_client(buffer_size: usize) -> (LedgerClient, mpsc::Receiver<LedgerRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (LedgerClient::new(sender), receiver)
}

/// Receives the next request and verifies it is a `TryReserve`.
///
/// Returns `(product_id, quantity, respond_to)` so the test can answer.
pub async fn expect_try_reserve(
    receiver: &mut mpsc::Receiver<LedgerRequest>,
) -> Option<(u32, u32, Response<bool>)> {
    match receiver.recv().await {
        Some(LedgerRequest::TryReserve {
            product_id,
            quantity,
            respond_to,
        }) => Some((product_id, quantity, respond_to)),
        _ => None,
    }
}

/// Receives the next request and verifies it is a `Release`.
pub async fn expect_release(
    receiver: &mut mpsc::Receiver<LedgerRequest>,
) -> Option<(u32, u32, Response<()>)> {
    match receiver.recv().await {
        Some(LedgerRequest::Release {
            product_id,
            quantity,
            respond_to,
        }) => Some((product_id, quantity, respond_to)),
        _ => None,
    }
}
