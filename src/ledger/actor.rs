//! The ledger's server half: the message loop that owns the stock map.

use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::framework::Response;

/// Operations the ledger serves.
///
/// Each variant carries a [`Response`] channel for the reply. Reservation
/// failure is a plain `false`, never an error: insufficient stock and
/// unknown products are ordinary outcomes, not faults.
#[derive(Debug)]
pub enum LedgerRequest {
    /// Current available quantity; 0 for unknown products. No side effects.
    GetStock {
        product_id: u32,
        respond_to: Response<u32>,
    },
    /// Unconditional overwrite, creating the entry if absent.
    /// Provisioning and tests only; the order flow never calls this.
    SetStock {
        product_id: u32,
        quantity: u32,
        respond_to: Response<()>,
    },
    /// Atomic check-and-decrement. `false` leaves the entry untouched.
    TryReserve {
        product_id: u32,
        quantity: u32,
        respond_to: Response<bool>,
    },
    /// Inverse of `TryReserve`: re-adds quantity, always succeeds.
    /// Used for compensating rollback of a partially reserved order.
    Release {
        product_id: u32,
        quantity: u32,
        respond_to: Response<()>,
    },
}

/// The actor that owns the product→quantity map.
///
/// The loop handles one request at a time, so a `TryReserve` check and its
/// decrement can never interleave with another caller's — the whole map
/// behaves as if guarded by a single lock, held only for the duration of
/// one map operation.
pub struct LedgerActor {
    receiver: mpsc::Receiver<LedgerRequest>,
    stock: HashMap<u32, u32>,
}

impl LedgerActor {
    pub(crate) fn new(receiver: mpsc::Receiver<LedgerRequest>) -> Self {
        Self {
            receiver,
            stock: HashMap::new(),
        }
    }

    /// Runs the ledger's event loop until every client is dropped.
    pub async fn run(mut self) {
        info!("Ledger started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                LedgerRequest::GetStock {
                    product_id,
                    respond_to,
                } => {
                    let quantity = self.stock.get(&product_id).copied().unwrap_or(0);
                    debug!(product_id, quantity, "GetStock");
                    let _ = respond_to.send(quantity);
                }
                LedgerRequest::SetStock {
                    product_id,
                    quantity,
                    respond_to,
                } => {
                    self.stock.insert(product_id, quantity);
                    info!(product_id, quantity, "Stock set");
                    let _ = respond_to.send(());
                }
                LedgerRequest::TryReserve {
                    product_id,
                    quantity,
                    respond_to,
                } => {
                    let reserved = match self.stock.get_mut(&product_id) {
                        Some(available) if *available >= quantity => {
                            *available -= quantity;
                            true
                        }
                        _ => false,
                    };
                    if reserved {
                        let remaining = self.stock.get(&product_id).copied().unwrap_or(0);
                        info!(product_id, quantity, remaining, "Reserved");
                    } else {
                        let available = self.stock.get(&product_id).copied().unwrap_or(0);
                        warn!(product_id, quantity, available, "Reservation refused");
                    }
                    let _ = respond_to.send(reserved);
                }
                LedgerRequest::Release {
                    product_id,
                    quantity,
                    respond_to,
                } => {
                    // Saturating: quantity is capped at u32::MAX, never wraps.
                    let entry = self.stock.entry(product_id).or_insert(0);
                    *entry = entry.saturating_add(quantity);
                    info!(product_id, quantity, restored = *entry, "Released");
                    let _ = respond_to.send(());
                }
            }
        }

        info!(products = self.stock.len(), "Ledger shutdown");
    }
}
