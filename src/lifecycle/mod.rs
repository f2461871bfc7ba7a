//! Orchestration: actor startup, wiring, tracing setup, and shutdown.

pub mod order_system;
pub mod tracing;

pub use self::order_system::OrderSystem;
pub use self::tracing::setup_tracing;
