//! # Observability & Tracing
//!
//! Structured logging setup for the whole system.
//!
//! Every actor logs its lifecycle (startup, each state change, shutdown)
//! and every client logs outbound requests at `debug`. Reservation refusals
//! and rollbacks are logged at `warn` with the product and quantities
//! involved.
//!
//! Log level is controlled via `RUST_LOG`:
//!
//! ```bash
//! # State changes only
//! RUST_LOG=info cargo run
//!
//! # Full request payloads
//! RUST_LOG=debug cargo run
//! ```

/// Initializes the tracing subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Keep log lines short; structured fields carry the context.
        .compact()
        .init();
}
