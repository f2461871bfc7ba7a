//! # Order Ledger
//!
//! > **An order-placement core that never oversells.**
//!
//! This crate implements the two pieces of an order service that are worth
//! getting right: a **stock ledger** that supports atomic check-and-decrement
//! under concurrent access, and an **order composer** that reserves stock for
//! several line items as an all-or-nothing unit. HTTP routing, request
//! validation, and durable storage are thin wrappers that live elsewhere.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Serialize the state, not the callers
//!
//! The ledger is the only shared mutable resource here, and every one of its
//! operations is a map lookup plus arithmetic. Instead of wrapping the map in
//! a `Mutex`, a single Tokio task owns it and processes requests one at a
//! time over a channel. The effect is the same as a coarse lock — each
//! reservation's check and decrement are indivisible — but the "lock" is
//! only ever held for one message, never across caller logic.
//!
//! ### All-or-nothing orders
//!
//! A multi-item order reserves its items one by one, in the order the caller
//! supplied them. If any item comes up short, the composer releases every
//! reservation it already took before surfacing the error, so a failed order
//! never silently consumes stock.
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`]: the channel/reply plumbing shared by the actors.
//! - [`ledger`]: the stock ledger actor and its client — `get_stock`,
//!   `set_stock`, `try_reserve`, `release` — plus [`ledger::mock`] for
//!   testing callers with scripted outcomes.
//! - [`model`]: the plain records: [`Order`](model::Order),
//!   [`OrderItem`](model::OrderItem), and their create payloads.
//! - [`composer`]: pricing (10% discount above 500) and the reservation
//!   workflow with compensating rollback.
//! - [`store`]: the in-memory persistence collaborator behind the
//!   [`OrderRepository`](store::OrderRepository) contract.
//! - [`lifecycle`]: [`OrderSystem`](lifecycle::OrderSystem) wiring,
//!   tracing setup, and graceful shutdown.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the concurrent-reservation demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod composer;
pub mod framework;
pub mod ledger;
pub mod lifecycle;
pub mod model;
pub mod store;
