//! # Actor Plumbing
//!
//! Shared building blocks for the channel-serialized actors in this crate.
//!
//! Every shared-state component follows the same recipe: a server struct owns
//! its state plus an `mpsc::Receiver` and processes messages one at a time in
//! a `run()` loop, while a cheap-to-clone client holds the `mpsc::Sender` and
//! awaits replies on a [`oneshot`] channel. Because the loop handles exactly
//! one message before the next, every operation on the state is atomic with
//! respect to every other — no `Mutex` needed.
//!
//! ## Key Types
//!
//! - [`Response`]: the one-shot reply channel carried inside each request.
//! - [`ActorError`]: channel-level failures shared by all clients.

use tokio::sync::oneshot;

/// One-shot reply channel carried inside each actor request.
///
/// Actors reply with plain values; domain outcomes that can legitimately
/// fail (e.g. a reservation) are part of `T` itself, so the only errors a
/// client ever surfaces are the channel-level [`ActorError`] variants.
pub type Response<T> = oneshot::Sender<T>;

/// Channel-level failures shared by every actor client.
///
/// These indicate the actor task is gone (system shutting down or crashed),
/// never a domain-level outcome.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ActorError {
    /// The actor's request channel is closed; it is no longer running.
    #[error("actor closed")]
    Closed,
    /// The actor dropped the reply channel without responding.
    #[error("actor dropped response channel")]
    Dropped,
}
