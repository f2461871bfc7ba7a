//! Pure data structures: the order records and their create payloads.

pub mod order;

pub use order::*;
