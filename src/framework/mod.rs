//! Actor plumbing for the cart ledger.
//!
//! A [`CartLedger`](crate::cart_actor::CartLedger) is not thread-safe by
//! itself. To share one between tasks it is moved into a [`LedgerActor`], which
//! applies [`LedgerRequest`]s one at a time, in arrival order.
//!
//! # Main Components
//!
//! - [`LedgerActor`] - Owns the ledger and runs the message loop
//! - [`LedgerHandle`] - Cloneable sender half used by every client
//! - [`LedgerRequest`] - The messages, one per ledger operation
//! - [`LedgerError`] - Transport failures plus rejected input
//!
//! # Testing
//!
//! See [`mock`] for a handle backed by an expectation queue instead of a real ledger.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::LedgerActor;
pub use client::LedgerHandle;
pub use error::LedgerError;
pub use message::{CartSnapshot, LedgerRequest, Response};
