//! # Session Lifecycle
//!
//! Starts the cart actor, wires the notifier, checkout trigger and clients to
//! it, and shuts it down again.
//!
//! - [`CartSystem`] - Owns one session's actor task and clients
//! - [`setup_tracing`] - Initializes the tracing subscriber
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all handles** - closes the request channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - a panicked actor task is reported as an error

pub mod cart_system;
pub mod tracing;

pub use cart_system::*;
pub use self::tracing::setup_tracing;
