//! # Ledger Errors
//!
//! Failures seen by callers of a [`LedgerHandle`](crate::framework::LedgerHandle).

use crate::cart_actor::CartError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error(transparent)]
    Cart(#[from] CartError),
}
