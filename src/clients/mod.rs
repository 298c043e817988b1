//! Type-safe collaborators built on [`LedgerHandle`](crate::framework::LedgerHandle).

pub mod cart_client;
pub mod cart_panel;
pub mod catalog_client;
pub mod ledger_client;

pub use cart_client::*;
pub use cart_panel::*;
pub use catalog_client::*;
pub use ledger_client::*;
