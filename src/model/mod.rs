//! Pure data structures shared by the ledger, the catalog and the panel.

pub mod line_item;
pub mod product;

pub use line_item::*;
pub use product::*;
