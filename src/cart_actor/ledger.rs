//! The cart ledger: an ordered set of line items keyed by product id.

use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::CartError;
use crate::model::{LineItem, Product, ProductId};
use crate::notify::{CartEvent, Notifier};

/// The two states the rest of the storefront cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerState {
    /// No line items; checkout is disabled.
    Empty,
    /// At least one line item; checkout is enabled.
    NonEmpty,
}

/// Result of [`CartLedger::update_quantity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The line now has the requested quantity.
    Updated(LineItem),
    /// The requested quantity was 0, so the line is gone.
    Removed(LineItem),
    /// No line with that id. Nothing changed.
    NotFound,
}

/// Authoritative cart contents for one shopping session.
///
/// Lines are kept in first-add order in a `Vec`. Carts hold a handful of
/// distinct products, so lookups scan linearly.
pub struct CartLedger {
    items: Vec<LineItem>,
    notifier: Arc<dyn Notifier>,
}

impl fmt::Debug for CartLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartLedger").field("items", &self.items).finish_non_exhaustive()
    }
}

impl CartLedger {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            items: Vec::new(),
            notifier,
        }
    }

    /// Adds `quantity` units of `product`.
    ///
    /// An existing line keeps its position and has its quantity incremented.
    /// Otherwise a new line is appended with a snapshot of the product.
    /// Either way the notifier receives [`CartEvent::ItemAdded`].
    ///
    /// # Errors
    /// [`CartError::InvalidQuantity`] for `quantity == 0`, or the product's own
    /// validation error. The ledger is unchanged on error.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> Result<LineItem, CartError> {
        if quantity == 0 {
            warn!(id = %product.id, "Rejected add with zero quantity");
            return Err(CartError::InvalidQuantity(quantity));
        }
        product.validate()?;

        let (line, repeat) = match self.position(&product.id) {
            Some(index) => {
                let line = &mut self.items[index];
                line.quantity = line.quantity.saturating_add(quantity);
                (line.clone(), true)
            }
            None => {
                let line = LineItem::from_product(product, quantity);
                self.items.push(line.clone());
                (line, false)
            }
        };

        info!(id = %line.id, quantity = line.quantity, lines = self.items.len(), "Item added");
        self.notifier
            .notify(CartEvent::item_added(line.id.clone(), &line.name, line.quantity, repeat));
        Ok(line)
    }

    /// Replaces the quantity of an existing line.
    ///
    /// A quantity of 0 is exactly [`remove_item`](Self::remove_item), event included.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) -> UpdateOutcome {
        if quantity == 0 {
            return match self.remove_item(id) {
                Some(line) => UpdateOutcome::Removed(line),
                None => UpdateOutcome::NotFound,
            };
        }

        match self.position(id) {
            Some(index) => {
                let line = &mut self.items[index];
                line.quantity = quantity;
                info!(%id, quantity, "Quantity updated");
                UpdateOutcome::Updated(line.clone())
            }
            None => {
                debug!(%id, "Update for missing line ignored");
                UpdateOutcome::NotFound
            }
        }
    }

    /// Removes a line. Absent ids are a silent no-op.
    pub fn remove_item(&mut self, id: &ProductId) -> Option<LineItem> {
        let index = self.position(id)?;
        let line = self.items.remove(index);
        info!(%id, lines = self.items.len(), "Item removed");
        self.notifier.notify(CartEvent::item_removed(line.id.clone()));
        Some(line)
    }

    /// Empties the ledger and returns how many lines were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.items.len();
        self.items.clear();
        info!(dropped, "Cart cleared");
        dropped
    }

    /// Current lines in first-add order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|line| &line.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn state(&self) -> LedgerState {
        if self.items.is_empty() {
            LedgerState::Empty
        } else {
            LedgerState::NonEmpty
        }
    }

    /// Sum of quantities over all lines.
    pub fn unit_count(&self) -> u64 {
        self.items
            .iter()
            .map(|line| u64::from(line.quantity))
            .fold(0, u64::saturating_add)
    }

    pub(crate) fn notify(&self, event: CartEvent) {
        self.notifier.notify(event);
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|line| &line.id == id)
    }
}
