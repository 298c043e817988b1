//! # Cart Panel
//!
//! View model for the slide-over cart: what it shows and what its buttons do.
//! Every button re-queries the cart afterwards, so the view never drifts from
//! the ledger.
use crate::cart_actor::{CartError, UpdateOutcome};
use crate::checkout::CheckoutAck;
use crate::clients::LedgerClient;
use crate::framework::{CartSnapshot, LedgerError, LedgerHandle};
use crate::model::ProductId;
use crate::notify::CartEvent;
use async_trait::async_trait;
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, instrument, warn};

pub const EMPTY_CART_TITLE: &str = "Your cart is empty";
pub const EMPTY_CART_HINT: &str = "Add some products to get started!";
pub const FREE_SHIPPING_NOTE: &str = "You've qualified for free shipping!";

/// Formats whole rupees for display.
pub fn format_rupees(amount: u64) -> String {
    format!("₹{amount}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
    pub id: ProductId,
    pub name: String,
    pub subtitle: String,
    pub volume: String,
    pub image: String,
    pub quantity: u32,
    pub line_total: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSummary {
    pub subtotal: String,
    /// `"FREE"` or the flat cost.
    pub shipping: String,
    /// Either the free-shipping note or how much more to add.
    pub shipping_note: Option<String>,
    pub total: String,
}

/// Body text shown in place of rows when the cart is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyCartNotice {
    pub title: String,
    pub hint: String,
}

impl Default for EmptyCartNotice {
    fn default() -> Self {
        Self {
            title: EMPTY_CART_TITLE.to_string(),
            hint: EMPTY_CART_HINT.to_string(),
        }
    }
}

/// Everything the panel renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub is_open: bool,
    /// `"1 item"` / `"3 items"`, counting lines.
    pub header: String,
    pub rows: Vec<PanelRow>,
    /// Present only for an empty cart.
    pub empty_notice: Option<EmptyCartNotice>,
    /// Present only for a non-empty cart.
    pub summary: Option<PanelSummary>,
    pub checkout_enabled: bool,
}

impl PanelView {
    pub fn render(snapshot: &CartSnapshot, is_open: bool) -> Self {
        let count = snapshot.items.len();
        let header = format!("{count} {}", if count == 1 { "item" } else { "items" });

        let rows = snapshot
            .items
            .iter()
            .map(|line| PanelRow {
                id: line.id.clone(),
                name: line.name.clone(),
                subtitle: line.subtitle.clone(),
                volume: line.volume.clone(),
                image: line.image.clone(),
                quantity: line.quantity,
                line_total: format_rupees(line.line_total()),
            })
            .collect();

        let summary = (!snapshot.is_empty()).then(|| {
            let totals = &snapshot.totals;
            let shipping_note = if totals.qualifies_for_free_shipping() {
                Some(FREE_SHIPPING_NOTE.to_string())
            } else {
                totals
                    .free_shipping_hint()
                    .map(|amount| {
                        format!("Add {} more for free shipping", format_rupees(amount))
                    })
            };
            PanelSummary {
                subtotal: format_rupees(totals.subtotal),
                shipping: if totals.shipping == 0 {
                    "FREE".to_string()
                } else {
                    format_rupees(totals.shipping)
                },
                shipping_note,
                total: format_rupees(totals.total),
            }
        });

        Self {
            is_open,
            header,
            rows,
            empty_notice: snapshot.is_empty().then(EmptyCartNotice::default),
            summary,
            checkout_enabled: !snapshot.is_empty(),
        }
    }
}

/// The Cart Panel collaborator.
#[derive(Debug)]
pub struct CartPanel {
    inner: LedgerHandle,
    is_open: bool,
    snapshot: Option<CartSnapshot>,
}

impl CartPanel {
    pub fn new(inner: LedgerHandle) -> Self {
        Self {
            inner,
            is_open: false,
            snapshot: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Reacts to a cart notification: additions slide the panel open.
    pub fn observe(&mut self, event: &CartEvent) {
        if event.opens_panel() {
            self.is_open = true;
        }
    }

    /// Applies every event currently queued on `events` without waiting.
    pub fn drain_events(&mut self, events: &mut broadcast::Receiver<CartEvent>) {
        loop {
            match events.try_recv() {
                Ok(event) => self.observe(&event),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "Panel missed cart events");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
    }

    /// Re-queries the cart and renders it.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<PanelView, LedgerError> {
        let snapshot = self.inner.snapshot().await?;
        let view = PanelView::render(&snapshot, self.is_open);
        self.snapshot = Some(snapshot);
        Ok(view)
    }

    /// The view as of the last refresh.
    pub fn view(&self) -> Option<PanelView> {
        self.snapshot
            .as_ref()
            .map(|snapshot| PanelView::render(snapshot, self.is_open))
    }

    fn known_quantity(&self, id: &ProductId) -> Option<u32> {
        self.snapshot
            .as_ref()
            .and_then(|snapshot| snapshot.get(id))
            .map(|line| line.quantity)
    }

    /// The "+" stepper.
    #[instrument(skip(self))]
    pub async fn increment(&mut self, id: ProductId) -> Result<PanelView, LedgerError> {
        if let Some(quantity) = self.known_quantity(&id) {
            self.set_quantity(id, quantity.saturating_add(1)).await?;
        }
        self.refresh().await
    }

    /// The "-" stepper. Stops at 1; removal is [`remove`](Self::remove).
    #[instrument(skip(self))]
    pub async fn decrement(&mut self, id: ProductId) -> Result<PanelView, LedgerError> {
        if let Some(quantity) = self.known_quantity(&id) {
            self.set_quantity(id, quantity.saturating_sub(1).max(1)).await?;
        }
        self.refresh().await
    }

    async fn set_quantity(&self, id: ProductId, quantity: u32) -> Result<(), LedgerError> {
        if let UpdateOutcome::NotFound = self.inner.update_quantity(id, quantity).await? {
            debug!("Line vanished before the update landed");
        }
        Ok(())
    }

    /// The trash button.
    #[instrument(skip(self))]
    pub async fn remove(&mut self, id: ProductId) -> Result<PanelView, LedgerError> {
        self.inner.remove_item(id).await?;
        self.refresh().await
    }

    /// "Proceed to Checkout". Disabled for an empty cart.
    #[instrument(skip(self))]
    pub async fn checkout(&mut self) -> Result<CheckoutAck, LedgerError> {
        if self.snapshot.as_ref().is_some_and(CartSnapshot::is_empty) {
            return Err(CartError::EmptyCart.into());
        }
        let ack = self.inner.checkout().await?;
        self.refresh().await?;
        Ok(ack)
    }
}

#[async_trait]
impl LedgerClient for CartPanel {
    fn handle(&self) -> &LedgerHandle {
        &self.inner
    }
}
