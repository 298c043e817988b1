use crate::catalog::Catalog;
use crate::checkout::{CheckoutTrigger, PlaceholderCheckout};
use crate::clients::{CartClient, CartPanel, CatalogClient, LedgerClient};
use crate::config::{CartConfig, ConfigError};
use crate::notify::{BroadcastNotifier, CartEvent, Notifier, TracingNotifier};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info};

/// Sends every event to the log and to broadcast subscribers.
struct SessionNotifier {
    log: TracingNotifier,
    broadcast: BroadcastNotifier,
}

impl Notifier for SessionNotifier {
    fn notify(&self, event: CartEvent) {
        self.log.notify(event.clone());
        self.broadcast.notify(event);
    }
}

/// One shopping session: the cart actor plus the collaborators wired to it.
///
/// `CartSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the cart actor
/// - **Dependency Wiring**: Handing every client its own handle to the same ledger
/// - **Notifications**: Logging cart events and fanning them out to subscribers
///
/// # Example
///
/// ```ignore
/// let system = CartSystem::new(CartConfig::default())?;
///
/// system.catalog_client.add_to_cart("bottle-200ml".into(), 1).await?;
/// let mut panel = system.panel();
/// let view = panel.refresh().await?;
///
/// system.shutdown().await?;
/// ```
pub struct CartSystem {
    /// Full read/write access to the cart
    pub cart_client: CartClient,

    /// The product listing's "Add to Cart" entry point
    pub catalog_client: CatalogClient,

    notifier: BroadcastNotifier,

    /// Task handle of the cart actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl CartSystem {
    /// Starts a session with the placeholder checkout.
    pub fn new(config: CartConfig) -> Result<Self, ConfigError> {
        Self::with_checkout(config, Arc::new(PlaceholderCheckout))
    }

    /// Starts a session with a custom checkout trigger.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn with_checkout(
        config: CartConfig,
        checkout: Arc<dyn CheckoutTrigger>,
    ) -> Result<Self, ConfigError> {
        let catalog = Arc::new(config.catalog()?);
        Ok(Self::spawn(config, catalog, checkout))
    }

    fn spawn(
        config: CartConfig,
        catalog: Arc<Catalog>,
        checkout: Arc<dyn CheckoutTrigger>,
    ) -> Self {
        let broadcast = BroadcastNotifier::new(config.runtime.notification_capacity);
        let notifier = Arc::new(SessionNotifier {
            log: TracingNotifier,
            broadcast: broadcast.clone(),
        });

        let (actor, ledger) =
            crate::cart_actor::new(config.runtime.channel_buffer, notifier, config.shipping);
        let handle = tokio::spawn(actor.run(checkout));

        info!(products = catalog.len(), "Cart session started");

        Self {
            cart_client: CartClient::new(ledger.clone()),
            catalog_client: CatalogClient::new(ledger, catalog),
            notifier: broadcast,
            handle,
        }
    }

    /// A new cart panel bound to this session's ledger.
    pub fn panel(&self) -> CartPanel {
        CartPanel::new(self.cart_client.handle().clone())
    }

    /// Subscribes to cart notifications from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.notifier.subscribe()
    }

    /// Gracefully shuts down the session.
    ///
    /// Drops the system's clients and waits for the actor to drain. Panels
    /// created with [`panel`](Self::panel) hold handles too and must be dropped
    /// first, or this waits for them.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cart session...");

        drop(self.cart_client);
        drop(self.catalog_client);

        if let Err(e) = self.handle.await {
            error!("Cart actor failed: {:?}", e);
            return Err(format!("Cart actor failed: {:?}", e));
        }

        info!("Cart session shutdown complete.");
        Ok(())
    }
}
