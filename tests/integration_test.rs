use coconut_cart::cart_actor::{CartError, LedgerState, UpdateOutcome};
use coconut_cart::checkout::CheckoutAck;
use coconut_cart::clients::LedgerClient;
use coconut_cart::config::CartConfig;
use coconut_cart::framework::LedgerError;
use coconut_cart::lifecycle::CartSystem;
use coconut_cart::notify::CartEvent;

/// Full end-to-end session with the real actor and the storefront catalog.
#[tokio::test]
async fn test_storefront_session() {
    let system = CartSystem::new(CartConfig::default()).expect("Failed to start session");
    let mut events = system.subscribe();

    system
        .catalog_client
        .add_to_cart("bottle-200ml".into(), 1)
        .await
        .expect("Failed to add bottle");
    system
        .catalog_client
        .add_to_cart("monthly-pack-10".into(), 1)
        .await
        .expect("Failed to add monthly pack");

    let outcome = system
        .cart_client
        .update_quantity("bottle-200ml".into(), 3)
        .await
        .expect("Failed to update quantity");
    assert!(matches!(outcome, UpdateOutcome::Updated(ref line) if line.quantity == 3));

    let snapshot = system.cart_client.snapshot().await.expect("Failed to read cart");
    let ids: Vec<&str> = snapshot.items.iter().map(|line| line.id.as_str()).collect();
    assert_eq!(ids, vec!["bottle-200ml", "monthly-pack-10"]);
    assert_eq!(snapshot.totals.subtotal, 419);
    assert_eq!(snapshot.totals.shipping, 50);
    assert_eq!(snapshot.totals.total, 469);

    let first = events.recv().await.expect("Missing first event");
    assert_eq!(first.message(), "Tender Coconut Water added to cart!");
    let second = events.recv().await.expect("Missing second event");
    assert_eq!(second.message(), "Instant Coconut Water added to cart!");

    system.shutdown().await.expect("Failed to shutdown session");
}

/// The free-shipping threshold is strict: 500 pays shipping, 501 does not.
#[tokio::test]
async fn test_free_shipping_boundary() {
    let raw = r#"
        [[products]]
        id = "gift-box"
        name = "Gift Box"
        subtitle = "Assorted"
        price = 500
        volume = "6 Bottles"
        image = "gift.png"

        [[products]]
        id = "sample"
        name = "Sample"
        subtitle = "Taster"
        price = 1
        volume = "50ml"
        image = "sample.png"
    "#;
    let system = CartSystem::new(CartConfig::from_toml_str(raw).unwrap()).unwrap();

    system.catalog_client.add_to_cart("gift-box".into(), 1).await.unwrap();
    let totals = system.cart_client.totals().await.unwrap();
    assert_eq!((totals.subtotal, totals.shipping, totals.total), (500, 50, 550));

    system.catalog_client.add_to_cart("sample".into(), 1).await.unwrap();
    let totals = system.cart_client.totals().await.unwrap();
    assert_eq!((totals.subtotal, totals.shipping, totals.total), (501, 0, 501));

    system.shutdown().await.unwrap();
}

/// Flat shipping is charged even for an empty cart. This is the literal
/// strict-threshold behaviour and is kept on purpose.
#[tokio::test]
async fn test_empty_cart_totals_charge_flat_shipping() {
    let system = CartSystem::new(CartConfig::default()).unwrap();

    let totals = system.cart_client.totals().await.unwrap();
    assert_eq!(totals.subtotal, 0);
    assert_eq!(totals.shipping, 50);
    assert_eq!(totals.total, 50);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_remove_and_update_to_zero_empty_the_cart() {
    let system = CartSystem::new(CartConfig::default()).unwrap();
    let client = &system.cart_client;

    system.catalog_client.add_to_cart("bottle-200ml".into(), 2).await.unwrap();
    system.catalog_client.add_to_cart("sachet-pack-12".into(), 1).await.unwrap();

    assert!(client.remove_item("sachet-pack-12".into()).await.unwrap().is_some());
    assert!(client.remove_item("sachet-pack-12".into()).await.unwrap().is_none());

    let outcome = client.update_quantity("bottle-200ml".into(), 0).await.unwrap();
    assert!(matches!(outcome, UpdateOutcome::Removed(_)));
    assert_eq!(
        client.update_quantity("bottle-200ml".into(), 4).await.unwrap(),
        UpdateOutcome::NotFound
    );

    assert!(client.items().await.unwrap().is_empty());
    assert_eq!(
        client.checkout().await.unwrap_err(),
        LedgerError::Cart(CartError::EmptyCart)
    );

    system.shutdown().await.unwrap();
}

/// The panel opens on additions, steps quantities, and checks out.
#[tokio::test]
async fn test_panel_flow() {
    let system = CartSystem::new(CartConfig::default()).unwrap();
    let mut events = system.subscribe();
    let mut panel = system.panel();

    let view = panel.refresh().await.unwrap();
    assert!(!view.is_open);
    assert!(!view.checkout_enabled);

    system.catalog_client.add_to_cart("sachet-pack-12".into(), 1).await.unwrap();
    system.catalog_client.add_to_cart("sachet-pack-12".into(), 1).await.unwrap();
    panel.drain_events(&mut events);
    assert!(panel.is_open());

    let view = panel.refresh().await.unwrap();
    assert_eq!(view.header, "1 item");
    assert_eq!(view.rows[0].quantity, 2);
    let summary = view.summary.as_ref().unwrap();
    assert_eq!(summary.subtotal, "₹698");
    assert_eq!(summary.shipping, "FREE");

    let view = panel.decrement("sachet-pack-12".into()).await.unwrap();
    assert_eq!(view.rows[0].quantity, 1);
    let view = panel.decrement("sachet-pack-12".into()).await.unwrap();
    assert_eq!(view.rows[0].quantity, 1, "stepper never removes the line");
    let summary = view.summary.as_ref().unwrap();
    assert_eq!(summary.shipping, "₹50");
    assert_eq!(summary.shipping_note.as_deref(), Some("Add ₹151 more for free shipping"));

    let ack = panel.checkout().await.unwrap();
    assert_eq!(ack, CheckoutAck::Redirecting);
    assert_eq!(panel.view().unwrap().rows.len(), 1);

    drop(panel);
    system.shutdown().await.unwrap();
}

/// Many tasks adding concurrently still produce one line per product.
#[tokio::test]
async fn test_concurrent_adds_aggregate() {
    let system = CartSystem::new(CartConfig::default()).unwrap();

    let mut tasks = Vec::new();
    for i in 0..20 {
        let client = system.catalog_client.clone();
        let id = if i % 2 == 0 { "bottle-200ml" } else { "monthly-pack-10" };
        tasks.push(tokio::spawn(async move { client.add_to_cart(id.into(), 1).await }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let items = system.cart_client.items().await.unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|line| line.quantity == 10));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_product_and_zero_quantity_are_rejected() {
    let system = CartSystem::new(CartConfig::default()).unwrap();
    let mut events = system.subscribe();

    let err = system.catalog_client.add_to_cart("mango".into(), 1).await.unwrap_err();
    assert_eq!(err, LedgerError::Cart(CartError::UnknownProduct("mango".into())));

    let err = system.catalog_client.add_to_cart("bottle-200ml".into(), 0).await.unwrap_err();
    assert_eq!(err, LedgerError::Cart(CartError::InvalidQuantity(0)));

    assert!(system.cart_client.items().await.unwrap().is_empty());
    assert!(matches!(
        events.try_recv(),
        Err(tokio::sync::broadcast::error::TryRecvError::Empty)
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_checkout_event_is_broadcast() {
    let system = CartSystem::new(CartConfig::default()).unwrap();
    system.catalog_client.add_to_cart("bottle-200ml".into(), 1).await.unwrap();
    let mut events = system.subscribe();

    system.cart_client.checkout().await.unwrap();
    assert_eq!(events.recv().await.unwrap(), CartEvent::checkout_requested());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_clear_empties_the_session_cart() {
    let system = CartSystem::new(CartConfig::default()).unwrap();
    let names: Vec<&str> = system
        .catalog_client
        .products()
        .iter()
        .map(|product| product.id.as_str())
        .collect();
    assert_eq!(names, vec!["bottle-200ml", "monthly-pack-10", "sachet-pack-12"]);

    for id in ["bottle-200ml", "monthly-pack-10", "sachet-pack-12"] {
        system.catalog_client.add_to_cart(id.into(), 1).await.unwrap();
    }

    assert_eq!(system.cart_client.clear().await.unwrap(), 3);
    let snapshot = system.cart_client.snapshot().await.unwrap();
    assert_eq!(snapshot.state(), LedgerState::Empty);
    assert_eq!(
        system.cart_client.checkout().await.unwrap_err(),
        LedgerError::Cart(CartError::EmptyCart)
    );

    system.shutdown().await.unwrap();
}

/// A configured price large enough to overflow a line total keeps the
/// session usable; amounts saturate.
#[tokio::test]
async fn test_configured_huge_price_keeps_session_alive() {
    let raw = r#"
        [[products]]
        id = "pricey"
        name = "Pricey"
        subtitle = "Collector"
        price = 9223372036854775807
        volume = "1 Crate"
        image = "crate.png"
    "#;
    let system = CartSystem::new(CartConfig::from_toml_str(raw).unwrap()).unwrap();

    let line = system.catalog_client.add_to_cart("pricey".into(), 3).await.unwrap();
    assert_eq!(line.quantity, 3);

    let totals = system.cart_client.totals().await.unwrap();
    assert_eq!(totals.subtotal, u64::MAX);
    assert_eq!(totals.total, u64::MAX);
    assert_eq!(system.cart_client.items().await.unwrap().len(), 1);

    system.shutdown().await.unwrap();
}
