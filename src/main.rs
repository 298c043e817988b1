//! Storefront cart demo.
//!
//! Plays one shopping session against the built-in catalog: two products are
//! added, a quantity is bumped with the panel stepper, and checkout is
//! requested.

use coconut_cart::clients::PanelView;
use coconut_cart::config::CartConfig;
use coconut_cart::lifecycle::{setup_tracing, CartSystem};
use tracing::{error, info, Instrument};

fn print_view(view: &PanelView) {
    println!("Shopping Cart ({})", view.header);
    for row in &view.rows {
        println!(
            "  {} - {} ({}) x{}  {}",
            row.name, row.subtitle, row.volume, row.quantity, row.line_total
        );
    }
    if let Some(notice) = &view.empty_notice {
        println!("  {}", notice.title);
        println!("  {}", notice.hint);
    }
    if let Some(summary) = &view.summary {
        println!("  Subtotal {}", summary.subtotal);
        println!("  Shipping {}", summary.shipping);
        if let Some(note) = &summary.shipping_note {
            println!("  {note}");
        }
        println!("  Total    {}", summary.total);
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = CartConfig::from_env().map_err(|e| e.to_string())?;
    let system = CartSystem::new(config).map_err(|e| e.to_string())?;
    let mut events = system.subscribe();

    let span = tracing::info_span!("browsing");
    async {
        info!("Adding products from the catalog");
        system
            .catalog_client
            .add_to_cart("bottle-200ml".into(), 1)
            .await?;
        system
            .catalog_client
            .add_to_cart("monthly-pack-10".into(), 1)
            .await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let mut panel = system.panel();
    panel.drain_events(&mut events);
    panel.refresh().await.map_err(|e| e.to_string())?;

    panel
        .increment("bottle-200ml".into())
        .await
        .map_err(|e| e.to_string())?;
    let view = panel
        .increment("bottle-200ml".into())
        .await
        .map_err(|e| e.to_string())?;
    print_view(&view);

    let span = tracing::info_span!("checkout");
    match panel.checkout().instrument(span).await {
        Ok(ack) => info!(?ack, "Checkout acknowledged"),
        Err(e) => error!(error = %e, "Checkout failed"),
    }

    drop(panel);
    system.shutdown().await?;

    info!("Session completed successfully");
    Ok(())
}
