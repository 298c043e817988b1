//! # Observability & Tracing
//!
//! Structured logging for the cart.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup with the shipping policy, shutdown with the final line count
//! - **Requests**: every `LedgerRequest` at `debug`, with ids and quantities as fields
//! - **Outcomes**: additions, updates, removals and checkout at `info`
//! - **Rejections**: invalid input at `warn`
//! - **Notifications**: each toast message at `info` via `TracingNotifier`
//!
//! ## Usage Examples
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run
//! RUST_LOG=coconut_cart::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` the demo prints roughly:
//!
//! ```text
//! INFO Cart actor started threshold=500 flat_cost=50
//! INFO add_to_cart: Item added id=bottle-200ml quantity=1 lines=1
//! INFO add_to_cart: Cart notification message="Tender Coconut Water added to cart!"
//! INFO Quantity updated id=bottle-200ml quantity=3
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
