//! # Coconut Cart
//!
//! > **The shopping cart behind the coconut-water storefront.**
//!
//! The cart is an ordered ledger of line items, one per product, with derived
//! totals and a free-shipping threshold. The storefront pages talk to it
//! through two collaborators: the product listing adds items, and the
//! slide-over cart panel shows lines and totals and triggers checkout.
//!
//! ## Design
//!
//! ### 1. Owned, not global
//! A [`CartLedger`](cart_actor::CartLedger) belongs to exactly one session.
//! Inside a Tokio runtime it lives in a [`LedgerActor`](framework::LedgerActor)
//! that applies requests one at a time, so clients on other tasks never race.
//!
//! ### 2. Permissive by default
//! Only malformed input is an error ([`CartError`](cart_actor::CartError)).
//! Updating or removing a line that is already gone is a quiet no-op.
//!
//! ### 3. Integer money
//! Prices are whole rupees (`u64`). Totals are recomputed from the items on
//! every read; shipping is free only when the subtotal is *strictly* above the
//! threshold.
//!
//! ### 4. Injected side effects
//! Toast messages go through a [`Notifier`](notify::Notifier) and checkout
//! through a [`CheckoutTrigger`](checkout::CheckoutTrigger), both supplied by
//! whoever builds the session.
//!
//! ## Module Tour
//!
//! - [`model`] - [`Product`](model::Product) and [`LineItem`](model::LineItem)
//! - [`cart_actor`] - the ledger and its invariants
//! - [`totals`] - subtotal, shipping and total
//! - [`framework`] - the actor, its handle, and a mock for tests
//! - [`clients`] - catalog client, cart client and cart panel view model
//! - [`lifecycle`] - [`CartSystem`](lifecycle::CartSystem) and tracing setup
//! - [`config`], [`catalog`], [`notify`], [`checkout`]
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod cart_actor;
pub mod catalog;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod totals;
