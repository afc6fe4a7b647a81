//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber::fmt` subscriber filtered by the
//! `RUST_LOG` environment variable. Module paths are hidden (`with_target(false)`); the actor loop
//! tags its events with `entity_type` instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown, and final store size
//! - **Entity Operations**: Create, Get, List, Update with the entity ID
//! - **HTTP Requests**: one span per request from `tower_http`'s `TraceLayer`
//! - **Errors**: rejected creates and updates with their reason
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=restaurant_orders=debug,tower_http=debug cargo run
//! ```
//!
//! With `RUST_LOG=info`, placing an order logs roughly:
//!
//! ```text
//! INFO request{method=POST uri=/order}:create_order{selections=2}: Order placed id=order_1
//! INFO Created entity_type="Order" id=order_1 size=1
//! ```

/// Initializes the global subscriber. Call once, at the top of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
