//! # Restaurant Orders
//!
//! A small restaurant ordering service: customers browse the menu and place orders, the kitchen
//! moves orders through their workflow, and anyone can pull up the bill for an order.
//!
//! ## Architecture
//!
//! Each relation lives in its own Tokio actor built on the [`resource_actor`] crate. The actor
//! owns its rows and processes one request at a time; everything else talks to it through a
//! cloneable client.
//!
//! ### 1. The Data ([`model`])
//! Plain data types: [`MenuItem`](model::MenuItem), [`Order`](model::Order),
//! [`OrderStatus`](model::OrderStatus), and the payloads that create and update them.
//!
//! ### 2. The Actors ([`menu_actor`], [`order_actor`])
//! [`ActorEntity`](resource_actor::ActorEntity) implementations holding the validation rules.
//! The order actor resolves requested items through a [`MenuClient`](clients::MenuClient)
//! injected as its context.
//!
//! ### 3. The Interface ([`clients`])
//! Domain wrappers around the generic `ResourceClient`: typed IDs in, typed errors out.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`RestaurantSystem`](lifecycle::RestaurantSystem) spawns and wires the actors and shuts them
//! down again.
//!
//! ### 5. The Edges ([`billing`], [`web`], [`config`])
//! Bill computation, the axum HTTP layer, and environment configuration.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info MENU_FILE=menu.json cargo run
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test
//! ```
//!
//! `tests/order_actor_test.rs` runs the real order actor against a mocked menu
//! ([`resource_actor::mock::MockClient`]); `tests/http_test.rs` drives the router in-process.

pub mod billing;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod web;
