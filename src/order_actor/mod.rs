//! # Order Actor
//!
//! The order ledger: placed orders, the menu items on them, and their kitchen status.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The Order actor needs the menu to resolve requested items, so its context is a
//! [`MenuClient`](crate::clients::MenuClient):
//!
//! ```rust,ignore
//! let (menu_actor, menu_client) = menu_actor::new(32);
//! let (order_actor, order_client) = order_actor::new(32);
//!
//! tokio::spawn(menu_actor.run(()));
//! tokio::spawn(order_actor.run(menu_client.clone()));
//! ```
//!
//! ## Lifecycle rules
//!
//! - An order is created `pending`, with its items fixed at creation
//! - Requesting nothing is rejected with [`OrderError::EmptySelection`]
//! - Unknown items are skipped; an order may end up with no items at all
//! - The status is the only field that ever changes, and it changes freely

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use resource_actor::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
