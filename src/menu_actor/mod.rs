//! # Menu Actor
//!
//! The menu catalog: every dish and drink the restaurant sells, with its price.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`MenuItem`]
//! - [`error`] - [`MenuError`] type for type-safe error handling
//! - [`seed`] - loading the initial menu from a JSON file
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use restaurant_orders::menu_actor;
//! use restaurant_orders::model::MenuItemCreate;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = menu_actor::new(32);
//!
//!     // The menu has no dependencies, so its context is ()
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_item(MenuItemCreate::new("Green Tea", Decimal::new(250, 2)))
//!         .await?;
//!     assert!(client.find_item(id).await?.is_some());
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Immutable rows**: items are validated on creation and have no update payload
//! - **Unique names**: a second item with the same name is rejected with `DuplicateName`
//! - **Stable listing**: items are listed in the order they were added

pub mod entity;
pub mod error;
pub mod seed;

pub use error::*;

use crate::clients::MenuClient;
use crate::model::MenuItem;
use resource_actor::ResourceActor;

/// Creates a new Menu actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<MenuItem>, MenuClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, MenuClient::new(generic_client))
}
