//! # Resource Actor
//!
//! Building blocks for keeping a small relational data set behind Tokio actors. Each relation
//! (menu items, orders, …) is owned by one [`ResourceActor`] that holds its rows in an ordered
//! in-memory store and serves create / get / list / update requests one at a time. Callers talk
//! to it through a cloneable [`ResourceClient`].
//!
//! ## Why actors?
//!
//! - **Isolated state**: the store belongs to exactly one task, so there are no locks to get
//!   wrong and every request is applied atomically.
//! - **Explicit handles**: components receive clients by injection instead of reaching for a
//!   process-wide database handle, which keeps tests isolated and parallel.
//! - **Cross-resource lookups**: an entity's hooks receive a `Context` with other clients, so an
//!   order can resolve the menu items it references while it is being created.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain types and their creation/update rules
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and ID allocation
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use resource_actor::{ActorEntity, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct Table {
//!     id: u32,
//!     seats: u32,
//! }
//!
//! #[derive(Debug)]
//! struct TableCreate {
//!     seats: u32,
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("a table needs at least one seat")]
//! struct NoSeats;
//!
//! #[async_trait]
//! impl ActorEntity for Table {
//!     type Id = u32;
//!     type Create = TableCreate;
//!     type Update = std::convert::Infallible;
//!     type Context = ();
//!     type Error = NoSeats;
//!
//!     async fn from_create(id: u32, params: TableCreate, _: &()) -> Result<Self, NoSeats> {
//!         if params.seats == 0 {
//!             return Err(NoSeats);
//!         }
//!         Ok(Self { id, seats: params.seats })
//!     }
//!
//!     async fn on_update(&mut self, update: Self::Update, _: &()) -> Result<(), NoSeats> {
//!         match update {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Table>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     assert!(client.create(TableCreate { seats: 0 }).await.is_err());
//!     let table = client.create(TableCreate { seats: 4 }).await.unwrap();
//!     assert_eq!(table.id, 1); // the rejected create did not consume an ID
//!
//!     let fetched = client.get(table.id).await.unwrap().unwrap();
//!     assert_eq!(fetched.seats, 4);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor
//! - Different actors run in **parallel**
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockClient`, which answers requests from scripted
//! expectations so an actor can be tested with its dependencies mocked out.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
