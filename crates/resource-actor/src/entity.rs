//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a resource (a menu item, an order, …) implements to be
//! owned by a [`ResourceActor`](crate::ResourceActor). It names the identifier, the creation and
//! update payloads, the injected context and the error type, and provides the two hooks the actor
//! drives: [`ActorEntity::from_create`] and [`ActorEntity::on_update`].
//!
//! # Identifiers
//! Identifiers are allocated by the actor from a `u32` counter and must be ordered: the store is
//! kept sorted by identifier so that listing is deterministic and follows creation order.
//!
//! # Uniqueness
//! An entity may expose a [`unique_key`](ActorEntity::unique_key). The actor rejects a creation
//! whose key is already held by another entity, which is how column-level `UNIQUE` constraints
//! (e.g. a menu item's name) are expressed without a database.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so an entity can consult other actors while it is being built or updated.
/// The `Context` type holds those dependencies; it is handed to `run()` rather than `new()`, so
/// actors can be created first and wired afterwards.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    /// Use `std::convert::Infallible` for entities that never change.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per entity, shared by every hook. Clients downcast it back out of
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the entity from its freshly allocated ID and the creation payload.
    ///
    /// Returning an error aborts the creation: nothing is stored and the ID is not consumed.
    async fn from_create(
        id: Self::Id,
        params: Self::Create,
        ctx: &Self::Context,
    ) -> Result<Self, Self::Error>;

    /// Apply an update in place. On error the stored entity is left untouched.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Value that must be unique across all stored entities of this type.
    fn unique_key(&self) -> Option<String> {
        None
    }
}
