//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns one relation's rows. It
//! processes messages sequentially, so every request sees the store exclusively and each write
//! is atomic with respect to every other request.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This struct is the "server" half of the actor. It owns the state (`store`) and the receiver
/// end of the channel; the paired [`ResourceClient`] is the only way to reach it.
///
/// **Concurrency model**: the actor handles one message at a time inside its own Tokio task, so
/// the store needs no `Mutex`. Two clients racing to update the same entity are simply served in
/// arrival order (last write wins).
///
/// # Usage Pattern
///
/// 1.  **Create**: call `ResourceActor::new()` to get the `actor` (server) and `client`.
/// 2.  **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust,ignore
/// let (actor, client) = ResourceActor::<MenuItem>::new(32);
/// tokio::spawn(actor.run(()));
/// let item = client.create(params).await?;
/// ```
///
/// # Operations
///
/// * **Create**: builds the entity with the next ID through [`ActorEntity::from_create`],
///   rejects it if its [`unique_key`](ActorEntity::unique_key) is taken, then stores it and
///   replies with a copy. The counter only advances when the entity is stored, so IDs stay
///   gap-free.
/// * **Get**: clone of the entity, or `None`.
/// * **List**: clones of every entity in ascending ID order.
/// * **Update**: applies [`ActorEntity::on_update`] to a copy and swaps it in on success.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. When it is full, client calls wait
    /// for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// The `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Just the type name, e.g. "Order" rather than "restaurant_orders::model::order::Order"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok((id, _)) => info!(entity_type, %id, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result.map(|(_, item)| item));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    let mut item = current.clone();
                    if let Err(e) = item.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.insert(id.clone(), item.clone());
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(item));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<(T::Id, T), FrameworkError> {
        let id = T::Id::from(self.next_id);
        let item = T::from_create(id.clone(), params, context)
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;

        if let Some(key) = item.unique_key() {
            let taken = self
                .store
                .values()
                .any(|other| other.unique_key().as_deref() == Some(key.as_str()));
            if taken {
                return Err(FrameworkError::Conflict(key));
            }
        }

        self.next_id += 1;
        self.store.insert(id.clone(), item.clone());
        Ok((id, item))
    }
}
