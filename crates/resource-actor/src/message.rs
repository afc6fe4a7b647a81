//! # Generic Messages
//!
//! Requests sent from a `ResourceClient` to its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants cover the operations a row-oriented store needs here:
///
/// - **Create**: allocate an ID, build the entity from [`ActorEntity::Create`], reply with it.
/// - **Get**: fetch one entity by ID (`None` when absent, which is not an error).
/// - **List**: fetch every entity, in ascending ID order.
/// - **Update**: mutate one entity with [`ActorEntity::Update`].
///
/// Resources are never removed, so there is no delete request.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
}
