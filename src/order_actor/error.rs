//! Error types for the Order actor.

use crate::menu_actor::MenuError;
use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// An order was submitted without any menu item. Nothing was created.
    #[error("Please select at least one item to order.")]
    EmptySelection,

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// A status update arrived without a status.
    #[error("Status not provided")]
    MissingStatus,

    /// Looking up the menu while placing the order failed.
    #[error(transparent)]
    Menu(#[from] MenuError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => other
                .downcast_entity::<OrderError>()
                .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string())),
        }
    }
}
