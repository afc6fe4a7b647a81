//! Error types for the menu actor.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// A menu item needs a non-blank name.
    #[error("Menu item name must not be empty")]
    EmptyName,

    /// Prices are never negative.
    #[error("Invalid price: {0}")]
    NegativePrice(Decimal),

    /// Another item already uses this name.
    #[error("Menu item already exists: {0}")]
    DuplicateName(String),

    /// The seed file could not be read or parsed.
    #[error("Menu seed error: {0}")]
    Seed(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<resource_actor::FrameworkError> for MenuError {
    fn from(e: resource_actor::FrameworkError) -> Self {
        use resource_actor::FrameworkError;
        match e {
            FrameworkError::Conflict(name) => MenuError::DuplicateName(name),
            other => other
                .downcast_entity::<MenuError>()
                .unwrap_or_else(|e| MenuError::ActorCommunicationError(e.to_string())),
        }
    }
}
