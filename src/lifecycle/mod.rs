//! Runtime orchestration: starting, wiring, and stopping the actors, plus tracing setup.
//!
//! - [`RestaurantSystem`] - spawns the actors and hands out their clients
//! - [`setup_tracing`] - initializes logging

pub mod restaurant_system;
pub mod tracing;

pub use self::restaurant_system::*;
pub use self::tracing::setup_tracing;
