//! Pure data structures implementing the [`ActorEntity`](resource_actor::ActorEntity) trait.

pub mod menu_item;
pub mod order;
pub mod status;

pub use menu_item::*;
pub use order::*;
pub use status::*;
