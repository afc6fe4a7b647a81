//! A purchasable dish or drink.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
//!
//! See [`impl ActorEntity for MenuItem`](MenuItem#impl-ActorEntity-for-MenuItem) for details on:
//! - Creation parameters ([`MenuItemCreate`])
//! - Validation (non-empty name, non-negative price, unique name)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::num::ParseIntError;
use std::str::FromStr;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu_item_{}", self.0)
    }
}

/// Parses the bare number used in form fields (`"3"`).
impl FromStr for MenuItemId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: Decimal,
}

impl MenuItem {
    /// Creates a new MenuItem instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (normally allocated by the actor system)
    /// * `name` - Display name, unique across the menu
    /// * `price` - Unit price
    pub fn new(id: MenuItemId, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// Payload for adding an item to the menu.
///
/// This is also the shape of one entry in the menu seed file:
///
/// ```json
/// { "name": "Miso Soup", "price": "3.50" }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: Decimal,
}

impl MenuItemCreate {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}
