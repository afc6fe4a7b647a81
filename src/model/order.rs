//! Customer orders and the payloads that create and update them.
//!
//! [`Order`] implements the [`ActorEntity`](resource_actor::ActorEntity) trait in
//! [`crate::order_actor::entity`].

use crate::model::{MenuItem, MenuItemId, OrderStatus};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// A placed order.
///
/// `items` holds one entry per menu item that was resolved when the order was placed, in the
/// order they were requested. Picking the same item twice yields two entries. Items are
/// immutable snapshots of the menu rows they reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    pub items: Vec<MenuItem>,
}

impl Order {
    /// Creates a new `pending` Order holding `items`.
    pub fn new(id: OrderId, items: Vec<MenuItem>) -> Self {
        Self {
            id,
            status: OrderStatus::Pending,
            items,
        }
    }
}

/// One requested menu item, as submitted by the customer.
///
/// Form fields arrive as text; anything that is not a menu item identifier is kept as
/// `Unrecognized` and, like an identifier with no matching item, resolves to nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Item(MenuItemId),
    Unrecognized(String),
}

impl From<MenuItemId> for Selection {
    fn from(id: MenuItemId) -> Self {
        Selection::Item(id)
    }
}

impl From<&str> for Selection {
    fn from(raw: &str) -> Self {
        match raw.parse() {
            Ok(id) => Selection::Item(id),
            Err(_) => Selection::Unrecognized(raw.to_string()),
        }
    }
}

impl From<String> for Selection {
    fn from(raw: String) -> Self {
        Selection::from(raw.as_str())
    }
}

/// Payload for placing an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub selections: Vec<Selection>,
}

impl OrderCreate {
    pub fn new<S: Into<Selection>>(selections: impl IntoIterator<Item = S>) -> Self {
        Self {
            selections: selections.into_iter().map(Into::into).collect(),
        }
    }
}

/// Payload for changing an order after it was placed.
///
/// Only the status can change. The label is taken as given; an empty label is rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderUpdate {
    pub status: String,
}

impl OrderUpdate {
    pub fn status(label: impl Into<String>) -> Self {
        Self {
            status: label.into(),
        }
    }
}
