//! ActorEntity trait implementation for the Order domain type.
//!
//! Placing an order resolves each requested menu item through the [`MenuClient`] injected as the
//! actor's context. Requested items that do not resolve are skipped; the order is still placed.

use super::OrderError;
use crate::clients::MenuClient;
use crate::model::{MenuItem, Order, OrderCreate, OrderId, OrderStatus, OrderUpdate, Selection};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Context = MenuClient;
    type Error = OrderError;

    /// Builds a `pending` order from the requested menu items.
    ///
    /// # Errors
    /// - `EmptySelection` when nothing was requested
    /// - `Menu` when the menu actor cannot be reached
    async fn from_create(
        id: OrderId,
        params: OrderCreate,
        menu: &MenuClient,
    ) -> Result<Self, OrderError> {
        if params.selections.is_empty() {
            return Err(OrderError::EmptySelection);
        }

        let mut items: Vec<MenuItem> = Vec::with_capacity(params.selections.len());
        for selection in params.selections {
            match selection {
                Selection::Item(item_id) => match menu.find_item(item_id).await? {
                    Some(item) => items.push(item),
                    None => debug!(%id, %item_id, "Skipping unknown menu item"),
                },
                Selection::Unrecognized(raw) => {
                    debug!(%id, raw = %raw, "Skipping unrecognized selection")
                }
            }
        }

        Ok(Order::new(id, items))
    }

    /// Replaces the status with the given label.
    ///
    /// Any non-empty label is accepted, including ones outside [`OrderStatus::KNOWN`], and any
    /// status may follow any other.
    async fn on_update(&mut self, update: OrderUpdate, _menu: &MenuClient) -> Result<(), OrderError> {
        if update.status.is_empty() {
            return Err(OrderError::MissingStatus);
        }
        self.status = OrderStatus::from(update.status);
        Ok(())
    }
}
