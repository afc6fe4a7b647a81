//! ActorEntity trait implementation for the MenuItem domain type.
//!
//! Menu items are validated once, on creation, and never change afterwards.

use super::MenuError;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use rust_decimal::Decimal;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = Infallible;
    type Context = ();
    type Error = MenuError;

    /// Creates a new MenuItem from creation parameters.
    ///
    /// # Errors
    /// - `EmptyName` when the name is blank
    /// - `NegativePrice` when the price is below zero
    async fn from_create(
        id: MenuItemId,
        params: MenuItemCreate,
        _ctx: &(),
    ) -> Result<Self, MenuError> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(MenuError::EmptyName);
        }
        if params.price < Decimal::ZERO {
            return Err(MenuError::NegativePrice(params.price));
        }
        Ok(Self::new(id, name, params.price))
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), MenuError> {
        match update {}
    }

    /// Names are unique across the menu.
    fn unique_key(&self) -> Option<String> {
        Some(self.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_from_create_trims_name() {
        let item = MenuItem::from_create(
            MenuItemId(1),
            MenuItemCreate::new("  Ramen ", dec!(11.00)),
            &(),
        )
        .await
        .unwrap();
        assert_eq!(item.name, "Ramen");
        assert_eq!(item.price, dec!(11.00));
    }

    #[tokio::test]
    async fn test_from_create_rejects_invalid_items() {
        let blank = MenuItem::from_create(MenuItemId(1), MenuItemCreate::new(" ", dec!(1)), &()).await;
        assert_eq!(blank.unwrap_err(), MenuError::EmptyName);

        let negative =
            MenuItem::from_create(MenuItemId(1), MenuItemCreate::new("Tea", dec!(-0.50)), &()).await;
        assert_eq!(negative.unwrap_err(), MenuError::NegativePrice(dec!(-0.50)));
    }

    #[tokio::test]
    async fn test_free_items_are_allowed() {
        let water = MenuItem::from_create(MenuItemId(2), MenuItemCreate::new("Water", dec!(0)), &())
            .await
            .unwrap();
        assert_eq!(water.price, Decimal::ZERO);
    }
}
