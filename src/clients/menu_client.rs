use crate::menu_actor::MenuError;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    /// Adds an item to the menu and returns its new ID.
    #[instrument(skip(self))]
    pub async fn create_item(&self, item: MenuItemCreate) -> Result<MenuItemId, MenuError> {
        debug!("Sending request");
        self.inner
            .create(item)
            .await
            .map(|item| item.id)
            .map_err(Self::map_error)
    }

    /// Every menu item, in the order they were added.
    pub async fn list_items(&self) -> Result<Vec<MenuItem>, MenuError> {
        self.list().await
    }

    /// Looks an item up by ID. Absence is `Ok(None)`.
    pub async fn find_item(&self, id: MenuItemId) -> Result<Option<MenuItem>, MenuError> {
        self.get(id).await
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        MenuError::from(e)
    }
}
