use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderUpdate};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Resolving the requested menu items happens inside the Order actor's `from_create` hook.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order and returns it as stored: its new ID, `pending`, and the resolved items.
    #[instrument(skip(self, order), fields(selections = order.selections.len()))]
    pub async fn create_order(&self, order: OrderCreate) -> Result<Order, OrderError> {
        debug!(?order, "create_order called");
        let order = self.inner.create(order).await.map_err(Self::map_error)?;
        info!(id = %order.id, items = order.items.len(), "Order placed");
        Ok(order)
    }

    pub async fn get_order(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        self.get(id).await
    }

    /// Every order, newest first.
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.list().await?;
        orders.reverse();
        Ok(orders)
    }

    /// Sets the status label of an order and returns the stored status.
    #[instrument(skip(self, label))]
    pub async fn update_status(
        &self,
        id: OrderId,
        label: impl Into<String> + Send,
    ) -> Result<OrderStatus, OrderError> {
        let update = OrderUpdate::status(label);
        debug!(status = %update.status, "Sending request");
        let order = self.inner.update(id, update).await.map_err(Self::map_error)?;
        info!(%id, status = %order.status, "Order status changed");
        Ok(order.status)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}
