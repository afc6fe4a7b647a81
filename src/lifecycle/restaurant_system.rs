use crate::clients::{MenuClient, OrderClient};
use crate::{menu_actor, order_actor};
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// An actor task ended abnormally during shutdown.
#[derive(Debug, Error)]
#[error("Actor task failed: {0}")]
pub struct ShutdownError(#[from] JoinError);

/// Owns the running actors of the restaurant and the clients used to reach them.
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::new(32);
///
/// let item = system.menu_client.create_item(MenuItemCreate::new("Tea", dec!(2.00))).await?;
/// let order = system.order_client.create_order(OrderCreate::new([item])).await?;
///
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    pub menu_client: MenuClient,
    pub order_client: OrderClient,
    handles: Vec<JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Spawns the menu and order actors. Must be called inside a Tokio runtime.
    ///
    /// `buffer_size` is the request queue capacity of each actor.
    pub fn new(buffer_size: usize) -> Self {
        // 1. Create actors
        let (menu_actor, menu_client) = menu_actor::new(buffer_size);
        let (order_actor, order_client) = order_actor::new(buffer_size);

        // 2. Spawn with context; the order actor resolves items through the menu
        let menu_handle = tokio::spawn(menu_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(menu_client.clone()));

        info!(buffer_size, "Restaurant system started");

        Self {
            menu_client,
            order_client,
            handles: vec![menu_handle, order_handle],
        }
    }

    /// Closes every actor channel and waits for the actors to finish.
    ///
    /// Clones of the clients held elsewhere (for example by the HTTP router) keep their actor
    /// alive, so drop those first.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.menu_client);

        // The order actor holds a menu client, so it has to stop before the menu actor can.
        join_actors(self.handles.into_iter().rev()).await?;

        info!("System shutdown complete.");
        Ok(())
    }
}

/// Awaits every task, even after one has failed, and reports the first failure.
async fn join_actors(
    handles: impl IntoIterator<Item = JoinHandle<()>>,
) -> Result<(), ShutdownError> {
    let mut first_failure = None;
    for handle in handles {
        if let Err(e) = handle.await {
            error!(error = %e, "Actor task failed");
            first_failure.get_or_insert(e);
        }
    }
    match first_failure {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_join_waits_for_every_actor_after_a_failure() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();

        let failing = tokio::spawn(async {
            panic!("actor crashed");
        });
        let slow = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
        });

        let result = join_actors([failing, slow]).await;

        assert!(matches!(result, Err(ShutdownError(ref e)) if e.is_panic()));
        assert!(finished.load(Ordering::SeqCst));
    }
}
