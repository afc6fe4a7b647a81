//! Entry point: configures logging, starts the actors, loads the menu, and serves HTTP until
//! Ctrl+C or SIGTERM.

use restaurant_orders::config::Config;
use restaurant_orders::lifecycle::{setup_tracing, RestaurantSystem};
use restaurant_orders::menu_actor::seed::{load_seed_file, seed_menu};
use restaurant_orders::web::{self, AppState};
use tokio::net::TcpListener;
use tracing::{info, info_span, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Config::load()?;
    info!(?config, "Starting restaurant");

    let system = RestaurantSystem::new(config.actor_buffer);

    let seeded = async {
        let items = load_seed_file(&config.menu_file).await?;
        seed_menu(&system.menu_client, items).await
    }
    .instrument(info_span!("menu_seed"))
    .await?;
    info!(seeded, "Menu ready");

    let address = config.socket_addr();
    info!("Binding to {address}");
    let listener = TcpListener::bind(address).await?;

    let state = AppState {
        menu: system.menu_client.clone(),
        orders: system.order_client.clone(),
    };
    web::serve(listener, state).await?;

    system.shutdown().await?;
    info!("Restaurant closed");
    Ok(())
}
