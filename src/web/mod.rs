//! # HTTP Interface
//!
//! | Method | Path | Response |
//! |---|---|---|
//! | GET | `/` | greeting text |
//! | GET | `/menu` | menu page |
//! | GET | `/order` | order form |
//! | POST | `/order` | places an order, redirects to `/menu` (or back to `/order` when nothing was picked) |
//! | GET | `/kitchen` | every order, newest first, with a status selector |
//! | POST | `/update_status/{order_id}` | JSON result of a status change |
//! | GET | `/bill/{order_id}` | itemized bill with total |

pub mod error;
pub mod notice;
pub mod routes;
pub mod views;

use crate::clients::{MenuClient, OrderClient};
use axum::{
    routing::{get, post},
    Router,
};
use routes::{
    bill_handler, index_handler, kitchen_handler, menu_handler, order_form_handler,
    place_order_handler, update_status_handler,
};
use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Handles to the actors, shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub menu: MenuClient,
    pub orders: OrderClient,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/menu", get(menu_handler))
        .route("/order", get(order_form_handler).post(place_order_handler))
        .route("/kitchen", get(kitchen_handler))
        .route("/update_status/{order_id}", post(update_status_handler))
        .route("/bill/{order_id}", get(bill_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves until Ctrl+C or SIGTERM, then lets in-flight requests finish.
///
/// The router, and with it every client clone in [`AppState`], is dropped before this returns.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(address) = listener.local_addr() {
        info!("Server running on {address}");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
