use crate::menu_actor::MenuError;
use crate::order_actor::OrderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Order not found")]
    OrderNotFound,

    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Order(OrderError),
}

impl From<OrderError> for AppError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => AppError::OrderNotFound,
            other => AppError::Order(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::OrderNotFound => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
            AppError::Menu(_) | AppError::Order(_) => {
                error!(error = %self, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}
