use super::{error::AppError, notice::Notice, views, AppState};
use crate::billing;
use crate::model::{OrderCreate, OrderId};
use crate::order_actor::OrderError;
use axum::{
    extract::{rejection::FormRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use axum_extra::extract::{Form as RepeatedForm, FormRejection as RepeatedFormRejection};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    notice: Option<String>,
}

impl PageQuery {
    fn notice(&self) -> Option<Notice> {
        self.notice.as_deref().and_then(Notice::from_key)
    }
}

/// Body of `POST /order`. `menu_items` is repeated once per checked box.
#[derive(Debug, Deserialize)]
pub struct OrderForm {
    #[serde(default)]
    menu_items: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    status: Option<String>,
}

/// Parses the `{order_id}` path segment. Anything that is not an order number is treated as an
/// order that does not exist.
fn parse_order_id(raw: &str) -> Option<OrderId> {
    raw.parse().ok().map(OrderId)
}

pub async fn index_handler() -> &'static str {
    "Hello, Restaurant!"
}

pub async fn menu_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let items = state.menu.list_items().await?;
    Ok(Html(views::menu_page(&items, query.notice())))
}

pub async fn order_form_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let items = state.menu.list_items().await?;
    Ok(Html(views::order_page(&items, query.notice())))
}

/// A body that is missing or not form-encoded counts as nothing picked.
pub async fn place_order_handler(
    State(state): State<AppState>,
    form: Result<RepeatedForm<OrderForm>, RepeatedFormRejection>,
) -> Result<Response, AppError> {
    let menu_items = match form {
        Ok(RepeatedForm(form)) => form.menu_items,
        Err(rejection) => {
            debug!(%rejection, "Unreadable order form");
            Vec::new()
        }
    };

    match state
        .orders
        .create_order(OrderCreate::new(menu_items))
        .await
    {
        Ok(_) => Ok(Redirect::to(&Notice::OrderPlaced.location("/menu")).into_response()),
        Err(OrderError::EmptySelection) => Ok((
            StatusCode::FOUND,
            [(header::LOCATION, Notice::EmptySelection.location("/order"))],
        )
            .into_response()),
        Err(e) => Err(e.into()),
    }
}

pub async fn kitchen_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let orders = state.orders.list_orders().await?;
    Ok(Html(views::kitchen_page(&orders)))
}

/// Always answers with JSON. A body that is missing or not form-encoded counts as no status.
pub async fn update_status_handler(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    form: Result<Form<StatusForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Some(id) = parse_order_id(&order_id) else {
        return Ok(status_error(StatusCode::NOT_FOUND, "Order not found"));
    };
    let label = match form {
        Ok(Form(form)) => form.status.unwrap_or_default(),
        Err(rejection) => {
            debug!(%rejection, "Unreadable status form");
            String::new()
        }
    };

    match state.orders.update_status(id, label).await {
        Ok(status) => Ok(Json(json!({ "success": true, "new_status": status })).into_response()),
        Err(OrderError::NotFound(_)) => Ok(status_error(StatusCode::NOT_FOUND, "Order not found")),
        Err(OrderError::MissingStatus) => {
            Ok(status_error(StatusCode::BAD_REQUEST, "Status not provided"))
        }
        Err(e) => Err(e.into()),
    }
}

fn status_error(code: StatusCode, message: &str) -> Response {
    (code, Json(json!({ "success": false, "error": message }))).into_response()
}

pub async fn bill_handler(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_order_id(&order_id).ok_or(AppError::OrderNotFound)?;
    let bill = billing::render_bill(&state.orders, id).await?;
    Ok(Html(views::bill_page(&bill)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order_id() {
        assert_eq!(parse_order_id("12"), Some(OrderId(12)));
        assert_eq!(parse_order_id("abc"), None);
        assert_eq!(parse_order_id("-1"), None);
    }

    #[test]
    fn test_unknown_notice_is_ignored() {
        let query = PageQuery {
            notice: Some("hacked".into()),
        };
        assert_eq!(query.notice(), None);
        assert_eq!(PageQuery::default().notice(), None);
    }
}
