//! Order confirmation and summary route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::mappers::confirmation::{map_item, ConfirmationView};
use crate::mappers::summary::{
    map_order_item_summary, map_order_summary, OrderItemSummaryView, OrderSummaryView,
};
use crate::state::AppState;

/// Order confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "confirmation.html")]
pub struct ConfirmationTemplate {
    pub view: ConfirmationView,
    pub order_reference: String,
}

/// Order summary page template.
#[derive(Template, WebTemplate)]
#[template(path = "order_summary.html")]
pub struct OrderSummaryTemplate {
    pub view: OrderSummaryView,
}

/// Order item summary page template.
#[derive(Template, WebTemplate)]
#[template(path = "order_item_summary.html")]
pub struct OrderItemSummaryTemplate {
    pub view: OrderItemSummaryView,
    pub order_reference: String,
}

/// Display the confirmation page for a paid checkout.
///
/// Single-item checkouts get the item confirmation page; anything larger is
/// sent to the order summary.
#[instrument(skip(state))]
pub async fn confirmation(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Response> {
    let checkout = state.api().get_checkout(&order_id).await?;

    if let [item] = checkout.items.as_slice() {
        let view = map_item(
            item,
            checkout.delivery_details.as_ref(),
            state.mapper_factory(),
            state.descriptions(),
            state.dispatch_days(),
        )?;
        return Ok(ConfirmationTemplate {
            view,
            order_reference: checkout.reference,
        }
        .into_response());
    }

    Ok(Redirect::to(&format!("/orders/{order_id}")).into_response())
}

/// Display the order summary page.
#[instrument(skip(state))]
pub async fn summary(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<OrderSummaryTemplate> {
    let order = state.api().get_order(&order_id).await?;
    let view = map_order_summary(&order, state.descriptions(), state.dispatch_days())?;
    Ok(OrderSummaryTemplate { view })
}

/// Display the summary page for a single ordered item.
#[instrument(skip(state))]
pub async fn item_summary(
    State(state): State<AppState>,
    Path((order_id, item_id)): Path<(String, String)>,
) -> Result<OrderItemSummaryTemplate> {
    let order = state.api().get_order(&order_id).await?;
    let item = order
        .items
        .iter()
        .find(|item| item.id == item_id)
        .ok_or_else(|| AppError::NotFound(format!("item {item_id} in order {order_id}")))?;

    let view = map_order_item_summary(
        item,
        state.mapper_factory(),
        state.descriptions(),
        state.dispatch_days(),
    )?;
    Ok(OrderItemSummaryTemplate {
        view,
        order_reference: order.reference.clone(),
    })
}
