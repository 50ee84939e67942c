//! Basket route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::error::Result;
use crate::mappers::summary::{map_basket, BasketView};
use crate::state::AppState;

/// Basket page template.
#[derive(Template, WebTemplate)]
#[template(path = "basket.html")]
pub struct BasketTemplate {
    pub basket: BasketView,
}

/// Display the basket page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<BasketTemplate> {
    let basket = state.api().get_basket().await?;
    let view = map_basket(&basket, state.descriptions(), state.dispatch_days())?;
    Ok(BasketTemplate { basket: view })
}
