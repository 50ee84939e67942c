//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Health check
//!
//! # Basket
//! GET  /basket                          - Basket page
//! GET  /delivery-details                - Delivery address form
//! POST /delivery-details                - Save delivery address
//!
//! # Orders
//! GET  /orders/{order_id}               - Order summary
//! GET  /orders/{order_id}/confirmation  - Order confirmation
//! GET  /orders/{order_id}/items/{item_id} - Order item summary
//! ```

pub mod basket;
pub mod delivery_details;
pub mod orders;

use axum::{
    Router,
    routing::get,
};

use crate::state::AppState;

/// Create all routes for the application.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/basket", get(basket::show))
        .route(
            "/delivery-details",
            get(delivery_details::show).post(delivery_details::submit),
        )
        .route("/orders/{order_id}", get(orders::summary))
        .route("/orders/{order_id}/confirmation", get(orders::confirmation))
        .route(
            "/orders/{order_id}/items/{item_id}",
            get(orders::item_summary),
        )
}
