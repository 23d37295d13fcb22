use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;
use uuid::Uuid;

use super::error::ApiError;
use crate::db::{serialize_items, CreateOrderRequest, Order, OrderResponse, User};
use crate::AppState;

/// Create an order for the authenticated user.
///
/// Items and total are persisted exactly as supplied; referenced products
/// are not checked and stock is not decremented.
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    let Json(request) =
        payload.map_err(|_| ApiError::bad_request("Failed to create order"))?;

    let order = Order {
        id: Uuid::new_v4().to_string(),
        user_id: user.id,
        items: serialize_items(&request.items),
        total: request.total,
        status: "pending".to_string(),
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    sqlx::query(
        "INSERT INTO orders (id, user_id, items, total, status, created_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&order.id)
    .bind(&order.user_id)
    .bind(&order.items)
    .bind(order.total)
    .bind(&order.status)
    .bind(&order.created_at)
    .execute(&state.db)
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "Failed to create order");
        ApiError::bad_request("Failed to create order")
    })?;

    Ok((StatusCode::CREATED, Json(OrderResponse::from(order))))
}

/// List the authenticated user's orders
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let orders: Vec<Order> = sqlx::query_as("SELECT * FROM orders WHERE user_id = ?")
        .bind(&user.id)
        .fetch_all(&state.db)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch orders");
            ApiError::internal("Failed to fetch orders")
        })?;

    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}
