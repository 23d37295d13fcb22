use axum::{extract::State, Json};
use std::sync::Arc;

use super::error::ApiError;
use crate::db::Product;
use crate::AppState;

/// List the full product catalog
pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products: Vec<Product> = sqlx::query_as("SELECT * FROM products")
        .fetch_all(&state.db)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch products");
            ApiError::internal("Failed to fetch products")
        })?;

    Ok(Json(products))
}
