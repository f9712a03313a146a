//! Inventory API handlers

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch},
};
use serde::Deserialize;

use crate::db::inventory::{self, InventoryItem};
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::validation::validate_non_negative_count;

use super::Pagination;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/inventory", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/low-stock", get(list_low_stock))
        .route("/{product_id}", patch(update))
}

/// Partial update: absent fields are left unchanged
#[derive(Debug, Default, Deserialize)]
pub struct InventoryUpdate {
    pub quantity: Option<i64>,
    pub low_stock_threshold: Option<i64>,
}

/// GET /api/inventory?skip=&limit=
async fn list(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<Vec<InventoryItem>>> {
    let (skip, limit) = pagination.clamped();
    let items = inventory::list(&state.pool, skip, limit).await?;
    Ok(Json(items))
}

/// GET /api/inventory/low-stock?skip=&limit=
async fn list_low_stock(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<Vec<InventoryItem>>> {
    let (skip, limit) = pagination.clamped();
    let items = inventory::list_low_stock(&state.pool, skip, limit).await?;
    Ok(Json(items))
}

/// PATCH /api/inventory/:product_id
async fn update(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    Json(payload): Json<InventoryUpdate>,
) -> AppResult<Json<InventoryItem>> {
    if let Some(quantity) = payload.quantity {
        validate_non_negative_count(quantity, "quantity")?;
    }
    if let Some(threshold) = payload.low_stock_threshold {
        validate_non_negative_count(threshold, "low_stock_threshold")?;
    }

    let item = inventory::update_by_product_id(
        &state.pool,
        product_id,
        payload.quantity,
        payload.low_stock_threshold,
    )
    .await?
    .ok_or_else(|| {
        AppError::not_found(format!("Inventory for product {product_id} not found"))
    })?;
    Ok(Json(item))
}
