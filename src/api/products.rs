//! Product API handlers

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;

use crate::db::categories;
use crate::db::products::{self, Product};
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, validate_optional_text, validate_positive_amount,
    validate_required_text,
};

use super::Pagination;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/products", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_by_id))
}

#[derive(Debug, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: i64,
}

/// POST /api/products
///
/// Creates the product together with its initial inventory row
/// (quantity 0, low-stock threshold 10) in one transaction.
async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_positive_amount(payload.price, "price")?;

    categories::find_by_id(&state.pool, payload.category_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Category {} not found", payload.category_id))
        })?;

    let product = products::create(
        &state.pool,
        &payload.name,
        payload.description.as_deref(),
        payload.price,
        payload.category_id,
    )
    .await?;
    Ok(Json(product))
}

/// GET /api/products/:id
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    let product = products::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))?;
    Ok(Json(product))
}

/// GET /api/products?skip=&limit=
async fn list(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<Vec<Product>>> {
    let (skip, limit) = pagination.clamped();
    let products = products::list(&state.pool, skip, limit).await?;
    Ok(Json(products))
}
