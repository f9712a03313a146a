//! Category API handlers

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;

use crate::db::categories::{self, Category};
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::validation::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN, validate_required_text};

use super::Pagination;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/categories", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_by_id))
}

#[derive(Debug, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    pub description: String,
}

/// POST /api/categories
async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<Category>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    if payload.description.len() > MAX_DESCRIPTION_LEN {
        return Err(AppError::validation("description is too long"));
    }

    let category = categories::create(&state.pool, &payload.name, &payload.description).await?;
    Ok(Json(category))
}

/// GET /api/categories/:id
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Category>> {
    let category = categories::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Category {id} not found")))?;
    Ok(Json(category))
}

/// GET /api/categories?skip=&limit=
async fn list(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<Vec<Category>>> {
    let (skip, limit) = pagination.clamped();
    let categories = categories::list(&state.pool, skip, limit).await?;
    Ok(Json(categories))
}
