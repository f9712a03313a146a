//! API routes

pub mod categories;
pub mod health;
pub mod inventory;
pub mod products;
pub mod sales;

use axum::{Json, Router, routing::get};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Offset pagination query parameters, shared by the list endpoints
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

impl Pagination {
    /// Negative values are treated as zero
    pub fn clamped(self) -> (i64, i64) {
        (self.skip.max(0), self.limit.max(0))
    }
}

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(health::router())
        .merge(categories::router())
        .merge(products::router())
        .merge(inventory::router())
        .merge(sales::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the e-commerce admin API"
    }))
}
