//! Inventory queries

use serde::Serialize;
use sqlx::SqlitePool;

use crate::util::now_millis;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct InventoryItem {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub low_stock_threshold: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

pub async fn find_by_product_id(
    pool: &SqlitePool,
    product_id: i64,
) -> Result<Option<InventoryItem>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, product_id, quantity, low_stock_threshold, created_at, updated_at
        FROM inventory
        WHERE product_id = ?
        "#,
    )
    .bind(product_id)
    .fetch_optional(pool)
    .await
}

pub async fn list(
    pool: &SqlitePool,
    skip: i64,
    limit: i64,
) -> Result<Vec<InventoryItem>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, product_id, quantity, low_stock_threshold, created_at, updated_at
        FROM inventory
        ORDER BY id
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await
}

/// Rows at or below their low-stock threshold
pub async fn list_low_stock(
    pool: &SqlitePool,
    skip: i64,
    limit: i64,
) -> Result<Vec<InventoryItem>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, product_id, quantity, low_stock_threshold, created_at, updated_at
        FROM inventory
        WHERE quantity <= low_stock_threshold
        ORDER BY id
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await
}

/// Partial update: absent fields keep their stored value.
///
/// Returns `None` when no inventory row exists for the product.
pub async fn update_by_product_id(
    pool: &SqlitePool,
    product_id: i64,
    quantity: Option<i64>,
    low_stock_threshold: Option<i64>,
) -> Result<Option<InventoryItem>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE inventory
        SET quantity = COALESCE(?, quantity),
            low_stock_threshold = COALESCE(?, low_stock_threshold),
            updated_at = ?
        WHERE product_id = ?
        RETURNING id, product_id, quantity, low_stock_threshold, created_at, updated_at
        "#,
    )
    .bind(quantity)
    .bind(low_stock_threshold)
    .bind(now_millis())
    .bind(product_id)
    .fetch_optional(pool)
    .await
}
