//! Product queries
//!
//! Product creation also inserts the paired inventory row in the same
//! transaction, so a committed product is never missing its inventory.

use serde::Serialize;
use sqlx::SqlitePool;

use crate::util::now_millis;

/// Initial stock level for a newly created product
const INITIAL_QUANTITY: i64 = 0;

/// Default low-stock threshold for a newly created product
const INITIAL_LOW_STOCK_THRESHOLD: i64 = 10;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

pub async fn create(
    pool: &SqlitePool,
    name: &str,
    description: Option<&str>,
    price: f64,
    category_id: i64,
) -> Result<Product, sqlx::Error> {
    let now = now_millis();
    let mut tx = pool.begin().await?;

    let product: Product = sqlx::query_as(
        r#"
        INSERT INTO products (name, description, price, category_id, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, name, description, price, category_id, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(price)
    .bind(category_id)
    .bind(now)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO inventory (product_id, quantity, low_stock_threshold, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(product.id)
    .bind(INITIAL_QUANTITY)
    .bind(INITIAL_LOW_STOCK_THRESHOLD)
    .bind(now)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(product)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, name, description, price, category_id, created_at, updated_at
        FROM products
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn list(pool: &SqlitePool, skip: i64, limit: i64) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, name, description, price, category_id, created_at, updated_at
        FROM products
        ORDER BY id
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{categories, inventory, test_pool};

    #[tokio::test]
    async fn create_also_creates_initial_inventory() {
        let pool = test_pool().await;
        let category = categories::create(&pool, "Electronics", "").await.unwrap();

        let product = create(&pool, "Wireless Mouse", Some("2.4GHz"), 29.99, category.id)
            .await
            .unwrap();
        assert_eq!(product.price, 29.99);

        let stock = inventory::find_by_product_id(&pool, product.id)
            .await
            .unwrap()
            .expect("inventory row created with product");
        assert_eq!(stock.quantity, 0);
        assert_eq!(stock.low_stock_threshold, 10);
    }

    #[tokio::test]
    async fn create_rolls_back_on_foreign_key_violation() {
        let pool = test_pool().await;

        // No such category: the whole transaction must fail
        let result = create(&pool, "Orphan", None, 9.99, 42).await;
        assert!(result.is_err());

        let products = list(&pool, 0, 10).await.unwrap();
        assert!(products.is_empty());
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventory")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn list_paginates() {
        let pool = test_pool().await;
        let category = categories::create(&pool, "Books", "").await.unwrap();
        for name in ["One", "Two", "Three"] {
            create(&pool, name, None, 10.0, category.id).await.unwrap();
        }

        let page = list(&pool, 2, 10).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].name, "Three");
    }
}
