//! Category queries

use serde::Serialize;
use sqlx::SqlitePool;

use crate::util::now_millis;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: i64,
    pub updated_at: i64,
}

pub async fn create(
    pool: &SqlitePool,
    name: &str,
    description: &str,
) -> Result<Category, sqlx::Error> {
    let now = now_millis();
    sqlx::query_as(
        r#"
        INSERT INTO categories (name, description, created_at, updated_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, name, description, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, name, description, created_at, updated_at FROM categories WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn list(pool: &SqlitePool, skip: i64, limit: i64) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, name, description, created_at, updated_at
        FROM categories
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
    use crate::db::test_pool;

    #[tokio::test]
    async fn create_and_fetch() {
        let pool = test_pool().await;

        let created = create(&pool, "Electronics", "Gadgets and devices")
            .await
            .unwrap();
        assert_eq!(created.name, "Electronics");
        assert!(created.created_at > 0);

        let fetched = find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.description, "Gadgets and devices");

        assert!(find_by_id(&pool, created.id + 100).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_paginates_in_id_order() {
        let pool = test_pool().await;
        for name in ["A", "B", "C", "D"] {
            create(&pool, name, "").await.unwrap();
        }

        let page = list(&pool, 1, 2).await.unwrap();
        let names: Vec<&str> = page.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["B", "C"]);
    }
}
