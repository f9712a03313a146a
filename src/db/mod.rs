//! Query layer
//!
//! Free query functions over a `SqlitePool`, one module per table. Row
//! structs live next to the functions that return them. Errors are raw
//! `sqlx::Error`; handlers convert them via `From<sqlx::Error> for AppError`.

pub mod categories;
pub mod inventory;
pub mod products;
pub mod sales;

/// Open an in-memory database with the crate's migrations applied.
#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    use sqlx::sqlite::SqlitePoolOptions;

    // A single connection keeps every query on the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory database");

    sqlx::query("PRAGMA foreign_keys = ON;")
        .execute(&pool)
        .await
        .expect("enable foreign keys");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("apply migrations");

    pool
}
