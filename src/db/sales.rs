//! Sale queries

use serde::Serialize;
use sqlx::SqlitePool;

use crate::util::now_millis;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Sale {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_amount: f64,
    pub sale_date: i64,
    pub created_at: i64,
}

/// Optional list filters, combined with AND
#[derive(Debug, Clone, Default)]
pub struct SaleFilter {
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
    pub product_id: Option<i64>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
}

pub async fn create(
    pool: &SqlitePool,
    product_id: i64,
    quantity: i64,
    unit_price: f64,
    total_amount: f64,
    sale_date: i64,
) -> Result<Sale, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO sales (product_id, quantity, unit_price, total_amount, sale_date, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, product_id, quantity, unit_price, total_amount, sale_date, created_at
        "#,
    )
    .bind(product_id)
    .bind(quantity)
    .bind(unit_price)
    .bind(total_amount)
    .bind(sale_date)
    .bind(now_millis())
    .fetch_one(pool)
    .await
}

/// Filtered listing, newest sale first, id as a stable tiebreak.
pub async fn list(
    pool: &SqlitePool,
    filter: &SaleFilter,
    skip: i64,
    limit: i64,
) -> Result<Vec<Sale>, sqlx::Error> {
    let mut conditions: Vec<&str> = Vec::new();
    if filter.start_date.is_some() {
        conditions.push("sale_date >= ?");
    }
    if filter.end_date.is_some() {
        conditions.push("sale_date <= ?");
    }
    if filter.product_id.is_some() {
        conditions.push("product_id = ?");
    }
    if filter.min_amount.is_some() {
        conditions.push("total_amount >= ?");
    }
    if filter.max_amount.is_some() {
        conditions.push("total_amount <= ?");
    }

    let mut sql = String::from(
        "SELECT id, product_id, quantity, unit_price, total_amount, sale_date, created_at FROM sales",
    );
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    sql.push_str(" ORDER BY sale_date DESC, id DESC LIMIT ? OFFSET ?");

    let mut query = sqlx::query_as::<_, Sale>(&sql);
    if let Some(v) = filter.start_date {
        query = query.bind(v);
    }
    if let Some(v) = filter.end_date {
        query = query.bind(v);
    }
    if let Some(v) = filter.product_id {
        query = query.bind(v);
    }
    if let Some(v) = filter.min_amount {
        query = query.bind(v);
    }
    if let Some(v) = filter.max_amount {
        query = query.bind(v);
    }
    query.bind(limit).bind(skip).fetch_all(pool).await
}

/// `(sale_date, total_amount)` pairs inside the closed range, for bucketing.
pub async fn amounts_in_range(
    pool: &SqlitePool,
    start: i64,
    end: i64,
) -> Result<Vec<(i64, f64)>, sqlx::Error> {
    sqlx::query_as("SELECT sale_date, total_amount FROM sales WHERE sale_date >= ? AND sale_date <= ?")
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await
}

/// Revenue over the closed range; 0 when no rows match.
pub async fn revenue_in_range(pool: &SqlitePool, start: i64, end: i64) -> Result<f64, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT COALESCE(SUM(total_amount), 0.0) FROM sales WHERE sale_date >= ? AND sale_date <= ?",
    )
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{categories, products, test_pool};

    const DAY: i64 = 24 * 60 * 60 * 1000;

    async fn seeded_product(pool: &SqlitePool) -> i64 {
        let category = categories::create(pool, "Electronics", "").await.unwrap();
        products::create(pool, "Headphones", None, 99.99, category.id)
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn amount_filters_are_inclusive_bounds() {
        let pool = test_pool().await;
        let product_id = seeded_product(&pool).await;
        let date = now_millis();

        create(&pool, product_id, 1, 99.99, 99.99, date).await.unwrap();
        create(&pool, product_id, 2, 99.99, 199.98, date).await.unwrap();

        let filter = SaleFilter {
            min_amount: Some(150.0),
            ..Default::default()
        };
        let rows = list(&pool, &filter, 0, 100).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert!((rows[0].total_amount - 199.98).abs() < 1e-9);

        let filter = SaleFilter {
            max_amount: Some(99.99),
            ..Default::default()
        };
        let rows = list(&pool, &filter, 0, 100).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert!((rows[0].total_amount - 99.99).abs() < 1e-9);
    }

    #[tokio::test]
    async fn filters_combine_as_conjunction() {
        let pool = test_pool().await;
        let first = seeded_product(&pool).await;
        let category = categories::create(&pool, "Books", "").await.unwrap();
        let second = products::create(&pool, "Novel", None, 15.0, category.id)
            .await
            .unwrap()
            .id;
        let date = now_millis();

        create(&pool, first, 1, 99.99, 99.99, date).await.unwrap();
        create(&pool, first, 3, 99.99, 299.97, date - DAY).await.unwrap();
        create(&pool, second, 1, 15.0, 15.0, date).await.unwrap();

        let filter = SaleFilter {
            product_id: Some(first),
            start_date: Some(date - DAY / 2),
            ..Default::default()
        };
        let rows = list(&pool, &filter, 0, 100).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].product_id, first);
        assert_eq!(rows[0].quantity, 1);
    }

    #[tokio::test]
    async fn listing_orders_by_sale_date_desc() {
        let pool = test_pool().await;
        let product_id = seeded_product(&pool).await;
        let date = now_millis();

        create(&pool, product_id, 1, 10.0, 10.0, date - 2 * DAY).await.unwrap();
        create(&pool, product_id, 1, 20.0, 20.0, date).await.unwrap();
        create(&pool, product_id, 1, 30.0, 30.0, date - DAY).await.unwrap();

        let rows = list(&pool, &SaleFilter::default(), 0, 100).await.unwrap();
        let amounts: Vec<f64> = rows.iter().map(|s| s.total_amount).collect();
        assert_eq!(amounts, [20.0, 30.0, 10.0]);

        // skip/limit walk the same ordering
        let second_page = list(&pool, &SaleFilter::default(), 1, 1).await.unwrap();
        assert_eq!(second_page.len(), 1);
        assert_eq!(second_page[0].total_amount, 30.0);
    }

    #[tokio::test]
    async fn range_queries_are_inclusive_and_default_to_zero() {
        let pool = test_pool().await;
        let product_id = seeded_product(&pool).await;
        let date = 1_700_000_000_000;

        create(&pool, product_id, 1, 50.0, 50.0, date).await.unwrap();
        create(&pool, product_id, 1, 25.0, 25.0, date + DAY).await.unwrap();

        // Both endpoints included
        let revenue = revenue_in_range(&pool, date, date + DAY).await.unwrap();
        assert!((revenue - 75.0).abs() < 1e-9);

        let rows = amounts_in_range(&pool, date, date).await.unwrap();
        assert_eq!(rows.len(), 1);

        // Empty range sums to zero instead of erroring
        let revenue = revenue_in_range(&pool, 0, date - 1).await.unwrap();
        assert_eq!(revenue, 0.0);
    }
}
