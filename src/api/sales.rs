//! Sales API handlers
//!
//! Sale creation and listing, plus the revenue reporting endpoints:
//! interval aggregation and period comparison.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::db::products;
use crate::db::sales::{self, Sale, SaleFilter};
use crate::error::{AppError, AppResult};
use crate::reporting::{self, Interval, RevenuePoint};
use crate::state::AppState;
use crate::validation::{validate_positive_amount, validate_positive_count};

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/sales", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/revenue", get(revenue_by_interval))
        .route("/compare", get(compare_revenue))
}

/// Parse an optional datetime query parameter, naming the field on failure
fn parse_date_param(value: Option<&str>, field: &str) -> AppResult<Option<DateTime<Utc>>> {
    match value {
        None => Ok(None),
        Some(s) => reporting::parse_datetime(s)
            .map(Some)
            .ok_or_else(|| AppError::validation(format!("{field} is not a valid datetime"))),
    }
}

fn parse_required_date_param(value: &str, field: &str) -> AppResult<DateTime<Utc>> {
    reporting::parse_datetime(value)
        .ok_or_else(|| AppError::validation(format!("{field} is not a valid datetime")))
}

// ============================================================================
// Create / List
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SaleCreate {
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_amount: f64,
    pub sale_date: String,
}

/// POST /api/sales
async fn create(
    State(state): State<AppState>,
    Json(payload): Json<SaleCreate>,
) -> AppResult<Json<Sale>> {
    validate_positive_count(payload.quantity, "quantity")?;
    validate_positive_amount(payload.unit_price, "unit_price")?;
    validate_positive_amount(payload.total_amount, "total_amount")?;
    let sale_date = parse_required_date_param(&payload.sale_date, "sale_date")?;

    products::find_by_id(&state.pool, payload.product_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {} not found", payload.product_id)))?;

    let sale = sales::create(
        &state.pool,
        payload.product_id,
        payload.quantity,
        payload.unit_price,
        payload.total_amount,
        sale_date.timestamp_millis(),
    )
    .await?;
    Ok(Json(sale))
}

// skip/limit are spelled out here: serde_urlencoded cannot drive
// `#[serde(flatten)]` for numeric fields
#[derive(Debug, Deserialize)]
pub struct SalesListQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "super::default_limit")]
    pub limit: i64,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub product_id: Option<i64>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
}

/// GET /api/sales?skip=&limit=&start_date=&end_date=&product_id=&min_amount=&max_amount=
async fn list(
    State(state): State<AppState>,
    Query(query): Query<SalesListQuery>,
) -> AppResult<Json<Vec<Sale>>> {
    let filter = SaleFilter {
        start_date: parse_date_param(query.start_date.as_deref(), "start_date")?
            .map(|d| d.timestamp_millis()),
        end_date: parse_date_param(query.end_date.as_deref(), "end_date")?
            .map(|d| d.timestamp_millis()),
        product_id: query.product_id,
        min_amount: query.min_amount,
        max_amount: query.max_amount,
    };
    let (skip, limit) = (query.skip.max(0), query.limit.max(0));
    let rows = sales::list(&state.pool, &filter, skip, limit).await?;
    Ok(Json(rows))
}

// ============================================================================
// Revenue by interval
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RevenueQuery {
    pub interval: Interval,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// GET /api/sales/revenue?interval=&start_date=&end_date=
async fn revenue_by_interval(
    State(state): State<AppState>,
    Query(query): Query<RevenueQuery>,
) -> AppResult<Json<Vec<RevenuePoint>>> {
    let end = parse_date_param(query.end_date.as_deref(), "end_date")?.unwrap_or_else(Utc::now);
    let start = parse_date_param(query.start_date.as_deref(), "start_date")?
        .unwrap_or_else(|| reporting::default_start(query.interval, end));

    let rows = sales::amounts_in_range(
        &state.pool,
        start.timestamp_millis(),
        end.timestamp_millis(),
    )
    .await?;

    Ok(Json(reporting::aggregate(&rows, query.interval)))
}

// ============================================================================
// Period comparison
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    pub current_start: String,
    pub current_end: String,
    pub previous_start: Option<String>,
    pub previous_end: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PeriodSummary {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub revenue: f64,
}

#[derive(Debug, Serialize)]
pub struct RevenueComparison {
    pub current_period: PeriodSummary,
    pub previous_period: PeriodSummary,
    pub percentage_change: f64,
}

/// GET /api/sales/compare?current_start=&current_end=&previous_start=&previous_end=
///
/// When the previous period is not given it defaults to the window of the
/// same whole-day length ending the day before the current period starts.
async fn compare_revenue(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> AppResult<Json<RevenueComparison>> {
    let current_start = parse_required_date_param(&query.current_start, "current_start")?;
    let current_end = parse_required_date_param(&query.current_end, "current_end")?;

    let (previous_start, previous_end) = match (&query.previous_start, &query.previous_end) {
        (Some(start), Some(end)) => (
            parse_required_date_param(start, "previous_start")?,
            parse_required_date_param(end, "previous_end")?,
        ),
        _ => {
            let period_days = (current_end - current_start).num_days();
            let previous_end = current_start - Duration::days(1);
            (previous_end - Duration::days(period_days), previous_end)
        }
    };

    let current_revenue = sales::revenue_in_range(
        &state.pool,
        current_start.timestamp_millis(),
        current_end.timestamp_millis(),
    )
    .await?;
    let previous_revenue = sales::revenue_in_range(
        &state.pool,
        previous_start.timestamp_millis(),
        previous_end.timestamp_millis(),
    )
    .await?;

    Ok(Json(RevenueComparison {
        current_period: PeriodSummary {
            start_date: current_start,
            end_date: current_end,
            revenue: current_revenue,
        },
        previous_period: PeriodSummary {
            start_date: previous_start,
            end_date: previous_end,
            revenue: previous_revenue,
        },
        percentage_change: reporting::percentage_change(current_revenue, previous_revenue),
    }))
}
