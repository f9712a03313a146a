//! Revenue reporting core
//!
//! Pure date-bucketing and period-comparison logic, independent of the
//! storage engine: handlers fetch matching sale rows and the functions here
//! derive bucket labels, default ranges and percentage deltas.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Aggregation interval for revenue reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// One revenue bucket: all sales sharing the same interval label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenuePoint {
    pub interval: String,
    pub revenue: f64,
    pub total_sales: i64,
}

/// Bucket label for a sale date under the given interval.
///
/// Weekly uses the ISO week for both the year and the week number, so
/// grouping and labeling always agree (a sale on 2024-12-30 lands in
/// "2025-01", not a mixed "2024-53").
pub fn bucket_label(date: DateTime<Utc>, interval: Interval) -> String {
    match interval {
        Interval::Daily => date.format("%Y-%m-%d").to_string(),
        Interval::Weekly => {
            let week = date.iso_week();
            format!("{:04}-{:02}", week.year(), week.week())
        }
        Interval::Monthly => date.format("%Y-%m").to_string(),
        Interval::Yearly => date.format("%Y").to_string(),
    }
}

/// Default range start for an interval, relative to the range end
pub fn default_start(interval: Interval, end: DateTime<Utc>) -> DateTime<Utc> {
    match interval {
        Interval::Daily => end - Duration::days(30),
        Interval::Weekly => end - Duration::weeks(12),
        Interval::Monthly => end - Duration::days(365),
        Interval::Yearly => end - Duration::days(365 * 5),
    }
}

/// Group `(sale_date_millis, total_amount)` rows into revenue buckets.
///
/// Only buckets with at least one sale are emitted, in ascending label
/// order.
pub fn aggregate(rows: &[(i64, f64)], interval: Interval) -> Vec<RevenuePoint> {
    let mut buckets: BTreeMap<String, (f64, i64)> = BTreeMap::new();
    for &(sale_date, amount) in rows {
        let Some(date) = Utc.timestamp_millis_opt(sale_date).single() else {
            continue;
        };
        let entry = buckets.entry(bucket_label(date, interval)).or_insert((0.0, 0));
        entry.0 += amount;
        entry.1 += 1;
    }
    buckets
        .into_iter()
        .map(|(interval, (revenue, total_sales))| RevenuePoint {
            interval,
            revenue,
            total_sales,
        })
        .collect()
}

/// Percentage change between two period revenues.
///
/// A previous period with no revenue yields 100 when the current period has
/// any, and 0 when both are empty.
pub fn percentage_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        if current > 0.0 { 100.0 } else { 0.0 }
    } else {
        (current - previous) / previous * 100.0
    }
}

/// Parse a datetime query parameter leniently.
///
/// Accepts RFC 3339, naive ISO datetimes (`2024-06-01T12:30:00`, with or
/// without fractional seconds, `T` or space separated) and bare dates
/// (`2024-06-01`, taken as midnight). Naive values are treated as UTC.
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }
    None
}
