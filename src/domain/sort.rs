// src/domain/sort.rs

use crate::domain::property::{Price, Property};
use crate::domain::query::SortKey;
use chrono::{DateTime, NaiveDate};
use std::cmp::Ordering;

pub type Comparator = fn(&Property, &Property) -> Ordering;

/// Picks the comparator for a sort key. Meant for a stable sort
/// (`slice::sort_by`), so ties keep store order.
pub fn comparator(key: SortKey) -> Comparator {
    match key {
        SortKey::Unsorted => |_, _| Ordering::Equal,
        SortKey::PriceLow => |a, b| price_low_key(a).total_cmp(&price_low_key(b)),
        SortKey::PriceHigh => |a, b| price_high_key(b).total_cmp(&price_high_key(a)),
        SortKey::Name => |a, b| compare_titles(&a.title, &b.title),
        SortKey::AreaLow => |a, b| a.area().total_cmp(&b.area()),
        SortKey::AreaHigh => |a, b| b.area().total_cmp(&a.area()),
        SortKey::Newest => |a, b| created_millis(b).cmp(&created_millis(a)),
        SortKey::Oldest => |a, b| created_millis(a).cmp(&created_millis(b)),
    }
}

// "Price on Request" goes last in both directions.
fn price_low_key(p: &Property) -> f64 {
    match p.price {
        Price::Numeric(n) => n,
        Price::OnRequest => f64::INFINITY,
    }
}

fn price_high_key(p: &Property) -> f64 {
    match p.price {
        Price::Numeric(n) => n,
        Price::OnRequest => f64::NEG_INFINITY,
    }
}

/// Collation-like ordering: letters compare without regard to case first,
/// the raw text only breaks ties.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Milliseconds since the epoch for `created_at`. Missing or unparseable
/// timestamps count as the epoch itself.
pub fn created_millis(p: &Property) -> i64 {
    p.created_at
        .as_deref()
        .and_then(parse_timestamp)
        .unwrap_or(0)
}

fn parse_timestamp(raw: &str) -> Option<i64> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}
