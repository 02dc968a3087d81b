// src/domain/filter.rs

use crate::domain::property::{Price, Property};
use crate::domain::query::{AreaRange, PriceRange, PropertyQuery};

/// True when the property satisfies every active filter of the query.
pub fn matches(property: &Property, query: &PropertyQuery) -> bool {
    matches_search(property, &query.search)
        && matches_exact(&property.category, query.category.as_deref())
        && matches_exact(&property.city, query.city.as_deref())
        && query.price.map_or(true, |r| matches_price(&property.price, r))
        && query.area.map_or(true, |r| matches_area(property.area(), r))
}

/// Case-insensitive substring search across the descriptive fields.
/// A hit in any one field is enough.
pub fn matches_search(property: &Property, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    [
        &property.title,
        &property.city,
        &property.category,
        &property.location,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

fn matches_exact(value: &str, wanted: Option<&str>) -> bool {
    wanted.map_or(true, |w| value == w)
}

pub fn matches_price(price: &Price, range: PriceRange) -> bool {
    match (price, range.bounds()) {
        (Price::OnRequest, None) => true,
        (Price::OnRequest, Some(_)) | (Price::Numeric(_), None) => false,
        (Price::Numeric(amount), Some((lower, upper))) => {
            lower.map_or(true, |lo| *amount > lo) && upper.map_or(true, |hi| *amount <= hi)
        }
    }
}

pub fn matches_area(area: f64, range: AreaRange) -> bool {
    let (lower, upper) = range.bounds();
    area >= lower && upper.map_or(true, |hi| area < hi)
}
