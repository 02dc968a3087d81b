// src/domain/property.rs

use crate::api::models::ApiProperty;
use serde_json::Value;

/// The literal the Properties API sends in place of an undisclosed price.
pub const PRICE_ON_REQUEST: &str = "Price on Request";

/// A listing price: either an amount or the "Price on Request" sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Price {
    Numeric(f64),
    OnRequest,
}

impl Price {
    /// Converts the loosely typed wire value into a `Price`.
    ///
    /// Numbers pass through. The sentinel string becomes `OnRequest`.
    /// Any other string is parsed as a number with thousands separators
    /// removed; strings that still fail to parse, and missing values,
    /// fall back to `Numeric(0.0)`.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Number(n)) => Price::Numeric(n.as_f64().unwrap_or(0.0)),
            Some(Value::String(s)) if s.trim() == PRICE_ON_REQUEST => Price::OnRequest,
            Some(Value::String(s)) => Price::Numeric(parse_amount(s).unwrap_or(0.0)),
            _ => Price::Numeric(0.0),
        }
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::Numeric(0.0)
    }
}

fn parse_amount(s: &str) -> Option<f64> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Reads an optional number that may arrive as a JSON number or a numeric string.
pub(crate) fn number_from_value(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_amount(s),
        _ => None,
    }
}

fn id_from_value(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    /// Built-up area in square feet.
    pub square: Option<f64>,
    pub bedroom: Option<i64>,
    pub bathroom: Option<i64>,
}

/// A property listing as used by the filter/sort pipeline and the pages.
/// Built from the wire record, never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub city: String,
    pub category: String,
    pub location: String,
    pub price: Price,
    pub attributes: Attributes,
    pub created_at: Option<String>,
    pub description: Option<String>,
    pub images: Vec<String>,
}

impl Property {
    /// Flattens the raw API record. Only the identifier is required; every
    /// other field has a default so later filters never trip on a gap.
    pub fn from_api(raw: ApiProperty) -> Result<Self, String> {
        let id = id_from_value(raw.id.as_ref())
            .or_else(|| id_from_value(raw.mongo_id.as_ref()))
            .ok_or_else(|| "Missing or empty property id".to_string())?;

        let attributes = raw
            .attributes
            .map(|a| Attributes {
                square: number_from_value(a.square.as_ref()),
                bedroom: number_from_value(a.bedroom.as_ref()).map(|n| n as i64),
                bathroom: number_from_value(a.bathroom.as_ref()).map(|n| n as i64),
            })
            .unwrap_or_default();

        Ok(Property {
            id,
            title: raw.title.unwrap_or_default(),
            // Exact-match filters compare these, so store them the way the dropdowns show them
            city: raw.city.map(|c| c.trim().to_string()).unwrap_or_default(),
            category: raw.category.map(|c| c.trim().to_string()).unwrap_or_default(),
            location: raw.location.unwrap_or_default(),
            price: Price::from_value(raw.price.as_ref()),
            attributes,
            created_at: raw.created_at,
            description: raw.description,
            images: raw.images.unwrap_or_default(),
        })
    }

    /// Area used by filters and sorts; a missing value counts as zero.
    pub fn area(&self) -> f64 {
        self.attributes.square.unwrap_or(0.0)
    }
}
