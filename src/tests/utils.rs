use crate::api::{ApiError, PropertiesApi};
use crate::config::AppConfig;
use crate::domain::property::{Attributes, Price, Property};
use crate::errors::{ResultResp, ServerError};
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::sync::Arc;

/// In-memory Properties API. `None` simulates the service being down.
pub struct StaticApi {
    pub properties: Option<Vec<Property>>,
}

impl PropertiesApi for StaticApi {
    fn list_properties(&self) -> Result<Vec<Property>, ApiError> {
        self.properties
            .clone()
            .ok_or_else(|| ApiError::Network("connection refused".into()))
    }

    fn get_property(&self, id: &str) -> Result<Property, ApiError> {
        self.properties
            .as_ref()
            .ok_or_else(|| ApiError::Network("connection refused".into()))?
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }
}

pub fn listing(id: &str, title: &str, city: &str, category: &str, price: Price) -> Property {
    Property {
        id: id.to_string(),
        title: title.to_string(),
        city: city.to_string(),
        category: category.to_string(),
        location: String::new(),
        price,
        attributes: Attributes::default(),
        created_at: None,
        description: None,
        images: Vec::new(),
    }
}

pub fn sample_properties() -> Vec<Property> {
    vec![
        listing("p1", "Lake House", "Pune", "Residential", Price::Numeric(6_000_000.0)),
        listing("p2", "City Flat", "Pune", "Residential", Price::OnRequest),
        listing("p3", "Corner Shop", "Mumbai", "Commercial", Price::Numeric(900_000.0)),
    ]
}

pub fn test_state(properties: Option<Vec<Property>>) -> AppState {
    AppState::new(Arc::new(StaticApi { properties }), AppConfig::default())
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::from(String::new()))
        .unwrap()
}

pub fn read_body(mut resp: Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

pub fn expect_err(result: ResultResp) -> ServerError {
    match result {
        Ok(resp) => panic!("expected an error, got HTTP {}", resp.status()),
        Err(err) => err,
    }
}
