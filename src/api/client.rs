// client.rs
use crate::api::models::{ApiProperty, DetailEnvelope, ListingEnvelope};
use crate::api::ApiError;
use crate::config::AppConfig;
use crate::domain::Property;
use rand::Rng;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

const USER_AGENT: &str = concat!("estate_listings/", env!("CARGO_PKG_VERSION"));

/// The remote Properties API, as seen by the page handlers.
pub trait PropertiesApi: Send + Sync {
    /// Every listed property, in the order the API returns them.
    fn list_properties(&self) -> Result<Vec<Property>, ApiError>;

    fn get_property(&self, id: &str) -> Result<Property, ApiError>;
}

pub struct HttpPropertiesApi {
    client: Client,
    base_url: Url,
    max_attempts: u64,
}

impl HttpPropertiesApi {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            max_attempts: 3,
        })
    }

    /// Joins path segments onto the base URL, keeping any path the base already has.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        endpoint(&self.base_url, segments)
    }

    fn get_text_with_retry(&self, url: &Url) -> Result<String, ApiError> {
        const MAX_BACKOFF_MILLIS: u64 = 2_000;
        const JITTER_MAX_MILLIS: u64 = 250;

        let mut last_err = None;

        for attempt in 1..=self.max_attempts {
            let start = std::time::Instant::now();

            match self.try_get_text(url) {
                Ok(text) => {
                    debug!(%url, attempt, elapsed = ?start.elapsed(), "Properties API responded");
                    return Ok(text);
                }
                Err(e) if !e.is_retryable() => return Err(e),
                Err(e) => {
                    warn!(%url, attempt, elapsed = ?start.elapsed(), error = %e, "Properties API request failed");
                    last_err = Some(e);

                    if attempt < self.max_attempts {
                        let base = std::cmp::min(250 * 2u64.pow(attempt as u32), MAX_BACKOFF_MILLIS);
                        let jitter = rand::thread_rng().gen_range(0..=JITTER_MAX_MILLIS);
                        std::thread::sleep(Duration::from_millis(base + jitter));
                    }
                }
            }
        }

        Err(last_err.unwrap_or_else(|| ApiError::Network("retry loop made no attempts".into())))
    }

    fn try_get_text(&self, url: &Url) -> Result<String, ApiError> {
        let resp = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();

        let text = resp
            .text()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}

impl PropertiesApi for HttpPropertiesApi {
    fn list_properties(&self) -> Result<Vec<Property>, ApiError> {
        let url = self.endpoint(&["properties"])?;
        let text = self.get_text_with_retry(&url)?;
        let properties = parse_listing(&text)?;

        info!(count = properties.len(), "Fetched property listing");
        Ok(properties)
    }

    fn get_property(&self, id: &str) -> Result<Property, ApiError> {
        let url = self.endpoint(&["properties", id])?;
        let text = self.get_text_with_retry(&url)?;
        parse_detail(&text)
    }
}

pub fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, ApiError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ApiError::Url(format!("{base} cannot be a base URL")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Decodes `{ "properties": [...] }`. Records that fail to decode or cannot
/// become a `Property` are dropped with a warning rather than failing the page.
pub fn parse_listing(body: &str) -> Result<Vec<Property>, ApiError> {
    let envelope: ListingEnvelope =
        serde_json::from_str(body).map_err(|e| ApiError::JsonParse(e.to_string()))?;

    Ok(envelope
        .properties
        .into_iter()
        .filter_map(|value| {
            let raw = match serde_json::from_value::<ApiProperty>(value) {
                Ok(raw) => raw,
                Err(e) => {
                    warn!(error = %e, "Skipping undecodable property record");
                    return None;
                }
            };
            convert(raw).ok()
        })
        .collect())
}

pub fn parse_detail(body: &str) -> Result<Property, ApiError> {
    let envelope: DetailEnvelope =
        serde_json::from_str(body).map_err(|e| ApiError::JsonParse(e.to_string()))?;

    convert(envelope.property).map_err(ApiError::JsonParse)
}

fn convert(raw: ApiProperty) -> Result<Property, String> {
    Property::from_api(raw).map_err(|reason| {
        warn!(%reason, "Skipping malformed property record");
        reason
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Price;

    #[test]
    fn endpoint_keeps_base_path() {
        let base = Url::parse("http://localhost:5000/api/").unwrap();
        assert_eq!(
            endpoint(&base, &["properties", "abc 1"]).unwrap().as_str(),
            "http://localhost:5000/api/properties/abc%201"
        );

        let base = Url::parse("http://localhost:5000/api").unwrap();
        assert_eq!(
            endpoint(&base, &["properties"]).unwrap().as_str(),
            "http://localhost:5000/api/properties"
        );
    }

    #[test]
    fn listing_skips_records_without_id() {
        let body = r#"{
            "properties": [
                { "_id": "1", "title": "Lake House", "price": 6000000 },
                { "title": "No id" },
                { "_id": "2", "title": "City Flat", "price": "Price on Request" }
            ]
        }"#;

        let props = parse_listing(body).unwrap();
        assert_eq!(props.len(), 2);
        assert_eq!(props[1].price, Price::OnRequest);
    }

    #[test]
    fn listing_accepts_records_with_both_id_keys() {
        let body = r#"{"properties":[{"_id":"a1","id":"a1","title":"Lake House","price":6000000}]}"#;

        let props = parse_listing(body).unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].id, "a1");
        assert_eq!(props[0].title, "Lake House");
    }

    #[test]
    fn mistyped_record_is_skipped_not_fatal() {
        let body = r#"{
            "properties": [
                { "_id": "1", "title": "Lake House", "price": 6000000 },
                { "_id": "2", "images": [null] },
                { "_id": "3", "title": 123 },
                { "_id": "4", "attributes": "n/a" },
                { "_id": "5", "createdAt": 1700000000 }
            ]
        }"#;

        let props = parse_listing(body).unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].id, "1");
    }

    #[test]
    fn listing_without_properties_key_is_empty() {
        assert!(parse_listing("{}").unwrap().is_empty());
    }

    #[test]
    fn garbage_body_is_parse_error() {
        assert!(matches!(parse_listing("<html>"), Err(ApiError::JsonParse(_))));
    }

    #[test]
    fn detail_envelope() {
        let p = parse_detail(r#"{ "property": { "id": "9", "title": "Villa" } }"#).unwrap();
        assert_eq!(p.id, "9");
        assert_eq!(p.title, "Villa");
    }
}
