// src/domain/store.rs

use crate::api::PropertiesApi;
use crate::domain::Property;
use tracing::warn;

/// The property collection backing one page render.
///
/// Loaded in one go from the Properties API and never modified after that;
/// a refetch builds a new store. A failed load behaves as an empty store so
/// the pipeline still renders ("0 properties") while the page offers a retry.
#[derive(Debug)]
pub enum PropertyStore {
    Loaded(Vec<Property>),
    Failed(String),
}

impl PropertyStore {
    pub fn load(api: &dyn PropertiesApi) -> Self {
        match api.list_properties() {
            Ok(properties) => PropertyStore::Loaded(properties),
            Err(e) => {
                warn!(error = %e, "Property listing fetch failed, rendering empty store");
                PropertyStore::Failed(e.to_string())
            }
        }
    }

    pub fn properties(&self) -> &[Property] {
        match self {
            PropertyStore::Loaded(properties) => properties,
            PropertyStore::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PropertyStore::Loaded(_) => None,
            PropertyStore::Failed(reason) => Some(reason),
        }
    }
}
