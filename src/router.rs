use crate::domain::{
    compute_view, distinct_categories, distinct_cities, paginate, PropertyQuery, PropertyStore,
};
use crate::errors::ServerError;
use crate::responses::html_response;
use crate::responses::ResultResp;
use crate::spreadsheets::export_properties_xlsx;
use crate::state::AppState;
use crate::templates::pages::{detail_page, listing_page, ListingVm};
use astra::Request;
use tracing::{debug, info};

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    // "/properties/export/" and "/properties/export" are the same route
    let path = match req.uri().path() {
        "/" => "/",
        p => p.trim_end_matches('/'),
    };
    let raw_query = req.uri().query().unwrap_or("");

    debug!(method, path, "Handling request");

    match (method, path) {
        ("GET", "/") | ("GET", "/properties") => listing(state, raw_query),
        ("GET", "/properties/export") => export(state, raw_query),
        ("GET", p) if p.starts_with("/properties/") => {
            detail(state, p.trim_start_matches("/properties/"))
        }
        _ => Err(ServerError::NotFound),
    }
}

fn listing(state: &AppState, raw_query: &str) -> ResultResp {
    let query = PropertyQuery::from_query_string(raw_query);
    let store = PropertyStore::load(state.api.as_ref());
    let properties = store.properties();

    let view = compute_view(properties, &query);
    debug!(
        total = properties.len(),
        matched = view.len(),
        sort = query.sort.token(),
        "Computed property view"
    );

    let vm = ListingVm {
        query: &query,
        page: paginate(&view, query.page, state.config.page_size),
        cities: distinct_cities(properties),
        categories: distinct_categories(properties),
        load_error: store.error(),
    };

    html_response(listing_page(&vm))
}

fn export(state: &AppState, raw_query: &str) -> ResultResp {
    let query = PropertyQuery::from_query_string(raw_query);
    let store = PropertyStore::load(state.api.as_ref());

    if let Some(reason) = store.error() {
        return Err(ServerError::Upstream(reason.to_string()));
    }

    let view = compute_view(store.properties(), &query);
    info!(rows = view.len(), "Exporting property view");

    export_properties_xlsx(&view)
}

fn detail(state: &AppState, id: &str) -> ResultResp {
    if !is_valid_id(id) {
        return Err(ServerError::NotFound);
    }

    let property = state.api.get_property(id)?;
    html_response(detail_page(&property))
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
