// src/tests/router_tests/listing_tests.rs

use crate::domain::Price;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{expect_err, get, listing, read_body, sample_properties, test_state};

#[test]
fn listing_shows_all_properties() {
    let state = test_state(Some(sample_properties()));

    let resp = handle(get("/properties"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Showing <strong>3</strong> properties"));
    assert!(body.contains("Lake House"));
    assert!(body.contains("Corner Shop"));
}

#[test]
fn home_route_renders_listing() {
    let state = test_state(Some(sample_properties()));

    let resp = handle(get("/"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(read_body(resp).contains("Find your next property"));
}

#[test]
fn city_filter_and_price_sort_apply() {
    let state = test_state(Some(sample_properties()));

    let resp = handle(get("/properties?search=&city=Pune&sort=price-low"), &state).unwrap();
    let body = read_body(resp);

    assert!(body.contains("Showing <strong>2</strong> properties"));
    assert!(!body.contains("Corner Shop"));

    let lake = body.find("Lake House").expect("Lake House missing");
    let flat = body.find("City Flat").expect("City Flat missing");
    assert!(lake < flat, "numeric price should come before Price on Request");
}

#[test]
fn dropdowns_list_distinct_cities() {
    let state = test_state(Some(sample_properties()));

    let body = read_body(handle(get("/properties"), &state).unwrap());

    assert_eq!(body.matches(r#"<option value="Pune">"#).count(), 1);
    assert_eq!(body.matches(r#"<option value="Mumbai">"#).count(), 1);
}

#[test]
fn failed_fetch_renders_empty_view_with_retry() {
    let state = test_state(None);

    let resp = handle(get("/properties?city=Pune"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Showing <strong>0</strong> properties"));
    assert!(body.contains("Retry"));
    assert!(body.contains(r#"href="/properties?city=Pune""#));
}

#[test]
fn empty_store_is_not_an_error() {
    let state = test_state(Some(Vec::new()));

    let body = read_body(handle(get("/properties"), &state).unwrap());
    assert!(body.contains("Showing <strong>0</strong> properties"));
    assert!(!body.contains("Retry"));
}

#[test]
fn pages_the_derived_view() {
    let many = (0..30)
        .map(|i| {
            listing(
                &format!("id{i}"),
                &format!("Home {i:02}"),
                "Goa",
                "Villa",
                Price::Numeric(i as f64),
            )
        })
        .collect();
    let state = test_state(Some(many));

    let body = read_body(handle(get("/properties?sort=price-high&page=3"), &state).unwrap());

    // 12 per page: page 3 holds the six cheapest
    assert!(body.contains("Showing <strong>30</strong> properties"));
    assert!(body.contains("Page 3 of 3"));
    assert!(body.contains("Home 05"));
    assert!(!body.contains("Home 06"));
    assert!(body.contains("sort=price-high&amp;page=2"));
}

#[test]
fn unknown_route_is_not_found() {
    let state = test_state(Some(sample_properties()));

    let err = expect_err(handle(get("/nope"), &state));
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn trailing_slashes_reach_the_same_pages() {
    let state = test_state(Some(sample_properties()));

    let body = read_body(handle(get("/properties/"), &state).unwrap());
    assert!(body.contains("Showing <strong>3</strong> properties"));

    let resp = handle(get("/properties/p1/"), &state).unwrap();
    assert!(read_body(resp).contains("Lake House"));
}
