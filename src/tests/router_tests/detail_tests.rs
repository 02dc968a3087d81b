use crate::errors::ServerError;
use crate::responses::html_error_response;
use crate::router::handle;
use crate::tests::utils::{expect_err, get, read_body, sample_properties, test_state};

#[test]
fn detail_page_renders_property() {
    let state = test_state(Some(sample_properties()));

    let resp = handle(get("/properties/p1"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Lake House"));
    assert!(body.contains("₹60 Lakh"));
}

#[test]
fn missing_property_is_404() {
    let state = test_state(Some(sample_properties()));

    let err = expect_err(handle(get("/properties/unknown"), &state));
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(html_error_response(err).status(), 404);
}

#[test]
fn odd_ids_are_rejected_before_fetch() {
    // Service down: reaching the API would surface as Upstream instead
    let state = test_state(None);

    let err = expect_err(handle(get("/properties/a%2Fb"), &state));
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn api_outage_on_detail_is_bad_gateway() {
    let state = test_state(None);

    let err = expect_err(handle(get("/properties/p1"), &state));
    assert!(matches!(err, ServerError::Upstream(_)));
    assert_eq!(html_error_response(err).status(), 502);
}
