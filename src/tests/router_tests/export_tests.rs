use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{expect_err, get, sample_properties, test_state};

#[test]
fn export_returns_spreadsheet() {
    let state = test_state(Some(sample_properties()));

    let resp = handle(get("/properties/export?category=Commercial"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["Content-Type"],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert!(resp.headers()["Content-Disposition"]
        .to_str()
        .unwrap()
        .contains("properties.xlsx"));
}

#[test]
fn export_fails_when_listing_unavailable() {
    let state = test_state(None);

    let err = expect_err(handle(get("/properties/export"), &state));
    assert!(matches!(err, ServerError::Upstream(_)));
}

#[test]
fn export_with_trailing_slash_is_still_export() {
    // Any fetch of a property named "export" would 404 here
    let state = test_state(Some(sample_properties()));

    let resp = handle(get("/properties/export/?city=Pune"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.headers()["Content-Disposition"]
        .to_str()
        .unwrap()
        .contains("properties.xlsx"));
}
