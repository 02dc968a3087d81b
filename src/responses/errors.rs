use crate::errors::ServerError;
use crate::templates::pages::error_page;
use astra::{Body, Response, ResponseBuilder};
use tracing::error;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let (status, message) = match &err {
        ServerError::NotFound => (404, "Not Found".to_string()),
        ServerError::Upstream(_) => (502, "The property service is unavailable right now.".to_string()),
        ServerError::XlsxError(_) | ServerError::InternalError => {
            (500, "Internal Server Error".to_string())
        }
    };

    if status >= 500 {
        error!(error = %err, status, "Request failed");
    }

    let body = error_page(status, &message).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
