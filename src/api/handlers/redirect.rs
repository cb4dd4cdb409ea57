//! Handler for short URL redirect.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderName, HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::domain::entities::{InvocationRequest, InvocationResponse};
use crate::error::RedirectError;
use crate::state::AppState;

/// Resolves a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}` (and `GET /`, which always fails validation)
///
/// # Response Codes
///
/// - **302 Found**: link is valid, `Location` points at the original URL
/// - **410 Gone**: link has expired, body `URL has expired`
/// - **400 / 404 / 500 / 502**: see [`RedirectError`]
pub async fn redirect_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, RedirectError> {
    let request = InvocationRequest::new(uri.path());
    let response = state.redirect_service.handle(&request).await?;

    Ok(to_http_response(response))
}

/// Converts a handler response into an axum response.
///
/// A header the HTTP layer cannot represent (e.g. a stored URL containing a
/// newline) yields `500 Internal Server Error`.
pub fn to_http_response(response: InvocationResponse) -> Response {
    let status = match StatusCode::from_u16(response.status_code) {
        Ok(status) => status,
        Err(e) => {
            error!(status_code = response.status_code, "Invalid status code: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let mut http_response = match response.body {
        Some(body) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            Body::from(body),
        )
            .into_response(),
        None => Body::empty().into_response(),
    };
    *http_response.status_mut() = status;

    for (name, value) in response.headers.into_iter().flatten() {
        let parsed = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::try_from(value.as_str()),
        );
        match parsed {
            (Ok(name), Ok(value)) => {
                http_response.headers_mut().insert(name, value);
            }
            _ => {
                error!(header = %name, "Stored value is not a valid HTTP header");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        }
    }

    http_response
}
