//! AWS Lambda adapter for the redirect handler.
//!
//! The event's request path becomes the handler's `rawPath`; handler errors are
//! returned to the runtime unchanged.

use lambda_http::{Body, Error, Request, Response};

use crate::application::services::RedirectService;
use crate::domain::entities::{InvocationRequest, InvocationResponse};

/// Handles one Lambda HTTP event.
pub async fn function_handler(
    service: &RedirectService,
    event: Request,
) -> Result<Response<Body>, Error> {
    let request = InvocationRequest::new(event.uri().path());

    let response = service.handle(&request).await.map_err(|e| {
        tracing::error!("Redirect failed: {}", e);
        e
    })?;

    into_lambda_response(response)
}

/// Converts a handler response into a Lambda HTTP response.
///
/// # Errors
///
/// Fails when a header name or value is not valid HTTP, e.g. a stored URL
/// containing CR/LF.
pub fn into_lambda_response(response: InvocationResponse) -> Result<Response<Body>, Error> {
    let mut builder = Response::builder().status(response.status_code);

    for (name, value) in response.headers.iter().flatten() {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let body = match response.body {
        Some(text) => {
            builder = builder.header("content-type", "text/plain; charset=utf-8");
            Body::Text(text)
        }
        None => Body::Empty,
    };

    Ok(builder.body(body)?)
}
