//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::{request, response},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::internal_server_error::InternalServerError;

/// The number of bytes of a body to log at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let Some(body) = read_body(body).await else {
        return InternalServerError::default().into_response();
    };
    log_request(&parts, &body);

    let response = next.run(Request::from_parts(parts, Body::from(body))).await;

    let (parts, body) = response.into_parts();
    let Some(body) = read_body(body).await else {
        return InternalServerError::default().into_response();
    };
    log_response(&parts, &body);

    Response::from_parts(parts, Body::from(body))
}

async fn read_body(body: Body) -> Option<Bytes> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .inspect_err(|error| tracing::error!("Could not read body for logging: {error}"))
        .ok()
}

/// The body as text, cut to at most [LOG_BODY_LENGTH_LIMIT] bytes, and
/// whether it was cut.
fn body_preview(body: &[u8]) -> (String, bool) {
    let is_truncated = body.len() > LOG_BODY_LENGTH_LIMIT;
    let preview = &body[..body.len().min(LOG_BODY_LENGTH_LIMIT)];

    (String::from_utf8_lossy(preview).into_owned(), is_truncated)
}

fn log_request(parts: &request::Parts, body: &[u8]) {
    match body_preview(body) {
        (preview, true) => {
            tracing::info!("Received request: {parts:#?}\nbody: {preview}...");
            tracing::debug!("Full request body: {:?}", String::from_utf8_lossy(body));
        }
        (preview, false) => tracing::info!("Received request: {parts:#?}\nbody: {preview:?}"),
    }
}

fn log_response(parts: &response::Parts, body: &[u8]) {
    match body_preview(body) {
        (preview, true) => {
            tracing::info!("Sending response: {parts:#?}\nbody: {preview}...");
            tracing::debug!("Full response body: {:?}", String::from_utf8_lossy(body));
        }
        (preview, false) => tracing::info!("Sending response: {parts:#?}\nbody: {preview:?}"),
    }
}
