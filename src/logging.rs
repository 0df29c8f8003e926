//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// The number of characters of a request or response body that are logged at
/// the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] characters, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let Some(body) = read_body(body).await else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    let body_text = String::from_utf8_lossy(&body);
    log_body(
        &format!("Received {} {}", parts.method, parts.uri),
        &body_text,
    );

    let response = next.run(Request::from_parts(parts, body.into())).await;

    let (parts, body) = response.into_parts();
    let Some(body) = read_body(body).await else {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };

    let body_text = String::from_utf8_lossy(&body);
    log_body(&format!("Sending {}", parts.status), &body_text);

    Response::from_parts(parts, body.into())
}

async fn read_body(body: Body) -> Option<Bytes> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .inspect_err(|error| tracing::error!("could not read body: {error}"))
        .ok()
}

fn log_body(summary: &str, body: &str) {
    match body.char_indices().nth(LOG_BODY_LENGTH_LIMIT) {
        Some((end, _)) => {
            tracing::info!("{summary}\nbody: {}...", &body[..end]);
            tracing::debug!("Full body: {body:?}");
        }
        None => tracing::info!("{summary}\nbody: {body:?}"),
    }
}
