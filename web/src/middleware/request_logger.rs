use axum::{extract::Request, middleware::Next, response::Response};
use log::*;
use std::time::Instant;

/// Logs one line per request: method, path, status and time to the response head.
///
/// For event streams the time covers only the subscription, not the stream.
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        "\"{method} {uri}\" {} in {:?}",
        response.status().as_u16(),
        started.elapsed()
    );
    response
}
