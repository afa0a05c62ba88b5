//! Custom request middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

/// Response header carrying the handler-side processing time in seconds.
pub const PROCESS_TIME_HEADER: &str = "x-process-time";

/// Time each request and report the duration in a response header and a
/// debug log line.
pub async fn process_time(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let start = Instant::now();
    let mut response = next.run(request).await;
    let elapsed = start.elapsed().as_secs_f64();

    if let Ok(value) = HeaderValue::from_str(&format!("{elapsed:.6}")) {
        response.headers_mut().insert(PROCESS_TIME_HEADER, value);
    }

    debug!(%method, path, elapsed_s = elapsed, status = %response.status(), "request handled");

    response
}
