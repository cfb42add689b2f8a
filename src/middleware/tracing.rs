// ABOUTME: Request span construction and response recording for the HTTP trace layer
// ABOUTME: Records method, path, request id, user id, and status code on one span per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::request_id::RequestId;
use crate::server::API_PREFIX;
use axum::extract::Request;
use axum::response::Response;
use std::time::Duration;
use tracing::{debug, field, Span};

/// Create a tracing span for HTTP requests
pub fn create_request_span(method: &str, path: &str) -> Span {
    tracing::info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = field::Empty,
        user_id = field::Empty,
        status_code = field::Empty,
    )
}

/// Span factory for `TraceLayer::make_span_with`
///
/// Must run inside the request id middleware so the id is already in the extensions.
pub fn make_request_span(request: &Request) -> Span {
    let path = request.uri().path();
    let span = create_request_span(request.method().as_str(), path);
    if let Some(request_id) = request.extensions().get::<RequestId>() {
        span.record("request_id", field::display(request_id.as_str()));
    }
    if let Some(user_id) = user_id_from_path(path) {
        span.record("user_id", field::display(user_id));
    }
    span
}

/// Response hook for `TraceLayer::on_response`
pub fn record_response(response: &Response, latency: Duration, span: &Span) {
    let status = response.status().as_u16();
    span.record("status_code", status);
    debug!(parent: span, status, latency = ?latency, "finished processing request");
}

/// User id segment of `/user/{id}/...`, with or without the API prefix
pub fn user_id_from_path(path: &str) -> Option<&str> {
    let path = path.strip_prefix(API_PREFIX).unwrap_or(path);
    let mut segments = path.trim_start_matches('/').split('/');
    match (segments.next(), segments.next()) {
        (Some("user"), Some(user_id)) if !user_id.is_empty() => Some(user_id),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_from_path() {
        assert_eq!(user_id_from_path("/user/USR001/dashboard"), Some("USR001"));
        assert_eq!(user_id_from_path("/api/user/USR002/similar"), Some("USR002"));
        assert_eq!(user_id_from_path("/health"), None);
        assert_eq!(user_id_from_path("/user//goals"), None);
        assert_eq!(user_id_from_path("/api/ready"), None);
    }
}
