// ABOUTME: HTTP middleware for request ids, request spans, and CORS
// ABOUTME: Provides request ID generation, span creation, and cross-origin setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Cross-origin resource sharing layer
pub mod cors;
/// Request id generation and propagation
pub mod request_id;
/// Per-request tracing spans
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request correlation
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};

// Request tracing
pub use self::tracing::{create_request_span, make_request_span, record_response};
