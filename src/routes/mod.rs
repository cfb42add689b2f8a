// ABOUTME: Route module organization for the analytics HTTP endpoints
// ABOUTME: Holds the single JSON transport helper every handler serializes through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for Pierre User Analytics
//!
//! Each domain module contains route definitions and thin handlers that
//! delegate to `pierre-intelligence`.

/// Health check and readiness routes
pub mod health;
/// Per-user analytics routes
pub mod users;

pub use health::HealthRoutes;
pub use users::UserRoutes;

use crate::errors::AppError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Serialize a payload into a `200 OK` JSON response
///
/// Non-finite floats that reach this point are written as `null`.
///
/// # Errors
///
/// Returns `SerializationError` when the payload cannot be represented as JSON
pub fn json_response<T: Serialize>(payload: &T) -> Result<Response, AppError> {
    let body = serde_json::to_value(payload)?;
    Ok((StatusCode::OK, Json(body)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[derive(Serialize)]
    struct Sample {
        value: f64,
        missing: Option<f64>,
    }

    #[tokio::test]
    async fn test_non_finite_values_become_null() {
        let response = json_response(&Sample {
            value: f64::NAN,
            missing: None,
        })
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["value"].is_null());
        assert!(json["missing"].is_null());
    }
}
