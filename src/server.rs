// ABOUTME: HTTP server assembly: router composition, middleware stack, and graceful shutdown
// ABOUTME: Serves user routes at the root and under /api, plus health and readiness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::middleware::{make_request_span, record_response, request_id_middleware, setup_cors};
use crate::resources::AnalyticsResources;
use crate::routes::{HealthRoutes, UserRoutes};
use anyhow::{Context, Result};
use axum::{middleware, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Prefix the web client uses for every user route
pub const API_PREFIX: &str = "/api";

/// Build the complete application router
pub fn build_router(resources: Arc<AnalyticsResources>) -> Router {
    let user_routes = UserRoutes::routes(Arc::clone(&resources));

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(user_routes.clone())
        .nest(API_PREFIX, user_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_request_span)
                .on_response(record_response),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(setup_cors(&resources.config.cors))
}

/// Bind and serve until Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run_server(resources: Arc<AnalyticsResources>) -> Result<()> {
    let config = Arc::clone(&resources.config);
    let addr: SocketAddr = format!("{}:{}", config.host, config.http_port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", config.host, config.http_port))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
