// ABOUTME: Server binary for the Pierre user analytics HTTP API
// ABOUTME: Loads the CSV sources once at startup and serves read-only analytics
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Pierre User Analytics Server Binary
//!
//! Loads demographics, physical, activity, and insurance sources, builds the
//! master table, and serves the analytics API until Ctrl-C or SIGTERM. Any
//! source that fails to load aborts startup.

use anyhow::Result;
use clap::Parser;
use pierre_user_analytics::{
    config::environment::ServerConfig, logging, resources::AnalyticsResources, server,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "pierre-analytics-server")]
#[command(about = "Pierre User Analytics - personalized fitness analytics API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the directory holding the CSV sources
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize production logging
    logging::init_from_env()?;

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(data_dir) = args.data_dir {
        config.data.data_dir = data_dir;
    }

    info!("Starting Pierre User Analytics");
    info!("{}", config.summary());

    let resources = match AnalyticsResources::load(config) {
        Ok(resources) => Arc::new(resources),
        Err(e) => {
            error!(error.code = ?e.code, "Failed to load analytics sources: {}", e.message);
            return Err(e.into());
        }
    };

    display_available_endpoints(&resources.config);
    info!("Ready to serve user analytics!");

    if let Err(e) = server::run_server(resources).await {
        error!("Server error: {:#}", e);
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("Health:");
    info!("   Liveness:          GET http://{host}:{port}/health");
    info!("   Readiness:         GET http://{host}:{port}/ready");
    info!("User Analytics (also under /api):");
    info!("   Dashboard:         GET http://{host}:{port}/user/{{user_id}}/dashboard");
    info!("   Weekly Progress:   GET http://{host}:{port}/user/{{user_id}}/progress?weeks=N");
    info!("   Similar Users:     GET http://{host}:{port}/user/{{user_id}}/similar?top_n=N");
    info!("   Goals:             GET http://{host}:{port}/user/{{user_id}}/goals");
    info!("   Weekly Report:     GET http://{host}:{port}/user/{{user_id}}/report");
    info!("   Insurance:         GET http://{host}:{port}/user/{{user_id}}/insurance");
    info!("=== End of Endpoint List ===");
}
