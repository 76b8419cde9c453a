//! Job Jar Skill Backend - Main Entry Point
//! Webhook daemon for the voice platform

mod telemetry;

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Import workspace crates
use jobjar_api_http::{HttpServer, HttpServerConfig};
use jobjar_core::application::SkillService;
use jobjar_core::port::ThreadRngPicker;
use jobjar_infra_sqlite::{create_pool, run_migrations, SqliteJobStore};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_DB_PATH: &str = "~/.jobjar/jobs.db";
const DEFAULT_HTTP_HOST: &str = "127.0.0.1";
const DEFAULT_HTTP_PORT: u16 = 8726;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize logging (JSON format for production)
    let log_format = std::env::var("JOBJAR_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("jobjar=info"))
        .expect("Failed to create env filter");

    match log_format.as_str() {
        "json" => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    info!("Job Jar skill backend v{} starting...", VERSION);

    // 1.1. Initialize OpenTelemetry (optional)
    if let Err(e) = telemetry::init_telemetry() {
        tracing::warn!(error = ?e, "Failed to initialize OpenTelemetry (continuing without it)");
    }

    // 2. Load configuration
    let db_path = std::env::var("JOBJAR_DB_PATH")
        .unwrap_or_else(|_| shellexpand::tilde(DEFAULT_DB_PATH).into_owned());

    let http_host =
        std::env::var("JOBJAR_HTTP_HOST").unwrap_or_else(|_| DEFAULT_HTTP_HOST.to_string());

    let http_port: u16 = std::env::var("JOBJAR_HTTP_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_HTTP_PORT);

    // Expected skill application id; empty or unset disables the check
    let application_id = std::env::var("JOBJAR_SKILL_ID")
        .ok()
        .filter(|s| !s.is_empty());

    info!(db_path = %db_path, "Initializing database...");

    // 3. Initialize database
    let pool = create_pool(&db_path)
        .await
        .map_err(|e| anyhow::anyhow!("DB pool creation failed: {}", e))?;
    run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;

    // 4. Setup dependencies (DI wiring)
    let store = Arc::new(SqliteJobStore::new(pool));
    let picker = Arc::new(ThreadRngPicker);
    let service = SkillService::new(store, picker);

    // 5. Start webhook server
    if application_id.is_some() {
        info!("Application id check enabled");
    }
    let http_config = HttpServerConfig {
        host: http_host,
        port: http_port,
        application_id,
    };
    let server = HttpServer::new(http_config, service);
    let server_handle = server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("Webhook server start failed: {}", e))?;

    info!("System ready. Waiting for events...");
    info!("Press Ctrl+C to shutdown");

    // 6. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 7. Graceful shutdown
    let join = server_handle
        .stop()
        .map_err(|e| anyhow::anyhow!("Webhook server stop failed: {}", e))?;
    let _ = tokio::time::timeout(std::time::Duration::from_secs(5), join).await;

    info!("Shutdown complete.");

    Ok(())
}
