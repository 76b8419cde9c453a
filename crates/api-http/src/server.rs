//! HTTP Webhook Server
//!
//! Serves the voice platform's POST endpoint plus a health route.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use jobjar_core::application::SkillService;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::info;

use crate::handler::{handle_event, handle_health, AppState};

const DEFAULT_HTTP_HOST: &str = "127.0.0.1";
const DEFAULT_HTTP_PORT: u16 = 8726;

/// HTTP Server Configuration
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
    /// Expected skill application id; None disables the check.
    pub application_id: Option<String>,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            application_id: None,
        }
    }
}

/// HTTP Server
pub struct HttpServer {
    config: HttpServerConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, service: SkillService) -> Self {
        let application_id = config.application_id.clone();
        Self {
            config,
            state: Arc::new(AppState {
                service,
                application_id,
            }),
        }
    }

    /// Start the webhook server. Resolves once the listener is bound;
    /// the returned handle stops it gracefully.
    pub async fn start(self) -> Result<ServerHandle, String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        info!(
            host = %self.config.host,
            port = %self.config.port,
            "Starting webhook server"
        );

        let app = router(self.state);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            let serve = axum::serve(listener, app).with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            });
            if let Err(e) = serve.await {
                tracing::error!(error = %e, "Webhook server failed");
            }
        });

        info!("Webhook server started successfully");

        Ok(ServerHandle { shutdown_tx, task })
    }
}

/// Routes for the webhook endpoint; separated so tests can drive the
/// handlers without a listener.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(handle_event))
        .route("/health", get(handle_health))
        .with_state(state)
}

/// Handle to a running server.
pub struct ServerHandle {
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl ServerHandle {
    /// Signal graceful shutdown; returns the join handle so callers can
    /// bound the wait.
    pub fn stop(self) -> Result<JoinHandle<()>, String> {
        self.shutdown_tx
            .send(())
            .map_err(|_| "Server already stopped".to_string())?;
        Ok(self.task)
    }
}
