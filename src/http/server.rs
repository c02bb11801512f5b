//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Compile routes and the redirect engine from config
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Serve until ctrl-c or an explicit shutdown signal

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::FromRef, http::StatusCode, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::handlers;
use crate::http::request::UuidRequestId;
use crate::redirect::{RedirectState, Redirector, DEFAULT_REDIRECT_STATUS};
use crate::routing::RouteTable;

/// Application state injected into handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub redirect: RedirectState,
}

impl AppState {
    /// Build the redirect engine from configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let routes = RouteTable::from_config(&config.routes);
        let status = StatusCode::from_u16(config.redirect.default_status)
            .ok()
            .filter(StatusCode::is_redirection)
            .unwrap_or_else(|| {
                tracing::warn!(
                    default_status = config.redirect.default_status,
                    fallback = DEFAULT_REDIRECT_STATUS.as_u16(),
                    "Configured redirect status is not 3xx"
                );
                DEFAULT_REDIRECT_STATUS
            });

        tracing::debug!(routes = routes.len(), default_status = %status, "Redirect engine ready");

        Self {
            redirect: RedirectState {
                redirector: Arc::new(Redirector::new(routes).with_default_status(status)),
                default_host: config.redirect.default_host.clone(),
            },
        }
    }
}

impl FromRef<AppState> for RedirectState {
    fn from_ref(state: &AppState) -> Self {
        state.redirect.clone()
    }
}

/// HTTP server hosting the redirect controller.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let state = AppState::from_config(&config);
        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        handlers::routes()
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// The fully layered router, for in-process dispatch.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for Ctrl+C or the shutdown broadcast.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = shutdown.recv() => {},
    }
    tracing::info!("Shutdown signal received");
}
