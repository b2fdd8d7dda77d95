//! Axum server setup
//!
//! Server skeleton with:
//! - Localhost-only CORS by default
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db::FestivalStore;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8080)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_permissive: false,
        }
    }
}

/// Shared application state
///
/// The store is the only shared resource; handlers get it injected
/// through axum's `State`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FestivalStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn FestivalStore>) -> Self {
        Self { store }
    }
}

/// Build the application router with every route, without middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router::<AppState>())
        .merge(routes::festivals::router())
        .merge(routes::performances::router())
        .with_state(state)
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        return CorsLayer::permissive();
    }

    let port = config.bind_addr.port();
    let origins: Vec<HeaderValue> = ["localhost", "127.0.0.1"]
        .iter()
        .filter_map(|host| HeaderValue::from_str(&format!("http://{}:{}", host, port)).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Run the HTTP server until a shutdown signal arrives.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(PgStore::new(create_pool(options).await?));
/// run_server(store, ServerConfig::default()).await?;
/// ```
pub async fn run_server(
    store: Arc<dyn FestivalStore>,
    config: ServerConfig,
) -> Result<(), ServerError> {
    let app = build_router(AppState::new(store))
        .layer(cors_layer(&config))
        .layer(TraceLayer::new_for_http());

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use tower::ServiceExt;

    async fn preflight_allow_origin(config: &ServerConfig, origin: &str) -> Option<String> {
        let app = build_router(AppState::new(Arc::new(MemoryStore::new())))
            .layer(cors_layer(config));

        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/festivals")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|value| value.to_str().unwrap().to_owned())
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8080);
        assert!(!config.cors_permissive);
    }

    #[tokio::test]
    async fn cors_allows_localhost_origin_on_bound_port() {
        let config = ServerConfig::default();
        assert_eq!(
            preflight_allow_origin(&config, "http://localhost:8080").await,
            Some("http://localhost:8080".to_owned())
        );
        assert_eq!(
            preflight_allow_origin(&config, "http://127.0.0.1:8080").await,
            Some("http://127.0.0.1:8080".to_owned())
        );
    }

    #[tokio::test]
    async fn cors_rejects_foreign_origin_by_default() {
        let config = ServerConfig::default();
        assert_eq!(
            preflight_allow_origin(&config, "http://example.com").await,
            None
        );
    }

    #[tokio::test]
    async fn cors_permissive_allows_any_origin() {
        let config = ServerConfig {
            cors_permissive: true,
            ..ServerConfig::default()
        };
        assert_eq!(
            preflight_allow_origin(&config, "http://example.com").await,
            Some("*".to_owned())
        );
    }
}
