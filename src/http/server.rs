//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the play, health and fallback handlers
//! - Wire up middleware (request ID, timeout, panic isolation, headers)
//! - Serve on a listener until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::BridgeConfig;
use crate::http::error::BridgeError;
use crate::http::handlers::{self, SERVICE_NAME};
use crate::http::page::PlayPage;
use crate::http::request::{request_id, UuidRequestId};
use crate::observability::metrics;
use crate::security::headers;
use crate::translate::Translator;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<Translator>,
    pub page: Arc<PlayPage>,
}

impl AppState {
    pub fn from_config(config: &BridgeConfig) -> Result<Self, BridgeError> {
        Ok(Self {
            translator: Arc::new(Translator::from_config(&config.frontend)),
            page: Arc::new(PlayPage::new(&config.play)?),
        })
    }
}

/// HTTP server for the bridge.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: BridgeConfig) -> Result<Self, BridgeError> {
        let state = AppState::from_config(&config)?;
        let routes = Router::new()
            .route("/play", get(handlers::play))
            .route("/health", get(handlers::health))
            .route("/", get(handlers::health))
            .fallback(handlers::not_found)
            .with_state(state);
        Ok(Self {
            router: with_middleware(&config, routes),
        })
    }

    /// The fully layered router, for serving or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            service = SERVICE_NAME,
            port = addr.port(),
            "RetroArch HTTP Bridge running on port {}",
            addr.port()
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::debug!("HTTP server stopped");
        Ok(())
    }
}

/// Wrap `routes` with the middleware stack.
///
/// Panics are caught inside the metrics layer so they are counted as 500s.
#[allow(deprecated)]
fn with_middleware(config: &BridgeConfig, routes: Router) -> Router {
    let mut router = routes
        .layer(CatchPanicLayer::new())
        .layer(middleware::from_fn(metrics::track_metrics))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)));

    if config.security.enable_headers {
        router = headers::apply_security_headers(router);
    }

    router = router.layer(PropagateRequestIdLayer::x_request_id());

    if config.observability.access_log {
        router = router.layer(TraceLayer::new_for_http().make_span_with(
            |request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = request_id(request).unwrap_or("-"),
                )
            },
        ));
    }

    router.layer(SetRequestIdLayer::x_request_id(UuidRequestId))
}
