//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the five fault routes
//! - Wire up middleware (request ID, tracing)
//! - Bind server to listener
//!
//! There is deliberately no timeout layer: `/timeout` must outlive the
//! caller's deadline.

use axum::{body::Body, routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::GeneratorConfig;
use crate::faults::FaultInjector;
use crate::http::handlers;
use crate::http::request::make_request_span;
use crate::observability::Counters;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service_name: Arc<str>,
    pub counters: Arc<Counters>,
    pub faults: Arc<FaultInjector>,
}

impl AppState {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            service_name: Arc::from(config.service_name.as_str()),
            counters: Arc::new(Counters::new()),
            faults: Arc::new(FaultInjector::new(&config.faults)),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

/// HTTP server for the error generator.
pub struct HttpServer {
    router: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        let state = AppState::new(&config);
        let router = Self::build_router(state.clone());
        Self { router, state }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/generate-error", get(handlers::generate_error))
            .route("/random-error", get(handlers::random_error))
            .route("/timeout", get(handlers::timeout))
            .route("/metrics", get(handlers::metrics))
            .fallback(handlers::not_found)
            .method_not_allowed_fallback(handlers::method_not_allowed)
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns only on an I/O failure; there is no graceful shutdown.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            error_probability = self.state.faults.error_probability(),
            hang = ?self.state.faults.hang_duration(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router).await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// A clone of the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Shared counters, for inspection alongside the server.
    pub fn counters(&self) -> Arc<Counters> {
        self.state.counters.clone()
    }

    /// Shared fault injector, for inspecting completed hangs.
    pub fn faults(&self) -> Arc<FaultInjector> {
        self.state.faults.clone()
    }
}
