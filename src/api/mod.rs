//! HTTP surface (axum router + shared state).
//!
//! - `routes.rs`: one handler per query
//! - state is an immutable [`InventoryContext`] behind an `Arc`; handlers only read it

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::notify::Notifier;
use crate::simulation::context::InventoryContext;

pub mod routes;

/// Shared state for every handler.
#[derive(Clone)]
pub struct AppState {
    pub context: Arc<InventoryContext>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(context: InventoryContext, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            context: Arc::new(context),
            notifier,
        }
    }
}

/// Build the full HTTP router.
///
/// The dashboard consuming these endpoints is served from another origin,
/// so any origin, method and header is allowed.
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health))
        .route("/api/inventory-status", get(routes::inventory_status))
        .route("/api/kpi-metrics", get(routes::kpi_metrics))
        .route("/api/daily-demand", get(routes::daily_demand))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: &str, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, build_app(state)).await
}
