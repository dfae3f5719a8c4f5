//! The form endpoint and its router.

pub mod handlers;
pub mod render;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::core::service::PredictionService;
use crate::domain::{CategoryMapping, Classifier};
use crate::utils::error::Result;

/// Shared, read-only application state.
pub struct AppState {
    pub service: PredictionService<dyn Classifier>,
}

impl AppState {
    pub fn new(model: Arc<dyn Classifier>, mapping: Arc<CategoryMapping>) -> Self {
        Self {
            service: PredictionService::new(model, mapping),
        }
    }
}

/// Create the router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::show_form).post(handlers::submit_form))
        .route("/static/script.js", get(handlers::script))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn serve(addr: &str, state: Arc<AppState>) -> Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🚀 Listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
