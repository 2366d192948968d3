// Site Server Module
//
// Purpose: serve the rendered portfolio page plus read-only JSON views of
// its content and reveal timing. The contact form has no endpoint.

#[cfg(feature = "server")]
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

#[cfg(feature = "server")]
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

#[cfg(feature = "server")]
use std::path::Path;

#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use anyhow::Context;

#[cfg(feature = "server")]
use crate::config::SiteConfig;

#[cfg(feature = "server")]
use crate::content::PortfolioContent;

#[cfg(feature = "server")]
use crate::reveal::RevealSchedule;

#[cfg(feature = "server")]
use crate::web::handlers::pages::home_page;

// ============================================================================
// Application State
// ============================================================================

/// Immutable content and configuration, loaded once at startup.
#[cfg(feature = "server")]
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<PortfolioContent>,
    pub config: Arc<SiteConfig>,
}

#[cfg(feature = "server")]
impl AppState {
    /// Load content and config. Missing paths fall back to the built-in defaults.
    pub fn new(content_path: Option<&Path>, config_path: Option<&Path>) -> anyhow::Result<Self> {
        let content = match content_path {
            Some(path) => PortfolioContent::load(path)
                .with_context(|| format!("Failed to load content from {:?}", path))?,
            None => {
                tracing::info!("No content file given, using built-in content");
                PortfolioContent::default()
            }
        };

        let config = match config_path {
            Some(path) => SiteConfig::load(path)
                .with_context(|| format!("Failed to load site config from {:?}", path))?,
            None => SiteConfig::default(),
        };

        Ok(Self::from_parts(content, config))
    }

    pub fn from_parts(content: PortfolioContent, config: SiteConfig) -> Self {
        Self {
            content: Arc::new(content),
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "server")]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // The page
        .route("/", get(home_page))
        // Health check
        .route("/health", get(health_check))
        // Read-only JSON views
        .route("/api/content", get(get_content))
        .route("/api/reveal/schedule", get(get_reveal_schedule))
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "server")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(feature = "server")]
async fn get_content(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let value = serde_json::to_value(&*state.content)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(Json(value))
}

/// Per-section transition timing, the same values the page's CSS carries.
#[cfg(feature = "server")]
async fn get_reveal_schedule(State(state): State<AppState>) -> Json<RevealSchedule> {
    Json(RevealSchedule::new(
        &state.config.motion,
        &state.content.sections(),
    ))
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "server")]
#[derive(Debug)]
pub enum AppError {
    Internal(String),
}

#[cfg(feature = "server")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
