// Page handlers for HTML rendering with Askama

use axum::extract::State;
use axum::response::Html;

use crate::render::render_home;
use crate::site_server::{AppError, AppState};

// ============================================================================
// Home Page
// ============================================================================

/// The whole portfolio is a single page; rendered per request from the
/// immutable content and config held in `AppState`.
pub async fn home_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = render_home(&state.content, &state.config)
        .map_err(|e| AppError::Internal(format!("Template error: {}", e)))?;
    Ok(Html(html))
}
