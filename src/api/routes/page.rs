//! Page Routes
//!
//! - GET / - Dashboard HTML
//! - GET /api/v1/layout - Widget tree as JSON

use axum::{extract::State, response::Html, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::layout::Widget;

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page.as_ref().clone())
}

/// GET /api/v1/layout
pub async fn get_layout(State(state): State<Arc<AppState>>) -> Json<Widget> {
    Json(state.layout.as_ref().clone())
}
