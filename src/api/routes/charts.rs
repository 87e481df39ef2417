//! Chart Routes
//!
//! - POST /api/v1/update - Run every callback bound to a changed input
//! - GET /api/v1/charts/:id - Render one graph
//! - GET /api/v1/scopes - Scope dropdown options

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ChartParams, OutputFigure, ScopesResponse, UpdateRequest, UpdateResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::charts::Figure;
use crate::dataset::EmissionScope;
use crate::layout::scope_options;

/// POST /api/v1/update
///
/// Reactive update: redraw every graph bound to `input` for the new value.
/// A failing handler only fails its own output.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateRequest>,
) -> Json<UpdateResponse> {
    tracing::debug!(input = %req.input, value = ?req.value, "Input changed");

    let outputs = state
        .callbacks
        .dispatch(&req.input, &state.dataset, req.value.as_deref())
        .into_iter()
        .map(|(id, result)| match result {
            Ok(figure) => OutputFigure {
                id: id.to_string(),
                figure: Some(figure),
                error: None,
            },
            Err(e) => {
                let error = ApiError::from(e);
                tracing::error!(output = id, error = %error, "Callback failed");
                OutputFigure {
                    id: id.to_string(),
                    figure: None,
                    error: Some(error.body()),
                }
            }
        })
        .collect();

    Json(UpdateResponse { outputs })
}

/// GET /api/v1/charts/:id
///
/// Render a single graph, optionally for a given scope.
pub async fn get_chart(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<ChartParams>,
) -> ApiResult<Json<Figure>> {
    let figure = state
        .callbacks
        .render(&id, &state.dataset, params.scope.as_deref())
        .ok_or_else(|| ApiError::NotFound(format!("Chart '{}' not found", id)))??;

    Ok(Json(figure))
}

/// GET /api/v1/scopes
pub async fn list_scopes() -> Json<ScopesResponse> {
    Json(ScopesResponse {
        options: scope_options(),
        default: EmissionScope::default().column().to_string(),
    })
}
