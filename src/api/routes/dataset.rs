//! Dataset Routes
//!
//! - GET /api/v1/dataset - Source, row count and column kinds
//! - GET /api/v1/dataset/records - Every row as a typed record

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{ColumnInfo, DatasetResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dataset::Record;

/// GET /api/v1/dataset
pub async fn describe_dataset(State(state): State<Arc<AppState>>) -> Json<DatasetResponse> {
    let dataset = &state.dataset;

    let columns = dataset
        .table()
        .columns()
        .iter()
        .map(|c| ColumnInfo {
            name: c.name.clone(),
            kind: c.kind(),
        })
        .collect();

    Json(DatasetResponse {
        source: dataset.source().map(|p| p.display().to_string()),
        row_count: dataset.row_count(),
        columns,
    })
}

/// GET /api/v1/dataset/records
///
/// Fails with a dataset error when any of the eight fund columns is missing.
pub async fn list_records(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Record>>> {
    Ok(Json(state.dataset.records()?))
}
