//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::api::error::ErrorBody;
use crate::charts::Figure;
use crate::dataset::ColumnKind;
use crate::layout::DropdownOption;

// ============================================
// UPDATE DTOs
// ============================================

/// Input change sent by the page
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    /// Id of the widget whose value changed
    pub input: String,
    /// New value (absent means the widget default)
    #[serde(default)]
    pub value: Option<String>,
}

/// Figures for every output bound to the changed input
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub outputs: Vec<OutputFigure>,
}

/// One redrawn graph: either a figure or the error its handler raised
#[derive(Debug, Serialize)]
pub struct OutputFigure {
    /// Graph widget id
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figure: Option<Figure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

// ============================================
// CHART DTOs
// ============================================

/// Query parameters for a single chart
#[derive(Debug, Default, Deserialize)]
pub struct ChartParams {
    /// Emissions column to plot
    #[serde(default)]
    pub scope: Option<String>,
}

/// Scope dropdown options
#[derive(Debug, Serialize)]
pub struct ScopesResponse {
    pub options: Vec<DropdownOption>,
    /// Value selected when nothing is chosen
    pub default: String,
}

// ============================================
// DATASET DTOs
// ============================================

/// Dataset summary
#[derive(Debug, Serialize)]
pub struct DatasetResponse {
    /// File the dataset was loaded from
    pub source: Option<String>,
    pub row_count: usize,
    pub columns: Vec<ColumnInfo>,
}

/// Name and kind of one column
#[derive(Debug, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub kind: ColumnKind,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Number of dataset rows
    pub rows: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
