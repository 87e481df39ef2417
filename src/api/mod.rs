//! Dashboard HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Dashboard HTML
//! - `GET /api/v1/layout` - Widget tree
//!
//! ## Charts
//! - `POST /api/v1/update` - Redraw the graphs bound to a changed input
//! - `GET /api/v1/charts/:id` - Render one graph (`?scope=` selects the emissions column)
//! - `GET /api/v1/scopes` - Scope dropdown options
//!
//! ## Dataset
//! - `GET /api/v1/dataset` - Dataset summary
//! - `GET /api/v1/dataset/records` - Typed rows
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,no_run
//! use fund_dashboard::api::{serve, ApiConfig, AppState};
//! use fund_dashboard::dataset::Dataset;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Arc::new(Dataset::load("data/dummy_sample.csv")?);
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(dataset, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/layout", get(routes::page::get_layout))
        .route("/update", post(routes::charts::update))
        .route("/charts/:id", get(routes::charts::get_chart))
        .route("/scopes", get(routes::charts::list_scopes))
        .route("/dataset", get(routes::dataset::describe_dataset))
        .route("/dataset/records", get(routes::dataset::list_records));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the dashboard server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(debug = config.debug, "Dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{columns, fixtures, Dataset};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new(Arc::new(fixtures::sample()), ApiConfig::default());
        build_router(state)
    }

    async fn send_get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(app: Router, uri: &str, body: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = send_get(create_test_app(), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let response = send_get(create_test_app(), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let response = send_get(create_test_app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["rows"], 3);
    }

    #[tokio::test]
    async fn test_index_page() {
        let response = send_get(create_test_app(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Investment and Emissions Dashboard"));
        assert!(html.contains(r#"id="scope-dropdown""#));
    }

    #[tokio::test]
    async fn test_layout_json() {
        let response = send_get(create_test_app(), "/api/v1/layout").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["type"], "container");
    }

    #[tokio::test]
    async fn test_update_returns_three_outputs() {
        let body = format!(
            r#"{{"input": "scope-dropdown", "value": "{}"}}"#,
            columns::SCOPE1_EMISSIONS
        );
        let response = post_json(create_test_app(), "/api/v1/update", &body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let outputs = body["outputs"].as_array().unwrap();
        assert_eq!(outputs.len(), 3);
        assert_eq!(outputs[0]["id"], "fund-size-chart");
        assert_eq!(outputs[1]["id"], "investment-distribution");
        assert_eq!(outputs[2]["id"], "emissions-chart");

        let emissions = &outputs[2]["figure"];
        assert_eq!(
            emissions["data"][0]["y"],
            serde_json::json!([400.0, 100.0, 250.0])
        );
        assert_eq!(
            emissions["layout"]["title"]["text"],
            "Scope 1 Emissions (tons of CO2e) by Fund"
        );
    }

    #[tokio::test]
    async fn test_update_without_value_uses_default() {
        let response = post_json(
            create_test_app(),
            "/api/v1/update",
            r#"{"input": "scope-dropdown"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(
            body["outputs"][2]["figure"]["data"][0]["y"],
            serde_json::json!([1500.0, 600.0, 900.0])
        );
    }

    #[tokio::test]
    async fn test_update_unknown_scope_fails_only_emissions() {
        let response = post_json(
            create_test_app(),
            "/api/v1/update",
            r#"{"input": "scope-dropdown", "value": "Scope 4"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let outputs = body["outputs"].as_array().unwrap();
        assert_eq!(outputs.len(), 3);
        assert!(outputs[0]["figure"].is_object());
        assert!(outputs[1]["figure"].is_object());
        assert!(outputs[2].get("figure").is_none());
        assert_eq!(outputs[2]["id"], "emissions-chart");
        assert_eq!(outputs[2]["error"]["code"], "DATASET_ERROR");
        assert_eq!(
            outputs[2]["error"]["message"],
            "Dataset error: Column not found: Scope 4"
        );
    }

    #[tokio::test]
    async fn test_update_missing_company_column_keeps_other_graphs() {
        let dataset = Dataset::from_reader(
            "Fund,Fund Size ($M),Total Emissions by Fund (tons of CO2e)\nA,1,10\n".as_bytes(),
        )
        .unwrap();
        let app = build_router(AppState::new(Arc::new(dataset), ApiConfig::default()));

        let response = post_json(app, "/api/v1/update", r#"{"input": "scope-dropdown"}"#).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let outputs = body["outputs"].as_array().unwrap();
        assert_eq!(outputs.len(), 3);

        assert_eq!(outputs[0]["id"], "fund-size-chart");
        assert_eq!(outputs[0]["figure"]["data"][0]["y"], serde_json::json!([1.0]));
        assert!(outputs[0].get("error").is_none());

        assert_eq!(outputs[1]["id"], "investment-distribution");
        assert!(outputs[1].get("figure").is_none());
        assert_eq!(outputs[1]["error"]["code"], "DATASET_ERROR");
        assert_eq!(
            outputs[1]["error"]["message"],
            "Dataset error: Column not found: Company Name"
        );

        assert_eq!(outputs[2]["id"], "emissions-chart");
        assert_eq!(outputs[2]["figure"]["data"][0]["y"], serde_json::json!([10.0]));
    }

    #[tokio::test]
    async fn test_get_chart_unknown_scope_is_server_error() {
        let response = send_get(
            create_test_app(),
            "/api/v1/charts/emissions-chart?scope=Scope%204",
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "DATASET_ERROR");
    }

    #[tokio::test]
    async fn test_update_invalid_json() {
        let response = post_json(create_test_app(), "/api/v1/update", "not json").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_chart() {
        let response = send_get(
            create_test_app(),
            "/api/v1/charts/emissions-chart?scope=Scope%203%20Emissions%20(tons%20of%20CO2e)",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["data"][0]["y"], serde_json::json!([800.0, 350.0, 450.0]));
        assert_eq!(
            body["data"][0]["x"],
            serde_json::json!(["Growth Fund", "Green Fund", "Growth Fund"])
        );
    }

    #[tokio::test]
    async fn test_get_chart_unknown_id() {
        let response = send_get(create_test_app(), "/api/v1/charts/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_column_fails_at_render() {
        let dataset = Dataset::from_reader("Fund,Fund Size ($M)\nA,1\n".as_bytes()).unwrap();
        let app = build_router(AppState::new(Arc::new(dataset), ApiConfig::default()));

        let response = send_get(app.clone(), "/api/v1/charts/fund-size-chart").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send_get(app, "/api/v1/charts/investment-distribution").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_scopes() {
        let response = send_get(create_test_app(), "/api/v1/scopes").await;
        let body = json_body(response).await;

        assert_eq!(body["options"].as_array().unwrap().len(), 4);
        assert_eq!(body["default"], columns::TOTAL_EMISSIONS);
    }

    #[tokio::test]
    async fn test_dataset_summary() {
        let response = send_get(create_test_app(), "/api/v1/dataset").await;
        let body = json_body(response).await;

        assert_eq!(body["row_count"], 3);
        assert_eq!(body["columns"][0]["name"], "Fund");
        assert_eq!(body["columns"][0]["kind"], "text");
        assert_eq!(body["columns"][1]["kind"], "number");
        assert!(body["source"].is_null());
    }

    #[tokio::test]
    async fn test_dataset_records() {
        let response = send_get(create_test_app(), "/api/v1/dataset/records").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body.as_array().unwrap().len(), 3);
        assert_eq!(body[0]["company_name"], "Acme Corp");
        assert_eq!(body[2]["scope3_emissions"], 450.0);
    }
}
