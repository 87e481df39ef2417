//! # Fund Dashboard
//!
//! Investment and Emissions Dashboard - serves fund size, investment
//! distribution and emissions charts built from a single CSV dataset.
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading and column lookup
//! - [`charts`]: figure model, update handlers and callback registry
//! - [`layout`]: static widget tree and HTML page
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML config with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fund_dashboard::charts::emissions_chart;
//! use fund_dashboard::dataset::{Dataset, EmissionScope};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Dataset::load("data/dummy_sample.csv")?;
//!
//!     let figure = emissions_chart(&dataset, Some(EmissionScope::Scope2.column()))?;
//!     println!("{}", serde_json::to_string_pretty(&figure)?);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod layout;

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use charts::{
    emissions_chart, fund_size_chart, investment_distribution_chart, CallbackRegistry, Figure,
};

pub use config::{Config, ConfigError, DatasetConfig, LoggingConfig, ServerConfig};

pub use dataset::{Dataset, DatasetError, DatasetResult, EmissionScope, Record};

pub use layout::{build_layout, render_page, Widget};
