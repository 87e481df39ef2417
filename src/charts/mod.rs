//! Dashboard Charts
//!
//! - **figure**: Plotly-compatible figure model
//! - **handlers**: the three update handlers (fund size, investment, emissions)
//! - **registry**: callback bindings from the scope dropdown to each graph

pub mod figure;
pub mod handlers;
pub mod registry;

pub use figure::{Axis, BarTrace, Figure, Layout, Marker, PieTrace, Title, Trace};
pub use handlers::{
    emissions_chart, fund_size_chart, investment_distribution_chart, ChartHandler,
};
pub use registry::{Callback, CallbackRegistry};
