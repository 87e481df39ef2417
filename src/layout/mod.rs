//! Dashboard Layout
//!
//! - **ids**: widget ids used across layout, callbacks and page script
//! - **widgets**: the static tab/dropdown/graph tree
//! - **render**: HTML page rendering

pub mod ids;
pub mod render;
pub mod widgets;

pub use render::{render_page, render_widget};
pub use widgets::{build_layout, scope_options, DropdownOption, Tab, Widget, PAGE_TITLE};
