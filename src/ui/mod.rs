//! UI modules for the TerraWatch dashboard.
//!
//! The UI is split into distinct panels:
//! - Top bar: Title, feed status, and event count
//! - Left panel: Alert counts, marker filter, refresh controls
//! - Central canvas: 3D globe with event markers
//! - Right panel: Trend chart, alert distribution, risk meters

pub mod colors;
mod globe_view;
mod left_panel;
mod right_panel;
mod top_bar;

pub use globe_view::render_globe_view;
pub use left_panel::render_left_panel;
pub use right_panel::render_right_panel;
pub use top_bar::render_top_bar;
