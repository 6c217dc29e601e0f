//! trend-chart: headless rendering core for a smooth "session trend" chart.
//!
//! Samples are laid out evenly across a viewport, joined by a monotone cubic
//! curve with a filled area underneath, and tiled into hover regions so the
//! nearest sample's tooltip follows the pointer. Frames are backend-agnostic;
//! an SVG renderer is included.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{TrendChart, TrendChartConfig};
pub use error::{ChartError, ChartResult};
