mod config;
mod engine;
mod frame_builder;
mod snapshot;

pub use config::TrendChartConfig;
pub use engine::TrendChart;
pub use frame_builder::{grid_label, grid_level_y};
pub use snapshot::ChartSnapshot;
