pub mod geometry;
pub mod hit_regions;
pub mod monotone;
pub mod path;
pub mod primitives;
pub mod types;

pub use geometry::{Coordinate, TrendGeometry, build_geometry, max_sample_value};
pub use hit_regions::{HitRegion, hit_index_at, hit_region};
pub use monotone::{BEZIER_TANGENT_DIVISOR, estimate_slopes, interior_slope, monotone_path};
pub use path::{PathCommand, PathData, Vertex};
pub use types::{Sample, Viewport};
