use serde::{Deserialize, Serialize};

use crate::core::geometry::Coordinate;

/// Horizontal hover band of one sample, in percent of the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitRegion {
    pub left: f64,
    pub width: f64,
}

impl HitRegion {
    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }
}

/// Percent of the viewport width between two neighbouring samples.
#[must_use]
pub fn gap_percent(len: usize) -> f64 {
    100.0 / len.saturating_sub(1).max(1) as f64
}

/// Horizontal position of sample `index` in percent of the viewport width.
#[must_use]
pub fn left_percent(index: usize, len: usize) -> f64 {
    index as f64 / len.saturating_sub(1).max(1) as f64 * 100.0
}

/// Hover band of sample `index` in a series of `len` samples.
///
/// Bands tile `[0, 100]` and neighbouring bands meet halfway between their
/// samples. The first and last sample only own the half gap on their inner
/// side. A lone sample owns the whole width.
#[must_use]
pub fn hit_region(index: usize, len: usize) -> HitRegion {
    if len <= 1 {
        return HitRegion {
            left: 0.0,
            width: 100.0,
        };
    }

    let unit = gap_percent(len);
    let half = unit / 2.0;
    if index == 0 {
        HitRegion {
            left: 0.0,
            width: half,
        }
    } else if index == len - 1 {
        HitRegion {
            left: 100.0 - half,
            width: half,
        }
    } else {
        HitRegion {
            left: left_percent(index, len) - half,
            width: unit,
        }
    }
}

/// Finds the sample whose hover band contains `percent`.
///
/// Bands are closed on the left; the last band is also closed on the right
/// so `100.0` still resolves. Returns `None` outside `[0, 100]`.
#[must_use]
pub fn hit_index_at(points: &[Coordinate], percent: f64) -> Option<usize> {
    if points.is_empty() || !(0.0..=100.0).contains(&percent) {
        return None;
    }
    let after = points.partition_point(|point| point.hit_left <= percent);
    Some(after.saturating_sub(1))
}
