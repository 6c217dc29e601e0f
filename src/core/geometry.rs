use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::hit_regions::{hit_region, left_percent};
use crate::core::monotone::monotone_path;
use crate::core::path::{PathData, Vertex};
use crate::core::{Sample, Viewport};

/// Plot position and hover metadata derived from one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    /// `x / width` in percent, for overlay placement independent of scaling.
    pub left_percent: f64,
    /// `y / height` in percent.
    pub top_percent: f64,
    pub hit_left: f64,
    pub hit_width: f64,
    /// Set on the most recent (last) sample only.
    pub is_today: bool,
    pub date: String,
    pub value: f64,
    pub sub_value: Option<f64>,
}

impl Coordinate {
    #[must_use]
    pub fn vertex(&self) -> Vertex {
        Vertex::new(self.x, self.y)
    }
}

/// Everything needed to draw the curve, its area and the hover overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendGeometry {
    pub points: Vec<Coordinate>,
    pub line_path: PathData,
    pub area_path: PathData,
    pub max_value: f64,
}

impl TrendGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            line_path: PathData::new(),
            area_path: PathData::new(),
            max_value: 0.0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Largest sample value, with `1.0` standing in for an all-zero maximum.
///
/// Returns `0.0` for an empty series.
#[must_use]
pub fn max_sample_value(samples: &[Sample]) -> f64 {
    match samples.iter().map(|sample| OrderedFloat(sample.value)).max() {
        None => 0.0,
        Some(OrderedFloat(max)) if max == 0.0 => 1.0,
        Some(OrderedFloat(max)) => max,
    }
}

/// Projects samples into trend-chart geometry.
///
/// Samples are spread evenly across the width in input order. Values map
/// linearly onto the plotting band between the paddings, `max_value` at the
/// top and zero at the bottom; values outside `[0, max_value]` are not
/// clamped. The function is pure and never fails: an empty series yields
/// [`TrendGeometry::empty`] and a single sample yields one point at `x = 0`
/// with empty paths.
#[must_use]
pub fn build_geometry(samples: &[Sample], viewport: Viewport) -> TrendGeometry {
    if samples.is_empty() {
        return TrendGeometry::empty();
    }

    let len = samples.len();
    let max_value = max_sample_value(samples);
    let plotting_height = viewport.plotting_height();
    let segment_width = viewport.width / len.saturating_sub(1).max(1) as f64;

    let points: Vec<Coordinate> = samples
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            let x = index as f64 * segment_width;
            let percent = sample.value / max_value;
            let y = viewport.padding_top + plotting_height * (1.0 - percent);
            let region = hit_region(index, len);
            Coordinate {
                x,
                y,
                left_percent: left_percent(index, len),
                top_percent: y / viewport.height * 100.0,
                hit_left: region.left,
                hit_width: region.width,
                is_today: index == len - 1,
                date: sample.date.clone(),
                value: sample.value,
                sub_value: sample.sub_value,
            }
        })
        .collect();

    let vertices: Vec<Vertex> = points.iter().map(Coordinate::vertex).collect();
    let line_path = monotone_path(&vertices);
    let mut area_path = line_path.clone();
    if !area_path.is_empty() {
        area_path
            .line_to(Vertex::new(viewport.width, viewport.height))
            .line_to(Vertex::new(0.0, viewport.height))
            .close();
    }

    TrendGeometry {
        points,
        line_path,
        area_path,
        max_value,
    }
}
