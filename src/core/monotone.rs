//! Monotone cubic smoothing for the trend curve.
//!
//! Tangents are estimated per vertex from the adjacent secants and then
//! turned into cubic Bézier control points. At a local extremum (secants of
//! opposite sign, or one of them flat) the tangent is zero, so the curve
//! never overshoots the sampled minimum or maximum.

use crate::core::path::{PathData, Vertex};

/// Divisor applied to the horizontal gap between two vertices to get the
/// horizontal distance of each Bézier control point from its endpoint.
///
/// Fixed shape parameter: larger values give tighter corners, smaller values
/// a rounder curve.
pub const BEZIER_TANGENT_DIVISOR: f64 = 2.75;

#[must_use]
pub fn secant_slope(from: Vertex, to: Vertex) -> f64 {
    (to.y - from.y) / (to.x - from.x)
}

/// Tangent at an interior vertex from the secant slopes on either side.
///
/// `dx1`/`s1` describe the gap to the previous vertex, `dx2`/`s2` the gap to
/// the next one. The result is a weighted harmonic mean of `s1` and `s2`
/// with weights `w1 = 2*dx2 + dx1` and `w2 = dx2 + 2*dx1`; it is exactly
/// `0.0` when `s1 * s2 <= 0`.
#[must_use]
pub fn interior_slope(dx1: f64, s1: f64, dx2: f64, s2: f64) -> f64 {
    if s1 * s2 <= 0.0 {
        return 0.0;
    }
    let w1 = 2.0 * dx2 + dx1;
    let w2 = dx2 + 2.0 * dx1;
    (w1 + w2) / (w1 / s1 + w2 / s2)
}

/// Estimates one tangent slope per vertex.
///
/// Endpoints take the slope of their only secant. Fewer than two vertices
/// have no secant at all and get zero slopes.
#[must_use]
pub fn estimate_slopes(vertices: &[Vertex]) -> Vec<f64> {
    let len = vertices.len();
    if len < 2 {
        return vec![0.0; len];
    }

    let mut slopes = Vec::with_capacity(len);
    slopes.push(secant_slope(vertices[0], vertices[1]));
    for window in vertices.windows(3) {
        let (prev, curr, next) = (window[0], window[1], window[2]);
        slopes.push(interior_slope(
            curr.x - prev.x,
            secant_slope(prev, curr),
            next.x - curr.x,
            secant_slope(curr, next),
        ));
    }
    slopes.push(secant_slope(vertices[len - 2], vertices[len - 1]));
    slopes
}

/// Builds the smoothed curve through `vertices`.
///
/// Returns an empty path for fewer than two vertices.
#[must_use]
pub fn monotone_path(vertices: &[Vertex]) -> PathData {
    let mut path = PathData::new();
    if vertices.len() < 2 {
        return path;
    }

    let slopes = estimate_slopes(vertices);
    path.move_to(vertices[0]);
    for (index, pair) in vertices.windows(2).enumerate() {
        let (curr, next) = (pair[0], pair[1]);
        let dx = (next.x - curr.x) / BEZIER_TANGENT_DIVISOR;
        path.cubic_to(
            Vertex::new(curr.x + dx, curr.y + slopes[index] * dx),
            Vertex::new(next.x - dx, next.y - slopes[index + 1] * dx),
            next,
        );
    }
    path
}
