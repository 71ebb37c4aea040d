//! # cephalo-geometry
//!
//! **Tier 0 (Pure Math)**
//!
//! Deterministic plane-geometry helpers used by every measurement family.
//! Coordinates live in the radiograph's screen-pixel space (y grows downward).
//!
//! Degenerate input (zero-length rays, coincident line points, near-parallel
//! lines, zero spread) yields `None` instead of a division by zero.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Determinant magnitude below which two lines are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-8;

/// A point on the digitized radiograph.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn sub(self, other: Point) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

fn dot(a: (f64, f64), b: (f64, f64)) -> f64 {
    a.0 * b.0 + a.1 * b.1
}

fn cross(a: (f64, f64), b: (f64, f64)) -> f64 {
    a.0 * b.1 - a.1 * b.0
}

fn norm(v: (f64, f64)) -> f64 {
    v.0.hypot(v.1)
}

/// Angle in degrees between two direction vectors, `None` if either is null.
fn vector_angle(u: (f64, f64), v: (f64, f64)) -> Option<f64> {
    let nu = norm(u);
    let nv = norm(v);
    if nu == 0.0 || nv == 0.0 {
        return None;
    }
    let cos = (dot(u, v) / (nu * nv)).clamp(-1.0, 1.0);
    finite(cos.acos().to_degrees())
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    norm(b.sub(a))
}

/// Angle at `vertex` between the rays `vertex→p1` and `vertex→p2`, in `[0, 180]`.
#[must_use]
pub fn angle_between(vertex: Point, p1: Point, p2: Point) -> Option<f64> {
    vector_angle(p1.sub(vertex), p2.sub(vertex))
}

/// Angle between the directions `a1→a2` and `b1→b2`, in `[0, 180]`.
///
/// The segments need not share a vertex; only their directions matter.
#[must_use]
pub fn angle_between_lines(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<f64> {
    vector_angle(a2.sub(a1), b2.sub(b1))
}

/// Like [`angle_between_lines`] but folded into `[0, 90]`.
///
/// Axis-to-plane angles are reported as the acute angle.
#[must_use]
pub fn acute_angle_between_lines(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<f64> {
    angle_between_lines(a1, a2, b1, b2).map(|angle| if angle > 90.0 { 180.0 - angle } else { angle })
}

/// Signed perpendicular distance from `p` to the line through `a` and `b`.
///
/// The sign follows the 2-D cross product `(b − a) × (p − a)`: swapping `a`
/// and `b` flips it. Returns `None` when `a == b`.
#[must_use]
pub fn point_line_distance_signed(p: Point, a: Point, b: Point) -> Option<f64> {
    let dir = b.sub(a);
    let len = norm(dir);
    if len == 0.0 {
        return None;
    }
    finite(cross(dir, p.sub(a)) / len)
}

/// Orthogonal projection of `p` onto the line through `a` and `b` (`a` if `a == b`).
#[must_use]
pub fn project_point_onto_line(p: Point, a: Point, b: Point) -> Point {
    let dir = b.sub(a);
    let len_sq = dot(dir, dir);
    if len_sq == 0.0 {
        return a;
    }
    let t = dot(p.sub(a), dir) / len_sq;
    Point::new(a.x + t * dir.0, a.y + t * dir.1)
}

/// Intersection of the infinite lines `a1–a2` and `b1–b2`.
///
/// Returns `None` when the lines are parallel within [`PARALLEL_EPSILON`].
#[must_use]
pub fn intersect_lines(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Point> {
    let d1 = a2.sub(a1);
    let d2 = b2.sub(b1);
    let det = cross(d1, d2);
    if det.abs() < PARALLEL_EPSILON {
        return None;
    }
    let t = cross(b1.sub(a1), d2) / det;
    let x = a1.x + t * d1.0;
    let y = a1.y + t * d1.1;
    (x.is_finite() && y.is_finite()).then_some(Point::new(x, y))
}

/// Standard score `(value − mean) / sd`.
///
/// `None` when any input is non-finite or `sd <= 0`.
#[must_use]
pub fn z_score(value: f64, mean: f64, sd: f64) -> Option<f64> {
    if !value.is_finite() || !mean.is_finite() || !sd.is_finite() || sd <= 0.0 {
        return None;
    }
    Some((value - mean) / sd)
}
