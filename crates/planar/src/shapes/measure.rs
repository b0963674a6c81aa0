//! Lengths, angles, and areas of outlines.

use super::types::{ShapeKind, ShapeOutline};
use crate::{parallelogram_area, Point2};

/// Interior angle at `vertex` between the rays towards `prev` and `next`, in degrees.
pub fn interior_angle_deg(prev: Point2, vertex: Point2, next: Point2) -> f64 {
    let u = prev - vertex;
    let v = next - vertex;
    let cross = parallelogram_area(u, v);
    cross.abs().atan2(u.dot(&v)).to_degrees()
}

impl ShapeOutline {
    /// Edge lengths `|p0 p1|, |p1 p2|, …, |p_{n-1} p0|`.
    ///
    /// For a triangle this is `AB, BC, CA`. Circles report their sample chords
    /// without the duplicated closing sample.
    pub fn side_lengths(&self) -> Vec<f64> {
        let pts = self.ring();
        let n = pts.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n).map(|k| (pts[(k + 1) % n] - pts[k]).norm()).collect()
    }

    /// Sum of `side_lengths`.
    pub fn perimeter(&self) -> f64 {
        self.side_lengths().iter().sum()
    }

    /// Enclosed area (shoelace formula, unsigned).
    pub fn area(&self) -> f64 {
        let pts = self.ring();
        let n = pts.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|k| parallelogram_area(pts[k], pts[(k + 1) % n]))
            .sum();
        0.5 * twice.abs()
    }

    /// Interior angles in vertex order, degrees.
    pub fn interior_angles_deg(&self) -> Vec<f64> {
        let pts = self.ring();
        let n = pts.len();
        if n < 3 {
            return Vec::new();
        }
        (0..n)
            .map(|k| interior_angle_deg(pts[(k + n - 1) % n], pts[k], pts[(k + 1) % n]))
            .collect()
    }

    /// Vertices without a repeated closing point.
    fn ring(&self) -> &[Point2] {
        match (self.kind, self.points.len()) {
            (ShapeKind::Circle, n) if n > 1 => &self.points[..n - 1],
            _ => &self.points,
        }
    }
}
