use super::cfg::{DIR_EPS, LEN_EPS};
use super::Quad;
use crate::shapes::ShapeOutline;
use crate::{parallelogram_area, Point2};

#[inline]
fn parallel(u: Point2, v: Point2) -> bool {
    parallelogram_area(u, v).abs() <= DIR_EPS * u.norm() * v.norm()
}

#[inline]
fn perpendicular(u: Point2, v: Point2) -> bool {
    u.dot(&v).abs() <= DIR_EPS * u.norm() * v.norm()
}

#[inline]
fn same_length(u: Point2, v: Point2) -> bool {
    let (a, b) = (u.norm(), v.norm());
    (a - b).abs() <= LEN_EPS * a.max(b)
}

/// Most specific family node of a four-vertex outline.
///
/// Returns `None` for outlines that are not four vertices, contain a
/// zero-length side, or have no pair of parallel opposite sides.
pub fn classify(outline: &ShapeOutline) -> Option<Quad> {
    let p = &outline.points;
    if p.len() != 4 {
        return None;
    }
    let e: [Point2; 4] = std::array::from_fn(|k| p[(k + 1) % 4] - p[k]);
    if e.iter().any(|v| v.norm() == 0.0) {
        return None;
    }
    let pairs = (parallel(e[0], e[2]), parallel(e[1], e[3]));
    let quad = match pairs {
        (false, false) => return None,
        (true, false) | (false, true) => Quad::Trapezoid,
        (true, true) => {
            // In a parallelogram one right angle forces all four, and two
            // adjacent equal sides force all four.
            match (perpendicular(e[0], e[1]), same_length(e[0], e[1])) {
                (true, true) => Quad::Square,
                (true, false) => Quad::Rectangle,
                (false, true) => Quad::Rhombus,
                (false, false) => Quad::Parallelogram,
            }
        }
    };
    Some(quad)
}
