//! Shape parameters, outlines, and tolerances.

use std::fmt;

use crate::Point2;

/// Circle sample count used when none is given.
pub const DEFAULT_CIRCLE_SAMPLES: usize = 80;
/// Upper bound on circle samples; the outline is materialized eagerly.
pub const MAX_CIRCLE_SAMPLES: usize = 100_000;

/// Outline configuration (tolerances and sampling).
#[derive(Clone, Copy, Debug)]
pub struct OutlineCfg {
    /// Below this `|tan(tilt)|` a parallelogram is drawn without shear.
    pub eps_tan: f64,
    /// Sample count for `ShapeParameters::circle`.
    pub circle_samples: usize,
}

impl Default for OutlineCfg {
    fn default() -> Self {
        Self {
            eps_tan: 1e-6,
            circle_samples: DEFAULT_CIRCLE_SAMPLES,
        }
    }
}

/// The fixed set of shape kinds the engine can draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Triangle,
    Rectangle,
    Parallelogram,
    Rhombus,
    Circle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Triangle,
        ShapeKind::Rectangle,
        ShapeKind::Parallelogram,
        ShapeKind::Rhombus,
        ShapeKind::Circle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Triangle => "triangle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Parallelogram => "parallelogram",
            ShapeKind::Rhombus => "rhombus",
            ShapeKind::Circle => "circle",
        }
    }

    /// Learner-facing remark shown next to the drawing.
    pub fn note(self) -> &'static str {
        match self {
            ShapeKind::Triangle => {
                "Compare the side lengths to spot special triangles: \
                 two equal sides make an isosceles triangle, three an equilateral one."
            }
            ShapeKind::Rectangle => "All four angles of a rectangle are right angles.",
            ShapeKind::Parallelogram => {
                "Opposite sides of a parallelogram are parallel. \
                 Set the tilt to 0 and it becomes a rectangle."
            }
            ShapeKind::Rhombus => {
                "All four sides of a rhombus are equal and its diagonals cross at right angles. \
                 This drawing is only an approximate rhombus."
            }
            ShapeKind::Circle => {
                "Every point on a circle is one radius away from the center. \
                 The diameter is twice the radius."
            }
        }
    }

    #[inline]
    pub fn is_quadrilateral(self) -> bool {
        matches!(
            self,
            ShapeKind::Rectangle | ShapeKind::Parallelogram | ShapeKind::Rhombus
        )
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar parameters of one shape. Angles are in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeParameters {
    /// Base `AB` plus the angles at `A` and `B`.
    Triangle {
        base_length: f64,
        angle_a_deg: f64,
        angle_b_deg: f64,
    },
    Rectangle { width: f64, height: f64 },
    /// Base `width`, vertical `height`, and the angle between base and slanted side.
    Parallelogram { width: f64, height: f64, tilt_deg: f64 },
    /// Approximate rhombus; see `rhombus_tilt_deg`.
    Rhombus { side_length: f64, height: f64 },
    Circle { radius: f64, sample_count: usize },
}

impl ShapeParameters {
    #[inline]
    pub fn triangle(base_length: f64, angle_a_deg: f64, angle_b_deg: f64) -> Self {
        Self::Triangle {
            base_length,
            angle_a_deg,
            angle_b_deg,
        }
    }

    /// Circle with the default sample count.
    #[inline]
    pub fn circle(radius: f64) -> Self {
        Self::Circle {
            radius,
            sample_count: DEFAULT_CIRCLE_SAMPLES,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeParameters::Triangle { .. } => ShapeKind::Triangle,
            ShapeParameters::Rectangle { .. } => ShapeKind::Rectangle,
            ShapeParameters::Parallelogram { .. } => ShapeKind::Parallelogram,
            ShapeParameters::Rhombus { .. } => ShapeKind::Rhombus,
            ShapeParameters::Circle { .. } => ShapeKind::Circle,
        }
    }
}

/// Ordered boundary points in drawing order.
///
/// Invariants:
/// - Polygons hold their vertices once; the closing edge last→first is implicit.
/// - Circles hold samples over `[0, 2π]`, so the last sample repeats the first.
/// - A non-degenerate shape has at least 3 points.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeOutline {
    pub kind: ShapeKind,
    pub points: Vec<Point2>,
}

impl ShapeOutline {
    #[inline]
    pub fn new(kind: ShapeKind, points: Vec<Point2>) -> Self {
        Self { kind, points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point2> {
        self.points.iter()
    }

    /// Polyline with the first point repeated at the end, ready for a
    /// "lines" trace. Circles already close on themselves and are returned as is.
    pub fn closed(&self) -> Vec<Point2> {
        let mut pts = self.points.clone();
        if self.kind != ShapeKind::Circle {
            if let Some(first) = self.points.first() {
                pts.push(*first);
            }
        }
        pts
    }
}

impl<'a> IntoIterator for &'a ShapeOutline {
    type Item = &'a Point2;
    type IntoIter = std::slice::Iter<'a, Point2>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
