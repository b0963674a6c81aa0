//! The quadrilateral family: which quadrilaterals are special cases of which.
//!
//! Hierarchy (child → parent)
//! - Parallelogram → Trapezoid
//! - Rectangle → Parallelogram, Rhombus → Parallelogram
//! - Square → Rectangle and Rhombus
//!
//! `classify` places a four-vertex outline at the most specific node it
//! satisfies, which lets a shell label what the learner actually drew.

mod cfg;
mod classify;

pub use classify::classify;

use std::fmt;

use crate::shapes::ShapeKind;

/// A node in the quadrilateral family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quad {
    Trapezoid,
    Parallelogram,
    Rectangle,
    Rhombus,
    Square,
}

impl Quad {
    /// Top to bottom, in diagram order.
    pub const ALL: [Quad; 5] = [
        Quad::Trapezoid,
        Quad::Parallelogram,
        Quad::Rectangle,
        Quad::Rhombus,
        Quad::Square,
    ];

    /// The node a drawable quadrilateral kind belongs to; `None` for
    /// triangles and circles.
    pub fn of(kind: ShapeKind) -> Option<Quad> {
        match kind {
            ShapeKind::Rectangle => Some(Quad::Rectangle),
            ShapeKind::Parallelogram => Some(Quad::Parallelogram),
            ShapeKind::Rhombus => Some(Quad::Rhombus),
            ShapeKind::Triangle | ShapeKind::Circle => None,
        }
    }

    /// Direct generalizations.
    pub fn parents(self) -> &'static [Quad] {
        match self {
            Quad::Trapezoid => &[],
            Quad::Parallelogram => &[Quad::Trapezoid],
            Quad::Rectangle | Quad::Rhombus => &[Quad::Parallelogram],
            Quad::Square => &[Quad::Rectangle, Quad::Rhombus],
        }
    }

    /// `self` is a special case of `other` (every node is one of itself).
    pub fn is_a(self, other: Quad) -> bool {
        self == other || self.parents().iter().any(|p| p.is_a(other))
    }

    /// All nodes `self` is a special case of, excluding itself, top first.
    pub fn ancestors(self) -> Vec<Quad> {
        Quad::ALL
            .into_iter()
            .filter(|q| *q != self && self.is_a(*q))
            .collect()
    }

    /// Parent → child links of the diagram.
    pub fn edges() -> Vec<(Quad, Quad)> {
        Quad::ALL
            .into_iter()
            .flat_map(|child| child.parents().iter().map(move |p| (*p, child)))
            .collect()
    }

    /// Node center in the family diagram.
    pub fn diagram_position(self) -> (f64, f64) {
        match self {
            Quad::Trapezoid => (0.0, 2.0),
            Quad::Parallelogram => (0.0, 1.0),
            Quad::Rectangle => (-1.0, 0.0),
            Quad::Rhombus => (1.0, 0.0),
            Quad::Square => (0.0, -1.0),
        }
    }

    pub fn explanation(self) -> &'static str {
        match self {
            Quad::Trapezoid => {
                "A trapezoid has at least one pair of parallel opposite sides. \
                 Every parallelogram is also a trapezoid."
            }
            Quad::Parallelogram => {
                "A parallelogram has both pairs of opposite sides parallel, \
                 which makes it a more regular shape."
            }
            Quad::Rectangle => "A rectangle is a parallelogram whose four angles are all 90°.",
            Quad::Rhombus => "A rhombus is a parallelogram whose four sides are all equal.",
            Quad::Square => {
                "A square has four equal sides and four right angles, \
                 so it is both a rectangle and a rhombus!"
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Quad::Trapezoid => "trapezoid",
            Quad::Parallelogram => "parallelogram",
            Quad::Rectangle => "rectangle",
            Quad::Rhombus => "rhombus",
            Quad::Square => "square",
        }
    }

    pub fn parse(s: &str) -> Option<Quad> {
        let s = s.trim().to_ascii_lowercase();
        Quad::ALL.into_iter().find(|q| q.as_str() == s)
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
