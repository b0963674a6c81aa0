//! Plane-shape geometry, the quadrilateral family, and a small quiz session.
//!
//! Layout
//! - `shapes`: parameters → outline (vertices or circle samples), validation, measurements.
//! - `family`: containment hierarchy of quadrilaterals and outline classification.
//! - `quiz`: question bank and the per-session score state machine.
//!
//! Everything here is pure or owns its state explicitly; a hosting shell
//! (see `crates/cli`) drives it one user event at a time.

pub mod api;
pub mod family;
pub mod quiz;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// A point in the drawing plane.
pub type Point2 = Vec2<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::family::{classify, Quad};
    pub use crate::quiz::{
        Answer, QuestionId, QuestionState, QuizQuestion, QuizSession, ShapeName,
        SubmissionResult,
    };
    pub use crate::shapes::{
        compute_outline, compute_outline_with, validate, OutlineCfg, ShapeError, ShapeKind,
        ShapeOutline, ShapeParameters,
    };
    pub use crate::Point2;
}

/// Signed area of the parallelogram spanned by vectors `a` and `b`.
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Point2, b: Point2) -> f64 {
    a.x * b.y - a.y * b.x
}
