//! Plane shapes: parameters → outline.
//!
//! Purpose
//! - Turn the scalar parameters a learner moves on sliders into an ordered
//!   point sequence a plotting layer can draw.
//! - Reject parameter combinations that cannot form the shape, with a typed,
//!   recoverable error instead of coordinates.
//!
//! Conventions
//! - Angles are degrees at the boundary and radians inside.
//! - Polygons start at the origin with their base on the +x axis and run
//!   counterclockwise; circles are centered at the origin.
//!
//! Code cross-refs: `ShapeParameters`, `ShapeOutline`, `compute_outline`, `validate`.

mod measure;
mod outline;
mod types;
mod validate;

pub use measure::interior_angle_deg;
pub use outline::{compute_outline, compute_outline_with, rhombus_tilt_deg};
pub use types::{
    OutlineCfg, ShapeKind, ShapeOutline, ShapeParameters, DEFAULT_CIRCLE_SAMPLES,
    MAX_CIRCLE_SAMPLES,
};
pub use validate::{validate, ShapeError};
