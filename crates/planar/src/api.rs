//! Curated surface for the hosting shell.
//!
//! The shell only needs three things from the core: turn parameters into an
//! outline, look up the quadrilateral family, and keep a quiz session.

pub use crate::family::{classify, Quad};
pub use crate::quiz::bank::{
    display_params, draw_naming_shape, naming_question, ox_questions, NAMING_QUESTION_ID,
};
pub use crate::quiz::{Answer, QuestionId, QuizQuestion, QuizSession, ShapeName, SubmissionResult};
pub use crate::shapes::{
    compute_outline, compute_outline_with, rhombus_tilt_deg, validate, OutlineCfg, ShapeError,
    ShapeKind, ShapeOutline, ShapeParameters,
};
