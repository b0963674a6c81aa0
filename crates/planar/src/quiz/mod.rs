//! Quiz questions and the per-session score state.
//!
//! Purpose
//! - Keep a running `score / total` across questions submitted independently
//!   and in any order, counting each question at most once per session.
//! - Provide the naming quiz and the OX (true/false) quiz as data.
//!
//! State machine (per question id)
//! - `Unanswered → Answered` fires on the first submission and is permanent
//!   until `QuizSession::reset`. Later submissions are no-ops, not errors.
//!
//! Code cross-refs: `QuizSession`, `SubmissionResult`, `bank::ox_questions`.

pub mod bank;
mod session;
mod types;

pub use session::{QuestionState, QuizSession, SubmissionResult};
pub use types::{Answer, QuestionId, QuizQuestion, ShapeName};

#[cfg(test)]
mod tests;
