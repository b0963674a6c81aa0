//! Question and answer types.

use std::fmt;

use crate::shapes::ShapeKind;

/// Stable identifier of a question within a session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(pub String);

impl QuestionId {
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The names a learner picks from in the naming quiz. Every quadrilateral
/// kind is answered as `Quadrilateral`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeName {
    Triangle,
    Quadrilateral,
    Circle,
}

impl ShapeName {
    pub const ALL: [ShapeName; 3] = [
        ShapeName::Triangle,
        ShapeName::Quadrilateral,
        ShapeName::Circle,
    ];

    pub fn of(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Triangle => ShapeName::Triangle,
            ShapeKind::Rectangle | ShapeKind::Parallelogram | ShapeKind::Rhombus => {
                ShapeName::Quadrilateral
            }
            ShapeKind::Circle => ShapeName::Circle,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeName::Triangle => "triangle",
            ShapeName::Quadrilateral => "quadrilateral",
            ShapeName::Circle => "circle",
        }
    }

    /// Parse a learner's typed answer; case and surrounding space are ignored.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase();
        ShapeName::ALL.into_iter().find(|n| n.as_str() == s)
    }
}

impl fmt::Display for ShapeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A learner's answer, or the expected one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    /// OX quiz: `true` is O, `false` is X.
    Truth(bool),
    /// Naming quiz.
    Name(ShapeName),
}

impl Answer {
    /// Parse `O`/`X` into `Truth`, anything else as a shape name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "O" | "o" => Some(Answer::Truth(true)),
            "X" | "x" => Some(Answer::Truth(false)),
            other => ShapeName::parse(other).map(Answer::Name),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Truth(true) => f.write_str("O"),
            Answer::Truth(false) => f.write_str("X"),
            Answer::Name(n) => write!(f, "{n}"),
        }
    }
}

/// One quiz question with its expected answer and a hint shown as feedback.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizQuestion {
    pub id: QuestionId,
    pub prompt: String,
    pub correct: Answer,
    pub hint: String,
}

impl QuizQuestion {
    #[inline]
    pub fn is_correct(&self, given: &Answer) -> bool {
        *given == self.correct
    }
}
