//! Built-in questions: one naming question and three OX questions.
//!
//! The naming question shows a fixed sample of the chosen shape; which shape
//! is shown is drawn from a seed so a session can be replayed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Answer, QuestionId, QuizQuestion, ShapeName};
use crate::shapes::ShapeParameters;

pub const NAMING_QUESTION_ID: &str = "name";

/// Parameters used to draw `shape` in the naming quiz.
pub fn display_params(shape: ShapeName) -> ShapeParameters {
    match shape {
        ShapeName::Triangle => ShapeParameters::triangle(4.0, 50.0, 60.0),
        ShapeName::Quadrilateral => ShapeParameters::Rectangle {
            width: 3.5,
            height: 2.0,
        },
        ShapeName::Circle => ShapeParameters::circle(2.0),
    }
}

/// Pick the shape shown in the naming quiz. Same seed, same shape.
pub fn draw_naming_shape(seed: u64) -> ShapeName {
    let mut rng = StdRng::seed_from_u64(seed);
    ShapeName::ALL[rng.gen_range(0..ShapeName::ALL.len())]
}

/// "What is this shape called?" for a drawing of `shape`.
pub fn naming_question(shape: ShapeName) -> QuizQuestion {
    let hint = match shape {
        ShapeName::Circle => "A circle has no corners at all. Count the corners!",
        _ => "Count the corners!",
    };
    QuizQuestion {
        id: QuestionId::from(NAMING_QUESTION_ID),
        prompt: "What is the name of this shape?".to_string(),
        correct: Answer::Name(shape),
        hint: format!("The answer is '{shape}'. {hint}"),
    }
}

/// The OX questions about quadrilateral properties, in display order.
pub fn ox_questions() -> Vec<QuizQuestion> {
    [
        (
            "A square is always a rectangle.",
            true,
            "All four angles of a square are right angles, so it is a rectangle.",
        ),
        (
            "Every parallelogram is a trapezoid.",
            true,
            "A trapezoid only needs one pair of parallel sides, so a parallelogram is a kind of trapezoid.",
        ),
        (
            "Every rhombus is a rectangle.",
            false,
            "A rhombus has four equal sides, but its angles do not have to be right angles.",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (prompt, truth, hint))| QuizQuestion {
        id: QuestionId::new(format!("ox{}", i + 1)),
        prompt: prompt.to_string(),
        correct: Answer::Truth(truth),
        hint: hint.to_string(),
    })
    .collect()
}
