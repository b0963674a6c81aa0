//! Scripted learner session: draw a few shapes, walk the family, answer the quiz.
//!
//! Run with `cargo run -p planar --example quiz_walkthrough`.

use planar::api::*;

fn main() {
    for params in [
        ShapeParameters::triangle(4.0, 50.0, 60.0),
        ShapeParameters::triangle(4.0, 120.0, 70.0),
        ShapeParameters::Rhombus {
            side_length: 4.0,
            height: 2.5,
        },
    ] {
        match compute_outline(&params) {
            Ok(out) => {
                let sides: Vec<String> = out.side_lengths().iter().map(|s| format!("{s:.2}")).collect();
                println!("{} sides=[{}] area={:.2}", out.kind, sides.join(", "), out.area());
            }
            Err(err) => println!("warning: {err}"),
        }
    }

    for q in Quad::ALL {
        println!("{q}: {}", q.explanation());
    }

    let mut session = QuizSession::new();
    let shown = draw_naming_shape(2024);
    let naming = naming_question(shown);
    session.answer(&naming, &Answer::Name(shown));
    // a second click on the same button is ignored
    session.answer(&naming, &Answer::Name(ShapeName::Triangle));
    for q in ox_questions() {
        session.answer(&q, &Answer::Truth(true));
    }
    let (score, total) = session.current_score();
    println!("score: {score} / {total}");
}
