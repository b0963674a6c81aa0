//! Line-based quiz over any reader/writer pair (stdin/stdout in `main`).

use anyhow::Result;
use std::io::{BufRead, Write};

use planar::api::{
    compute_outline, display_params, draw_naming_shape, naming_question, ox_questions, Answer,
    QuizQuestion, QuizSession, SubmissionResult,
};

/// Shown points of a drawing before eliding the rest.
const MAX_SHOWN_POINTS: usize = 8;

/// Run the naming question and the OX questions, then print the score.
///
/// Stops early (keeping what was counted) when the input ends.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    session: &mut QuizSession,
    seed: u64,
) -> Result<()> {
    let shown = draw_naming_shape(seed);
    tracing::info!(seed, shape = %shown, "quiz start");

    writeln!(out, "Question 1: naming")?;
    let drawing = compute_outline(&display_params(shown))?;
    let pts: Vec<String> = drawing
        .closed()
        .iter()
        .take(MAX_SHOWN_POINTS)
        .map(|p| format!("({:.2}, {:.2})", p.x, p.y))
        .collect();
    let more = drawing.closed().len().saturating_sub(MAX_SHOWN_POINTS);
    if more > 0 {
        writeln!(out, "  drawing: {} … and {more} more points", pts.join(" "))?;
    } else {
        writeln!(out, "  drawing: {}", pts.join(" "))?;
    }
    let naming = naming_question(shown);
    if !ask(input, out, session, &naming, "triangle / quadrilateral / circle")? {
        return finish(out, session);
    }

    writeln!(out, "Question 2: OX quiz")?;
    for (i, q) in ox_questions().iter().enumerate() {
        writeln!(out, "Q{}. {}", i + 1, q.prompt)?;
        if !ask(input, out, session, q, "O / X")? {
            break;
        }
    }
    finish(out, session)
}

/// Prompt until a parseable answer of the right type arrives, then submit it.
/// Returns `false` on end of input.
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    session: &mut QuizSession,
    question: &QuizQuestion,
    choices: &str,
) -> Result<bool> {
    loop {
        writeln!(out, "{} [{choices}]", question.prompt)?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        let given = match Answer::parse(&line) {
            Some(a) if same_type(&a, &question.correct) => a,
            _ => {
                writeln!(out, "Please answer with one of: {choices}")?;
                continue;
            }
        };
        match session.answer(question, &given) {
            SubmissionResult::Accepted { correct: true, .. } => {
                writeln!(out, "Well done! That's right 🎉")?;
                writeln!(out, "  {}", question.hint)?;
            }
            SubmissionResult::Accepted { correct: false, .. } => {
                writeln!(out, "Not quite 😢 Hint: {}", question.hint)?;
            }
            SubmissionResult::AlreadyAnswered => {
                writeln!(out, "Already submitted. On to the next one! 🌟")?;
            }
        }
        return Ok(true);
    }
}

fn same_type(a: &Answer, b: &Answer) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}

fn finish<W: Write>(out: &mut W, session: &QuizSession) -> Result<()> {
    let (score, total) = session.current_score();
    tracing::info!(score, total, "quiz end");
    writeln!(out, "Current score: {score} / {total}")?;
    Ok(())
}
