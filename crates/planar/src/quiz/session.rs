use std::collections::HashMap;

use super::types::{Answer, QuestionId, QuizQuestion};

/// Where a question stands within the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionState {
    Unanswered,
    Answered,
}

/// Outcome of a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionResult {
    /// First submission for the question: counted, with the new totals.
    Accepted {
        correct: bool,
        score: u32,
        total: u32,
    },
    /// The question was already answered; nothing changed.
    AlreadyAnswered,
}

impl SubmissionResult {
    #[inline]
    pub fn accepted(&self) -> bool {
        matches!(self, SubmissionResult::Accepted { .. })
    }
}

/// Score state of one learner session.
///
/// Invariants:
/// - `score <= total`, and `total` equals the number of answered questions.
/// - Neither counter decreases except through `reset`.
#[derive(Clone, Debug, Default)]
pub struct QuizSession {
    score: u32,
    total: u32,
    answered: HashMap<QuestionId, bool>,
}

impl QuizSession {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the first submission for `id`; ignore later ones.
    pub fn submit_answer(&mut self, id: &QuestionId, is_correct: bool) -> SubmissionResult {
        if self.is_answered(id) {
            tracing::debug!(question = %id, "already answered; ignoring submission");
            return SubmissionResult::AlreadyAnswered;
        }
        self.answered.insert(id.clone(), true);
        self.total += 1;
        if is_correct {
            self.score += 1;
        }
        tracing::debug!(
            question = %id,
            correct = is_correct,
            score = self.score,
            total = self.total,
            "answer counted"
        );
        SubmissionResult::Accepted {
            correct: is_correct,
            score: self.score,
            total: self.total,
        }
    }

    /// Grade `given` against `question`, then submit.
    pub fn answer(&mut self, question: &QuizQuestion, given: &Answer) -> SubmissionResult {
        let correct = question.is_correct(given);
        self.submit_answer(&question.id, correct)
    }

    /// `(score, total)` snapshot.
    #[inline]
    pub fn current_score(&self) -> (u32, u32) {
        (self.score, self.total)
    }

    #[inline]
    pub fn is_answered(&self, id: &QuestionId) -> bool {
        self.answered.get(id).copied().unwrap_or(false)
    }

    pub fn question_state(&self, id: &QuestionId) -> QuestionState {
        if self.is_answered(id) {
            QuestionState::Answered
        } else {
            QuestionState::Unanswered
        }
    }

    /// Start over: no answered questions, `0 / 0`.
    pub fn reset(&mut self) {
        tracing::debug!(score = self.score, total = self.total, "session reset");
        self.answered.clear();
        self.score = 0;
        self.total = 0;
    }
}
