//! Grading of answer sheets against a presented exam

use crate::core::error::DomainError;
use crate::exam::presented::PresentedExam;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Answers keyed by question id, as display positions.
pub type AnswerSheet = HashMap<String, usize>;

/// How a single question was answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Correct,
    Incorrect,
    Unanswered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOutcome {
    pub question_id: String,
    pub selected: Option<usize>,
    pub correct_answer: usize,
    pub outcome: Outcome,
}

/// Result of grading an exam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamResult {
    pub exam_id: String,
    pub outcomes: Vec<QuestionOutcome>,
}

impl ExamResult {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn correct_count(&self) -> usize {
        self.count(Outcome::Correct)
    }

    pub fn incorrect_count(&self) -> usize {
        self.count(Outcome::Incorrect)
    }

    pub fn unanswered_count(&self) -> usize {
        self.count(Outcome::Unanswered)
    }

    /// Percentage of correct answers over all questions (0 for an empty exam)
    pub fn score_percent(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        self.correct_count() as f64 * 100.0 / self.total() as f64
    }

    pub fn passed(&self, pass_percent: f64) -> bool {
        self.score_percent() >= pass_percent
    }

    fn count(&self, outcome: Outcome) -> usize {
        self.outcomes.iter().filter(|o| o.outcome == outcome).count()
    }
}

/// Grade `answers` against `exam`.
///
/// Questions missing from the sheet are [`Outcome::Unanswered`]. Answers for
/// ids not in the exam and out-of-range selections are errors.
pub fn grade(exam: &PresentedExam, answers: &AnswerSheet) -> Result<ExamResult, DomainError> {
    if let Some(unknown) = answers.keys().find(|id| exam.question(id).is_none()) {
        return Err(DomainError::UnknownQuestion(unknown.clone()));
    }

    let outcomes = exam
        .questions
        .iter()
        .map(|question| -> Result<QuestionOutcome, DomainError> {
            let selected = answers.get(&question.id).copied();
            let outcome = match selected {
                None => Outcome::Unanswered,
                Some(choice) if question.is_correct(choice)? => Outcome::Correct,
                Some(_) => Outcome::Incorrect,
            };
            Ok(QuestionOutcome {
                question_id: question.id.clone(),
                selected,
                correct_answer: question.answer,
                outcome,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ExamResult {
        exam_id: exam.id.clone(),
        outcomes,
    })
}
