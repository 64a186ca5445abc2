//! Grade Exam use case
//!
//! Checks an answer sheet against a presented exam. Answers are display
//! positions, so grading must use the same presentation the learner saw.

use mock_exam_domain::{AnswerSheet, DomainError, ExamResult, PresentedExam, grade};
use thiserror::Error;
use tracing::info;

/// Errors that can occur during grading
#[derive(Error, Debug)]
pub enum GradeExamError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Use case for grading an answer sheet
#[derive(Debug, Clone, Default)]
pub struct GradeExamUseCase {
    pass_percent: Option<f64>,
}

impl GradeExamUseCase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log pass/fail against this threshold after grading
    pub fn with_pass_percent(mut self, pass_percent: f64) -> Self {
        self.pass_percent = Some(pass_percent);
        self
    }

    pub fn execute(
        &self,
        exam: &PresentedExam,
        answers: &AnswerSheet,
    ) -> Result<ExamResult, GradeExamError> {
        let result = grade(exam, answers)?;
        info!(
            exam = %result.exam_id,
            correct = result.correct_count(),
            total = result.total(),
            "exam graded"
        );
        if let Some(threshold) = self.pass_percent {
            info!(passed = result.passed(threshold), threshold, "pass check");
        }
        Ok(result)
    }
}
