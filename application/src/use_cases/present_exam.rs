//! Present Exam use case
//!
//! Loads an exam from the question bank and prepares it for display:
//! validation, optional truncation, and seeded choice shuffling.

use crate::config::ExamParams;
use crate::ports::question_bank::{QuestionBankError, QuestionBankPort};
use mock_exam_domain::{DomainError, PresentedExam};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while presenting an exam
#[derive(Error, Debug)]
pub enum PresentExamError {
    #[error("Question bank error: {0}")]
    QuestionBank(#[from] QuestionBankError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Input for the [`PresentExamUseCase`]
#[derive(Debug, Clone)]
pub struct PresentExamInput {
    pub exam_id: String,
    pub params: ExamParams,
}

impl PresentExamInput {
    pub fn new(exam_id: impl Into<String>, params: ExamParams) -> Self {
        Self {
            exam_id: exam_id.into(),
            params,
        }
    }
}

/// Use case for presenting an exam
pub struct PresentExamUseCase {
    bank: Arc<dyn QuestionBankPort>,
}

impl PresentExamUseCase {
    pub fn new(bank: Arc<dyn QuestionBankPort>) -> Self {
        Self { bank }
    }

    pub async fn execute(
        &self,
        input: PresentExamInput,
    ) -> Result<PresentedExam, PresentExamError> {
        info!("Presenting exam {}", input.exam_id);

        let exam = self.bank.load_exam(&input.exam_id).await?;
        exam.validate()?;

        let presented = exam.present(input.params.shuffle_choices, input.params.question_limit)?;

        debug!(
            exam = %presented.id,
            questions = presented.len(),
            shuffled = presented.questions.iter().filter(|q| q.shuffled).count(),
            "exam presented"
        );
        Ok(presented)
    }
}
