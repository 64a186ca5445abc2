//! Exam presentation parameters.
//!
//! [`ExamParams`] groups the static parameters that control how
//! [`PresentExamUseCase`](crate::use_cases::present_exam::PresentExamUseCase)
//! prepares an exam. These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamParams {
    /// Reorder answer choices per question (image questions are never reordered).
    pub shuffle_choices: bool,
    /// Present only the first N questions.
    pub question_limit: Option<usize>,
}

impl Default for ExamParams {
    fn default() -> Self {
        Self {
            shuffle_choices: true,
            question_limit: None,
        }
    }
}

impl ExamParams {
    // ==================== Builder Methods ====================

    pub fn with_shuffle_choices(mut self, enabled: bool) -> Self {
        self.shuffle_choices = enabled;
        self
    }

    pub fn with_question_limit(mut self, limit: Option<usize>) -> Self {
        self.question_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shuffles_everything() {
        let params = ExamParams::default();
        assert!(params.shuffle_choices);
        assert!(params.question_limit.is_none());
    }

    #[test]
    fn test_builder() {
        let params = ExamParams::default()
            .with_shuffle_choices(false)
            .with_question_limit(Some(20));
        assert!(!params.shuffle_choices);
        assert_eq!(params.question_limit, Some(20));
    }
}
