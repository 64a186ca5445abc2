//! Question bank port
//!
//! Defines where exams come from.

use async_trait::async_trait;
use mock_exam_domain::Exam;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reading the question bank
#[derive(Error, Debug)]
pub enum QuestionBankError {
    #[error("Exam not found: {0}")]
    NotFound(String),

    #[error("I/O error reading {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

/// Short description of an exam available in the bank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamSummary {
    pub id: String,
    pub title: String,
    pub question_count: usize,
}

impl From<&Exam> for ExamSummary {
    fn from(exam: &Exam) -> Self {
        Self {
            id: exam.id.clone(),
            title: exam.title.clone(),
            question_count: exam.questions.len(),
        }
    }
}

/// Source of exams
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait QuestionBankPort: Send + Sync {
    /// List the exams available in the bank, sorted by id
    async fn list_exams(&self) -> Result<Vec<ExamSummary>, QuestionBankError>;

    /// Load a single exam by id
    async fn load_exam(&self, exam_id: &str) -> Result<Exam, QuestionBankError>;
}
