//! Application layer for mock-exam
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExamParams;
pub use ports::question_bank::{ExamSummary, QuestionBankError, QuestionBankPort};
pub use use_cases::grade_exam::{GradeExamError, GradeExamUseCase};
pub use use_cases::present_exam::{PresentExamError, PresentExamInput, PresentExamUseCase};
