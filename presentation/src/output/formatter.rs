//! Output formatter trait

use mock_exam_application::ExamSummary;
use mock_exam_domain::{ExamResult, PresentedExam};

/// Trait for formatting exams and results
pub trait OutputFormatter {
    /// Format an exam ready to be answered
    fn format_exam(&self, exam: &PresentedExam) -> String;

    /// Format a graded answer sheet
    fn format_result(&self, exam: &PresentedExam, result: &ExamResult) -> String;

    /// Format the exams available in the question bank
    fn format_exam_list(&self, exams: &[ExamSummary]) -> String;
}
