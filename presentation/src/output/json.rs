//! JSON output formatter

use crate::config::AssetConfig;
use crate::output::formatter::OutputFormatter;
use mock_exam_application::ExamSummary;
use mock_exam_domain::{ExamResult, PresentedExam};
use serde::Serialize;
use serde_json::json;

/// Formats exams and results as pretty-printed JSON
///
/// Image paths are rewritten to public URLs. The correct answer stays in the
/// output; JSON consumers decide what to show.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    assets: AssetConfig,
}

impl JsonFormatter {
    pub fn new(assets: AssetConfig) -> Self {
        Self { assets }
    }

    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_exam(&self, exam: &PresentedExam) -> String {
        let mut exam = exam.clone();
        for question in &mut exam.questions {
            question.choice_image = question.choice_image.as_deref().map(|p| self.assets.url(p));
            question.composite_image = question
                .composite_image
                .as_deref()
                .map(|p| self.assets.url(p));
        }
        Self::to_json(&exam)
    }

    fn format_result(&self, _exam: &PresentedExam, result: &ExamResult) -> String {
        Self::to_json(&json!({
            "exam_id": result.exam_id,
            "total": result.total(),
            "correct": result.correct_count(),
            "incorrect": result.incorrect_count(),
            "unanswered": result.unanswered_count(),
            "score_percent": result.score_percent(),
            "outcomes": result.outcomes,
        }))
    }

    fn format_exam_list(&self, exams: &[ExamSummary]) -> String {
        Self::to_json(&exams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_exam_domain::{AnswerSheet, Exam, Question, grade};
    use serde_json::Value;

    fn exam() -> PresentedExam {
        let choices = vec!["A".to_string(), "B".to_string(), "C".to_string(), "D".to_string()];
        Exam::new(
            "fe",
            "FE",
            vec![
                Question::new("Q1", "Pick C", choices.clone(), 2),
                Question::new("Q2", "Diagram", choices, 1).with_choice_image("/img/q2.png"),
            ],
        )
        .present(true, None)
        .unwrap()
    }

    #[test]
    fn test_format_exam_rewrites_image_urls() {
        let formatter = JsonFormatter::new(AssetConfig::new("/philnits-mock"));
        let value: Value = serde_json::from_str(&formatter.format_exam(&exam())).unwrap();
        assert_eq!(value["questions"][0]["choices"][0], "C");
        assert_eq!(value["questions"][0]["answer"], 0);
        assert_eq!(
            value["questions"][1]["choice_image"],
            "/philnits-mock/img/q2.png"
        );
    }

    #[test]
    fn test_format_result_totals() {
        let exam = exam();
        let answers: AnswerSheet = [("Q1".to_string(), 0)].into_iter().collect();
        let result = grade(&exam, &answers).unwrap();
        let value: Value =
            serde_json::from_str(&JsonFormatter::default().format_result(&exam, &result)).unwrap();
        assert_eq!(value["correct"], 1);
        assert_eq!(value["unanswered"], 1);
        assert_eq!(value["score_percent"], 50.0);
        assert_eq!(value["outcomes"][0]["outcome"], "correct");
    }

    #[test]
    fn test_format_exam_list() {
        let list = vec![ExamSummary {
            id: "fe".to_string(),
            title: "FE".to_string(),
            question_count: 2,
        }];
        let value: Value =
            serde_json::from_str(&JsonFormatter::default().format_exam_list(&list)).unwrap();
        assert_eq!(value[0]["question_count"], 2);
    }
}
