//! Exam configuration from TOML (`[exam]` section)

use mock_exam_application::ExamParams;
use mock_exam_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Raw exam configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExamConfig {
    /// Directory holding `<exam-id>.toml` / `<exam-id>.json` files
    pub bank_dir: String,
    /// Shuffle answer choices per question
    pub shuffle_choices: bool,
    /// Present only the first N questions
    pub question_limit: Option<usize>,
    /// Score (in percent) needed to pass
    pub pass_percent: f64,
}

impl Default for FileExamConfig {
    fn default() -> Self {
        Self {
            bank_dir: "exams".to_string(),
            shuffle_choices: true,
            question_limit: None,
            pass_percent: 60.0,
        }
    }
}

impl FileExamConfig {
    /// Convert to application parameters
    pub fn to_exam_params(&self) -> ExamParams {
        ExamParams::default()
            .with_shuffle_choices(self.shuffle_choices)
            .with_question_limit(self.question_limit)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.question_limit == Some(0) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidValue {
                    field: "exam.question_limit".to_string(),
                    value: "0".to_string(),
                },
                message: "exam.question_limit cannot be 0; omit it to present every question"
                    .to_string(),
            });
        }

        if !(0.0..=100.0).contains(&self.pass_percent) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidValue {
                    field: "exam.pass_percent".to_string(),
                    value: self.pass_percent.to_string(),
                },
                message: format!(
                    "exam.pass_percent must be between 0 and 100, got {}",
                    self.pass_percent
                ),
            });
        }

        issues
    }
}
