//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod assets;
mod exam;
mod output;

pub use assets::FileAssetsConfig;
pub use exam::FileExamConfig;
pub use output::{FileOutputConfig, FileOutputFormat};

use mock_exam_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Question bank and presentation settings
    pub exam: FileExamConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Static asset settings
    pub assets: FileAssetsConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks value ranges in `[exam]` and whether the question bank
    /// directory exists.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.exam.validate();

        if !Path::new(&self.exam.bank_dir).is_dir() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::MissingDirectory {
                    field: "exam.bank_dir".to_string(),
                    path: self.exam.bank_dir.clone(),
                },
                message: format!(
                    "exam.bank_dir: directory '{}' does not exist",
                    self.exam.bank_dir
                ),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_exam_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[exam]
bank_dir = "data/exams"
shuffle_choices = false
question_limit = 20
pass_percent = 55.0

[output]
format = "json"
color = false

[assets]
base_path = "/philnits-mock"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.exam.bank_dir, "data/exams");
        assert!(!config.exam.shuffle_choices);
        assert_eq!(config.exam.question_limit, Some(20));
        assert_eq!(config.exam.pass_percent, 55.0);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(config.assets.base_path, "/philnits-mock");
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[exam]
question_limit = 5
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.exam.question_limit, Some(5));
        // Defaults should apply
        assert!(config.exam.shuffle_choices);
        assert_eq!(config.exam.bank_dir, "exams");
        assert!(config.output.color);
        assert!(config.assets.base_path.is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.exam.shuffle_choices);
        assert!(config.exam.question_limit.is_none());
        assert!(config.output.format.is_none());
    }

    #[test]
    fn test_validate_missing_bank_dir() {
        let mut config = FileConfig::default();
        config.exam.bank_dir = "/definitely/not/a/real/dir".to_string();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::MissingDirectory { .. }
        ));
    }

    #[test]
    fn test_validate_existing_bank_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = FileConfig::default();
        config.exam.bank_dir = dir.path().to_string_lossy().into_owned();
        assert!(config.validate().is_empty());
    }
}
