//! `[output]` section: how exams and results are printed

use mock_exam_domain::OutputFormat;
use serde::{Deserialize, Serialize};

pub use mock_exam_domain::OutputFormat as FileOutputFormat;

/// Printing defaults; `-o` and `--no-color` override them per run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// `text` or `json`; unset means text
    pub format: Option<OutputFormat>,
    /// Colour console output (ignored for JSON)
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}
