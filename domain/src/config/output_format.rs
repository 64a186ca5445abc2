//! Output format value object

use serde::{Deserialize, Serialize};

/// How presented exams and results are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable console output (default)
    #[default]
    Text,
    /// JSON output
    Json,
}
