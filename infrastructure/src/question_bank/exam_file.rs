//! Raw exam file data types

use mock_exam_domain::{Exam, Question, dedent};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supported exam file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamFileFormat {
    Toml,
    Json,
}

impl ExamFileFormat {
    /// All formats, in lookup order
    pub const ALL: [ExamFileFormat; 2] = [ExamFileFormat::Toml, ExamFileFormat::Json];

    pub fn extension(&self) -> &'static str {
        match self {
            ExamFileFormat::Toml => "toml",
            ExamFileFormat::Json => "json",
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(ExamFileFormat::Toml),
            "json" => Some(ExamFileFormat::Json),
            _ => None,
        }
    }

    /// Parse file content in this format
    pub fn parse(&self, content: &str) -> Result<ExamFile, String> {
        match self {
            ExamFileFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            ExamFileFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Raw exam file (TOML or JSON)
///
/// Mirrors [`Exam`]. The exam id always comes from the file name; an `id`
/// written in the file is only checked against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamFile {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "question")]
    pub questions: Vec<Question>,
}

impl ExamFile {
    /// Convert into a domain [`Exam`] named `id`, normalising multi-line text.
    pub fn into_exam(self, id: &str) -> Exam {
        let questions = self
            .questions
            .into_iter()
            .map(|mut q| {
                q.prompt = dedent(&q.prompt);
                q.explanation = q.explanation.as_deref().map(dedent);
                q
            })
            .collect();

        Exam {
            id: id.to_string(),
            title: self.title,
            description: self.description.as_deref().map(dedent),
            questions,
        }
    }
}
