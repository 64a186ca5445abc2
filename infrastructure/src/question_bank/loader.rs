//! [`QuestionBankPort`] adapter reading exam files from a directory

use super::exam_file::ExamFileFormat;
use async_trait::async_trait;
use glob::glob;
use mock_exam_application::{ExamSummary, QuestionBankError, QuestionBankPort};
use mock_exam_domain::Exam;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Question bank backed by `<id>.toml` / `<id>.json` files in one directory.
#[derive(Debug, Clone)]
pub struct FileQuestionBank {
    root: PathBuf,
}

impl FileQuestionBank {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Exam ids map straight to file names, so anything that could leave
    /// the bank directory is rejected.
    fn is_valid_id(exam_id: &str) -> bool {
        !exam_id.is_empty()
            && !exam_id.starts_with('.')
            && exam_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    }

    /// Find the file for `exam_id`, preferring TOML over JSON
    fn locate(&self, exam_id: &str) -> Option<(PathBuf, ExamFileFormat)> {
        ExamFileFormat::ALL.iter().find_map(|format| {
            let path = self.root.join(format!("{exam_id}.{}", format.extension()));
            path.is_file().then_some((path, *format))
        })
    }

    async fn read_exam(
        &self,
        path: &Path,
        format: ExamFileFormat,
    ) -> Result<Exam, QuestionBankError> {
        let display = path.display().to_string();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| QuestionBankError::Io {
                path: display.clone(),
                message: e.to_string(),
            })?;

        let file = format.parse(&content).map_err(|message| QuestionBankError::Parse {
            path: display,
            message,
        })?;

        // The file name is the exam id; `load_exam` can only find it by that
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        if let Some(declared) = file.id.as_deref().filter(|id| *id != stem) {
            warn!(
                "{} declares id {:?}, using {:?} from the file name",
                path.display(), declared, stem
            );
        }
        Ok(file.into_exam(stem))
    }

    /// All exam files in the bank directory, one per exam id
    ///
    /// When `<id>.toml` and `<id>.json` both exist only the TOML file is
    /// kept, the same one [`Self::locate`] picks.
    fn exam_paths(&self) -> Result<Vec<(PathBuf, ExamFileFormat)>, QuestionBankError> {
        let mut paths = Vec::new();
        let mut seen = HashSet::new();
        for format in ExamFileFormat::ALL {
            let pattern = self.root.join(format!("*.{}", format.extension()));
            let pattern = pattern.to_string_lossy();
            let entries = glob(&pattern).map_err(|e| QuestionBankError::Io {
                path: pattern.to_string(),
                message: e.to_string(),
            })?;
            for entry in entries {
                match entry {
                    Ok(path) => {
                        let stem = path
                            .file_stem()
                            .map(|s| s.to_string_lossy().into_owned())
                            .unwrap_or_default();
                        if seen.insert(stem) {
                            paths.push((path, format));
                        } else {
                            warn!("Ignoring {}: an exam with the same id exists", path.display());
                        }
                    }
                    Err(e) => warn!("Skipping unreadable bank entry: {}", e),
                }
            }
        }
        Ok(paths)
    }
}

#[async_trait]
impl QuestionBankPort for FileQuestionBank {
    async fn list_exams(&self) -> Result<Vec<ExamSummary>, QuestionBankError> {
        if !self.root.is_dir() {
            return Err(QuestionBankError::Io {
                path: self.root.display().to_string(),
                message: "not a directory".to_string(),
            });
        }

        let mut summaries = Vec::new();
        for (path, format) in self.exam_paths()? {
            match self.read_exam(&path, format).await {
                Ok(exam) => summaries.push(ExamSummary::from(&exam)),
                // One broken file should not hide the rest of the bank
                Err(e) => warn!("Skipping {}: {}", path.display(), e),
            }
        }
        summaries.sort_by(|a, b| a.id.cmp(&b.id));
        debug!("Found {} exam(s) in {}", summaries.len(), self.root.display());
        Ok(summaries)
    }

    async fn load_exam(&self, exam_id: &str) -> Result<Exam, QuestionBankError> {
        if !Self::is_valid_id(exam_id) {
            return Err(QuestionBankError::NotFound(exam_id.to_string()));
        }
        let (path, format) = self
            .locate(exam_id)
            .ok_or_else(|| QuestionBankError::NotFound(exam_id.to_string()))?;

        debug!("Loading exam {} from {}", exam_id, path.display());
        self.read_exam(&path, format).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const TOML_EXAM: &str = r#"
title = "TOML exam"

[[question]]
id = "Q1"
prompt = "Pick C"
choices = ["A", "B", "C", "D"]
answer = 2
"#;

    const JSON_EXAM: &str = r#"{
        "id": "json-exam",
        "title": "JSON exam",
        "questions": [
            {"id": "Q1", "prompt": "p", "choices": ["a", "b"], "answer": 1},
            {"id": "Q2", "prompt": "p", "choices": ["a", "b"], "answer": 0}
        ]
    }"#;

    fn bank() -> (TempDir, FileQuestionBank) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("toml-exam.toml"), TOML_EXAM).unwrap();
        fs::write(dir.path().join("json-exam.json"), JSON_EXAM).unwrap();
        fs::write(dir.path().join("notes.txt"), "not an exam").unwrap();
        let bank = FileQuestionBank::new(dir.path());
        (dir, bank)
    }

    #[tokio::test]
    async fn test_load_toml_exam() {
        let (_dir, bank) = bank();
        let exam = bank.load_exam("toml-exam").await.unwrap();
        assert_eq!(exam.id, "toml-exam");
        assert_eq!(exam.title, "TOML exam");
        assert_eq!(exam.questions[0].choices.len(), 4);
    }

    #[tokio::test]
    async fn test_load_json_exam() {
        let (_dir, bank) = bank();
        let exam = bank.load_exam("json-exam").await.unwrap();
        assert_eq!(exam.questions.len(), 2);
    }

    #[tokio::test]
    async fn test_load_missing_exam() {
        let (_dir, bank) = bank();
        let err = bank.load_exam("nope").await.unwrap_err();
        assert!(matches!(err, QuestionBankError::NotFound(id) if id == "nope"));
    }

    #[tokio::test]
    async fn test_load_rejects_path_like_ids() {
        let (_dir, bank) = bank();
        for id in ["../toml-exam", "sub/toml-exam", ".hidden", ""] {
            let err = bank.load_exam(id).await.unwrap_err();
            assert!(matches!(err, QuestionBankError::NotFound(_)), "id {id:?}");
        }
    }

    #[tokio::test]
    async fn test_load_parse_error() {
        let (dir, bank) = bank();
        fs::write(dir.path().join("broken.toml"), "title = ").unwrap();
        let err = bank.load_exam("broken").await.unwrap_err();
        assert!(matches!(err, QuestionBankError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_list_exams_sorted_and_skips_broken() {
        let (dir, bank) = bank();
        fs::write(dir.path().join("broken.toml"), "title = ").unwrap();

        let exams = bank.list_exams().await.unwrap();
        let ids: Vec<&str> = exams.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["json-exam", "toml-exam"]);
        assert_eq!(exams[0].question_count, 2);
    }

    #[tokio::test]
    async fn test_listed_ids_load_when_file_declares_other_id() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("fe-2023a.json"),
            r#"{"id": "fe-json", "title": "J", "questions": []}"#,
        )
        .unwrap();
        let bank = FileQuestionBank::new(dir.path());

        let listed = bank.list_exams().await.unwrap();
        let ids: Vec<&str> = listed.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["fe-2023a"]);

        let exam = bank.load_exam(&listed[0].id).await.unwrap();
        assert_eq!(exam.id, "fe-2023a");
        assert_eq!(exam.title, "J");
    }

    #[tokio::test]
    async fn test_list_exams_prefers_toml_for_same_id() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.toml"), "title = \"T\"\n").unwrap();
        fs::write(
            dir.path().join("a.json"),
            r#"{"title": "J", "questions": []}"#,
        )
        .unwrap();
        let bank = FileQuestionBank::new(dir.path());

        let listed = bank.list_exams().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "a");
        assert_eq!(listed[0].title, "T");

        let exam = bank.load_exam("a").await.unwrap();
        assert_eq!(exam.title, listed[0].title);
    }

    #[tokio::test]
    async fn test_bundled_sample_exam_is_valid() {
        let bank = FileQuestionBank::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../exams"));
        let exam = bank.load_exam("fe-sample").await.unwrap();
        exam.validate().unwrap();
        assert_eq!(exam.questions.len(), 4);
        assert_eq!(
            exam.questions[1].prompt,
            "Which data structure retrieves elements in\nlast-in, first-out order?"
        );
        assert!(!exam.questions[2].should_shuffle());
    }

    #[tokio::test]
    async fn test_list_exams_missing_dir() {
        let bank = FileQuestionBank::new("/definitely/not/a/real/dir");
        assert!(matches!(
            bank.list_exams().await,
            Err(QuestionBankError::Io { .. })
        ));
    }
}
