//! File-backed question bank
//!
//! Exams are stored one per file in a bank directory:
//!
//! ```text
//! exams/
//! ├── fe-2023a-am.toml
//! └── fe-2023b-am.json
//! ```
//!
//! The file stem is the exam id unless the file sets `id` itself.

mod exam_file;
mod loader;

pub use exam_file::{ExamFile, ExamFileFormat};
pub use loader::FileQuestionBank;
