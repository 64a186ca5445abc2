//! Infrastructure layer for mock-exam
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod question_bank;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileAssetsConfig, FileConfig, FileExamConfig, FileOutputConfig, FileOutputFormat,
};
pub use question_bank::{ExamFile, ExamFileFormat, FileQuestionBank};
