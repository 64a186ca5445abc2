//! Presentation layer for mock-exam
//!
//! This crate contains CLI definitions, answer-sheet parsing and
//! output formatters.

pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use cli::answers::{AnswerParseError, parse_answers};
pub use cli::commands::{Cli, OutputFormat};
pub use config::{AssetConfig, DisplayConfig};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::json::JsonFormatter;
