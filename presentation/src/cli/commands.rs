//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Output format for presented exams and results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Text,
    /// JSON output
    Json,
}

impl From<mock_exam_domain::OutputFormat> for OutputFormat {
    fn from(format: mock_exam_domain::OutputFormat) -> Self {
        match format {
            mock_exam_domain::OutputFormat::Text => OutputFormat::Text,
            mock_exam_domain::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for mock-exam
#[derive(Parser, Debug)]
#[command(name = "mock-exam")]
#[command(author, version, about = "Multiple-choice mock exams with stable choice shuffling")]
#[command(long_about = r#"
mock-exam presents multiple-choice exams from a question bank directory and
grades answer sheets.

Answer choices are shuffled per question, seeded by the question id, so a
question always shows its choices in the same order. Questions with choice
images or composite images keep their original order.

Configuration files are loaded from (in priority order):
1. MOCK_EXAM_<SECTION>__<KEY>   Environment overrides
2. --config <path>              Explicit config file
3. ./mock-exam.toml             Project-level config
4. ~/.config/mock-exam/config.toml   Global config

Example:
  mock-exam --list
  mock-exam fe-2023a-am
  mock-exam fe-2023a-am --answers "Q1=A,Q2=C,Q3=4"
  mock-exam fe-2023a-am --no-shuffle --reveal -o json
"#)]
pub struct Cli {
    /// Exam id (file name without extension in the question bank)
    pub exam: Option<String>,

    /// List the exams in the question bank and exit
    #[arg(short, long)]
    pub list: bool,

    /// Question bank directory (overrides exam.bank_dir)
    #[arg(long, value_name = "DIR")]
    pub bank_dir: Option<PathBuf>,

    /// Keep answer choices in their authored order
    #[arg(long)]
    pub no_shuffle: bool,

    /// Present only the first N questions (N >= 1)
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<NonZeroUsize>,

    /// Grade an answer sheet: comma-separated ID=CHOICE pairs (letter or 1-based number)
    #[arg(short, long, value_name = "ANSWERS")]
    pub answers: Option<String>,

    /// Mark correct answers and show explanations
    #[arg(long)]
    pub reveal: bool,

    /// Output format (overrides output.format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_exam_with_options() {
        let cli = Cli::parse_from([
            "mock-exam",
            "fe-2023a-am",
            "--no-shuffle",
            "-n",
            "5",
            "-o",
            "json",
            "-vv",
        ]);
        assert_eq!(cli.exam.as_deref(), Some("fe-2023a-am"));
        assert!(cli.no_shuffle);
        assert_eq!(cli.limit.map(NonZeroUsize::get), Some(5));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = Cli::try_parse_from(["mock-exam", "fe", "-n", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_parse_answers_flag() {
        let cli = Cli::parse_from(["mock-exam", "fe", "--answers", "Q1=A,Q2=3"]);
        assert_eq!(cli.answers.as_deref(), Some("Q1=A,Q2=3"));
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_output_format_from_domain() {
        assert_eq!(
            OutputFormat::from(mock_exam_domain::OutputFormat::Json),
            OutputFormat::Json
        );
    }
}
