//! CLI entrypoint for mock-exam
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use mock_exam_application::{
    GradeExamUseCase, PresentExamInput, PresentExamUseCase, QuestionBankPort,
};
use mock_exam_domain::Severity;
use mock_exam_infrastructure::{ConfigLoader, FileConfig, FileQuestionBank};
use mock_exam_presentation::{
    AssetConfig, Cli, ConsoleFormatter, DisplayConfig, JsonFormatter, OutputFormat,
    OutputFormatter, parse_answers,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };
    if let Some(dir) = &cli.bank_dir {
        config.exam.bank_dir = dir.to_string_lossy().into_owned();
    }
    check_config(&config)?;
    info!("Using question bank {}", config.exam.bank_dir);

    // === Output ===
    let color = config.output.color && !cli.no_color;
    colored::control::set_override(color);

    let assets = AssetConfig::new(config.assets.base_path.clone());
    let format = cli
        .output
        .or_else(|| config.output.format.map(OutputFormat::from))
        .unwrap_or(OutputFormat::Text);
    let formatter: Box<dyn OutputFormatter> = match format {
        OutputFormat::Text => Box::new(ConsoleFormatter::new(
            assets,
            DisplayConfig {
                reveal_answers: cli.reveal,
                pass_percent: config.exam.pass_percent,
            },
        )),
        OutputFormat::Json => Box::new(JsonFormatter::new(assets)),
    };

    // === Dependency Injection ===
    let bank = Arc::new(FileQuestionBank::new(&config.exam.bank_dir));

    if cli.list {
        let exams = bank.list_exams().await?;
        print!("{}", formatter.format_exam_list(&exams));
        return Ok(());
    }

    let exam_id = match cli.exam {
        Some(id) => id,
        None => bail!("Exam id is required. Use --list to see available exams."),
    };

    let mut params = config.exam.to_exam_params();
    if cli.no_shuffle {
        params = params.with_shuffle_choices(false);
    }
    if let Some(limit) = cli.limit {
        params = params.with_question_limit(Some(limit.get()));
    }

    let presented = PresentExamUseCase::new(bank)
        .execute(PresentExamInput::new(exam_id, params))
        .await?;

    // Grade mode: print the result instead of the exam
    if let Some(answers) = &cli.answers {
        let answers = parse_answers(answers)?;
        let result = GradeExamUseCase::new()
            .with_pass_percent(config.exam.pass_percent)
            .execute(&presented, &answers)?;
        println!("{}", formatter.format_result(&presented, &result));
        return Ok(());
    }

    println!("{}", formatter.format_exam(&presented));

    Ok(())
}

/// Report configuration issues; abort on errors
fn check_config(config: &FileConfig) -> Result<()> {
    let mut fatal = 0;
    for issue in config.validate() {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => {
                eprintln!("config error: {}", issue.message);
                fatal += 1;
            }
        }
    }
    if fatal > 0 {
        bail!("{} configuration error(s)", fatal);
    }
    Ok(())
}
