//! Console output formatter for exams and results

use crate::config::{AssetConfig, DisplayConfig};
use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use mock_exam_application::ExamSummary;
use mock_exam_domain::{ExamResult, Outcome, PresentedExam, PresentedQuestion};

/// Formats exams and results for console display
#[derive(Debug, Clone, Default)]
pub struct ConsoleFormatter {
    assets: AssetConfig,
    display: DisplayConfig,
}

impl ConsoleFormatter {
    pub fn new(assets: AssetConfig, display: DisplayConfig) -> Self {
        Self { assets, display }
    }

    /// Format a single question with its number in the exam
    pub fn format_question(&self, number: usize, question: &PresentedQuestion) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}",
            format!("Q{number}.").cyan().bold(),
            format!("[{}]", question.id).dimmed()
        ));
        if let Some(category) = &question.category {
            output.push_str(&format!(" {}", category.dimmed()));
        }
        output.push('\n');
        output.push_str(&Self::indent(&question.prompt, "  "));
        output.push('\n');

        if let Some(image) = &question.composite_image {
            output.push_str(&format!("  {} {}\n", "Image:".yellow(), self.assets.url(image)));
        }
        if let Some(image) = &question.choice_image {
            output.push_str(&format!(
                "  {} {}\n",
                "Choices image:".yellow(),
                self.assets.url(image)
            ));
        }

        for (index, choice) in question.choices.iter().enumerate() {
            let label = PresentedQuestion::label(index);
            let line = format!("  {label}) {choice}");
            if self.display.reveal_answers && index == question.answer {
                output.push_str(&format!("{} {}\n", line.green().bold(), "<- correct".green()));
            } else {
                output.push_str(&line);
                output.push('\n');
            }
        }

        if self.display.reveal_answers {
            if let Some(explanation) = &question.explanation {
                output.push_str(&format!("  {}\n", "Explanation:".cyan()));
                output.push_str(&Self::indent(explanation, "    "));
                output.push('\n');
            }
        }

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_exam(&self, exam: &PresentedExam) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&exam.title));
        output.push('\n');
        output.push_str(&format!(
            "{} {}  {} {}\n",
            "Exam:".cyan().bold(),
            exam.id,
            "Questions:".cyan().bold(),
            exam.len()
        ));

        for (i, question) in exam.questions.iter().enumerate() {
            output.push('\n');
            output.push_str(&self.format_question(i + 1, question));
        }

        output.push_str(&Self::footer());
        output
    }

    fn format_result(&self, exam: &PresentedExam, result: &ExamResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Results: {}", exam.title)));
        output.push('\n');

        for (i, outcome) in result.outcomes.iter().enumerate() {
            let correct = PresentedQuestion::label(outcome.correct_answer);
            let line = match (outcome.outcome, outcome.selected) {
                (Outcome::Correct, _) => format!("{} correct ({correct})", "✓".green()),
                (Outcome::Incorrect, Some(selected)) => format!(
                    "{} answered {}, correct {correct}",
                    "✗".red(),
                    PresentedQuestion::label(selected)
                ),
                _ => format!("{} unanswered, correct {correct}", "-".yellow()),
            };
            output.push_str(&format!(
                "  Q{:<3} {:<12} {}\n",
                i + 1,
                outcome.question_id.dimmed(),
                line
            ));
        }

        let score = format!(
            "{}/{} ({:.1}%)",
            result.correct_count(),
            result.total(),
            result.score_percent()
        );
        let verdict = if result.passed(self.display.pass_percent) {
            "PASS".green().bold()
        } else {
            "FAIL".red().bold()
        };
        output.push_str(&format!(
            "\n{} {}  {}  {} {}  {} {}\n",
            "Score:".cyan().bold(),
            score,
            verdict,
            "Incorrect:".dimmed(),
            result.incorrect_count(),
            "Unanswered:".dimmed(),
            result.unanswered_count()
        ));

        output.push_str(&Self::footer());
        output
    }

    fn format_exam_list(&self, exams: &[ExamSummary]) -> String {
        if exams.is_empty() {
            return format!("{}\n", "No exams found in the question bank.".yellow());
        }

        let mut output = format!("{}\n", "Available exams:".cyan().bold());
        for exam in exams {
            output.push_str(&format!(
                "  {:<24} {} {}\n",
                exam.id.bold(),
                exam.title,
                format!("({} questions)", exam.question_count).dimmed()
            ));
        }
        output
    }
}
