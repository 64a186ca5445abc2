//! Domain layer for mock-exam
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Seeded shuffling
//!
//! Answer choices are reordered per question with a deterministic
//! generator seeded by the question id:
//!
//! - **Same id, same order**: across calls, sessions and processes
//! - **Correct answer tracked**: the correct choice's new position is
//!   reported alongside the shuffled choices
//! - **Image layouts pinned**: questions whose images refer to choice
//!   positions are never reordered
//!
//! ## Exams
//!
//! An [`Exam`] is presented as a [`PresentedExam`] and answer sheets are
//! graded into an [`ExamResult`].

pub mod config;
pub mod core;
pub mod exam;
pub mod shuffle;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use exam::{
    entities::Exam,
    grading::{AnswerSheet, ExamResult, Outcome, QuestionOutcome, grade},
    presented::{PresentedExam, PresentedQuestion},
    question::Question,
};
pub use shuffle::{
    SeededRng, Shuffled, seed_hash, should_shuffle, shuffle, shuffle_in_place,
    shuffle_with_tracked_index,
};
pub use util::{asset_path, dedent};
