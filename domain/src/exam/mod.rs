//! Exam subdomain: questions, their presentation order, and grading.
//!
//! - [`question::Question`] — a multiple-choice question as authored
//! - [`entities::Exam`] — an ordered set of questions
//! - [`presented::PresentedQuestion`] — a question in display order
//! - [`grading::ExamResult`] — outcome of grading a set of answers

pub mod entities;
pub mod grading;
pub mod presented;
pub mod question;
