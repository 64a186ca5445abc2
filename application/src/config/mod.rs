//! Application-level configuration.
//!
//! - [`ExamParams`] — how an exam is presented (shuffling, question limit)

pub mod exam_params;

pub use exam_params::ExamParams;
