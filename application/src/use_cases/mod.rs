//! Use cases (application services)

pub mod grade_exam;
pub mod present_exam;
