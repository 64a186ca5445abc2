//! Output formatters for presented exams, results and bank listings

pub mod console;
pub mod formatter;
pub mod json;
