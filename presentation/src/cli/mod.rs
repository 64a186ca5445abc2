//! Command-line interface: argument definitions and answer-sheet parsing

pub mod answers;
pub mod commands;
