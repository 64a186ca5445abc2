//! Configuration issues reported by config validation.
//!
//! Loading never fails on a questionable value; instead each problem is
//! returned as a [`ConfigIssue`] and the caller decides whether to warn or
//! abort based on its [`Severity`].

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A numeric or string field holds a value that cannot be used.
    InvalidValue { field: String, value: String },
    /// A configured directory does not exist.
    MissingDirectory { field: String, path: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
