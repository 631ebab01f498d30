use crate::line::Line;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity of a problem. Serialized as `"warning"` or `"error"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Warning,
    Error,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Warning => write!(f, "warning"),
            Level::Error => write!(f, "error"),
        }
    }
}

/// A problem found in a Public Suffix List source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    /// Line number in the source (1-indexed)
    pub line: usize,
    /// The source line, verbatim
    pub line_source: String,
    /// Name of the check that reported the problem
    pub rule: String,
    /// A short explanation of the problem
    pub message: String,
    /// Severity of the problem; drives the exit status and the report suffix
    pub level: Level,
}

impl Problem {
    pub fn new(line: &Line<'_>, rule: &str, message: &str, level: Level) -> Self {
        Self {
            line: line.number(),
            line_source: line.source().to_string(),
            rule: rule.to_string(),
            message: message.to_string(),
            level,
        }
    }
}

/// A fault raised while a check evaluates a line.
///
/// This is not a diagnostic: it aborts the scan and is returned to the caller.
#[derive(Debug, Clone, Error)]
pub enum CheckError {
    #[error("check '{check}' failed at line {line}: {reason}")]
    Failed {
        check: String,
        line: usize,
        reason: String,
    },
}

/// A stateless check run against every line of a source.
///
/// Returns at most one problem per invocation.
pub trait Check: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn check(&self, line: &Line<'_>) -> Result<Option<Problem>, CheckError>;
}
