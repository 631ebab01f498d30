use crate::checks::{PatternCheck, default_checks};
use crate::config::{ConfigError, LintConfig};
use crate::error::{Error, Result};
use pslint_common::{Check, CheckError, Line, Problem};
use std::fs;
use std::ops::ControlFlow;
use std::path::Path;
use tracing::{debug, trace};

/// Runs an ordered list of checks against every line of a source.
///
/// Two independent policies limit the number of problems reported:
///
/// - `fail_fast` stops the whole scan at the first problem
/// - `fail_first` stops checking the current line at its first problem and
///   moves on to the next line
pub struct Linter {
    fail_fast: bool,
    fail_first: bool,
    checks: Vec<Box<dyn Check>>,
}

impl Linter {
    /// Create a linter with the canonical checks and the given policies.
    pub fn new(fail_fast: bool, fail_first: bool) -> Self {
        Self {
            fail_fast,
            fail_first,
            checks: default_checks(),
        }
    }

    /// Create a linter from a configuration file.
    ///
    /// Disabled checks are left out and pattern checks are appended after the
    /// canonical ones in declaration order.
    pub fn with_config(config: &LintConfig) -> std::result::Result<Self, ConfigError> {
        let mut linter = Self::new(
            config.fail_fast.unwrap_or(false),
            config.fail_first.unwrap_or(true),
        );
        linter.remove_checks_by_name(|name| !config.is_rule_enabled(name));

        for pattern in &config.patterns {
            let check = PatternCheck::new(
                &pattern.name,
                &pattern.pattern,
                &pattern.message,
                pattern.level,
            )
            .map_err(|source| ConfigError::InvalidPattern {
                name: pattern.name.clone(),
                pattern: pattern.pattern.clone(),
                source,
            })?
            .with_negative(pattern.negative)
            .with_rules_only(pattern.rules_only);
            if config.is_rule_enabled(&pattern.name) {
                linter.checks.push(Box::new(check));
            }
        }

        Ok(linter)
    }

    /// Append a check after the existing ones
    pub fn with_check(mut self, check: Box<dyn Check>) -> Self {
        self.checks.push(check);
        self
    }

    /// Remove checks that match the predicate
    pub fn remove_checks_by_name<F>(&mut self, should_remove: F)
    where
        F: Fn(&str) -> bool,
    {
        self.checks.retain(|check| !should_remove(check.name()));
    }

    pub fn checks(&self) -> &[Box<dyn Check>] {
        &self.checks
    }

    /// Names of the checks, in the order they run
    pub fn check_names(&self) -> Vec<&str> {
        self.checks.iter().map(|check| check.name()).collect()
    }

    pub fn fail_fast(&self) -> bool {
        self.fail_fast
    }

    pub fn fail_first(&self) -> bool {
        self.fail_first
    }

    /// Lint an in-memory source.
    ///
    /// Lines are numbered from 1. Both `\n` and `\r\n` terminate a line and
    /// a final line without terminator is still linted.
    pub fn lint_string(&self, source: &str) -> Result<Vec<Problem>> {
        let mut problems = Vec::new();

        for (index, text) in source.lines().enumerate() {
            let line = Line::new(index + 1, text);
            if self.check_line(&line, &mut problems)?.is_break() {
                debug!(line = line.number(), "fail-fast: scan stopped at first problem");
                break;
            }
        }

        Ok(problems)
    }

    /// Lint the file at `path`.
    ///
    /// The file is read in full and closed before linting starts. Bytes that
    /// are not valid UTF-8 are replaced with U+FFFD so the rest of the line
    /// is still checked.
    pub fn lint_file(&self, path: &Path) -> Result<Vec<Problem>> {
        debug!("Linting file: {}", path.display());

        let content = fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        self.lint_string(&String::from_utf8_lossy(&content))
    }

    /// Run every check against a line, honoring the short-circuit policies.
    ///
    /// Breaks when the whole scan must stop.
    fn check_line(
        &self,
        line: &Line<'_>,
        problems: &mut Vec<Problem>,
    ) -> std::result::Result<ControlFlow<()>, CheckError> {
        for check in &self.checks {
            let Some(problem) = check.check(line)? else {
                continue;
            };

            trace!(line = problem.line, rule = %problem.rule, "{}", problem.message);
            problems.push(problem);

            if self.fail_fast {
                return Ok(ControlFlow::Break(()));
            }
            if self.fail_first {
                break;
            }
        }

        Ok(ControlFlow::Continue(()))
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(false, true)
    }
}
