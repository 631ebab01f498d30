use pslint_common::{Check, CheckError, Level, Line, Problem};
use regex::Regex;

/// A check driven by a regular expression.
///
/// Reports `message` when `pattern` matches the line. With `negative` set the
/// check fires when the pattern does NOT match instead.
#[derive(Debug, Clone)]
pub struct PatternCheck {
    name: String,
    regex: Regex,
    message: String,
    level: Level,
    negative: bool,
    rules_only: bool,
}

impl PatternCheck {
    /// Compile `pattern` into a check that applies to rule lines only.
    pub fn new(
        name: &str,
        pattern: &str,
        message: &str,
        level: Level,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name: name.to_string(),
            regex: Regex::new(pattern)?,
            message: message.to_string(),
            level,
            negative: false,
            rules_only: true,
        })
    }

    pub fn with_negative(mut self, negative: bool) -> Self {
        self.negative = negative;
        self
    }

    pub fn with_rules_only(mut self, rules_only: bool) -> Self {
        self.rules_only = rules_only;
        self
    }
}

impl Check for PatternCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.message
    }

    fn check(&self, line: &Line<'_>) -> Result<Option<Problem>, CheckError> {
        if self.rules_only && !line.is_rule() {
            return Ok(None);
        }
        if self.regex.is_match(line.source()) == self.negative {
            return Ok(None);
        }
        Ok(Some(Problem::new(line, &self.name, &self.message, self.level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_fires() {
        let check =
            PatternCheck::new("no-port", r":[0-9]+", "port in suffix", Level::Error).unwrap();
        let problem = check.check(&Line::new(7, "foo.com:80")).unwrap().unwrap();
        assert_eq!(problem.line, 7);
        assert_eq!(problem.rule, "no-port");
        assert_eq!(problem.message, "port in suffix");
        assert_eq!(problem.level, Level::Error);

        assert!(check.check(&Line::new(8, "foo.com")).unwrap().is_none());
    }

    #[test]
    fn test_negative() {
        let check = PatternCheck::new(
            "ascii-only",
            r"^[!*a-z0-9.\-]+$",
            "unexpected character",
            Level::Warning,
        )
        .unwrap()
        .with_negative(true);
        assert!(check.check(&Line::new(1, "foo.com")).unwrap().is_none());
        let problem = check.check(&Line::new(2, "foo_bar.com")).unwrap().unwrap();
        assert_eq!(problem.level, Level::Warning);
    }

    #[test]
    fn test_rules_only() {
        let check = PatternCheck::new("todo", "TODO", "leftover TODO", Level::Warning).unwrap();
        assert!(check.check(&Line::new(1, "// TODO")).unwrap().is_none());

        let check = check.with_rules_only(false);
        assert!(check.check(&Line::new(1, "// TODO")).unwrap().is_some());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PatternCheck::new("broken", "(", "never", Level::Error).is_err());
    }
}
