use pslint_common::{Check, CheckError, Level, Line, Problem};
use regex::Regex;
use std::sync::LazyLock;

const NAME: &str = "rule-empty-labels";

static EMPTY_LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{2,}").unwrap());

/// Check the rule contains no empty labels.
///
/// An empty label is caused by two or more `.` (dots) with no content between
/// them. The token `. .` is not detected here, the spaces check already
/// covers whitespace inside a rule.
pub struct RuleEmptyLabels;

impl Check for RuleEmptyLabels {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Check that rules contain no consecutive dots"
    }

    fn check(&self, line: &Line<'_>) -> Result<Option<Problem>, CheckError> {
        if !line.is_rule() || !EMPTY_LABEL.is_match(line.source()) {
            return Ok(None);
        }
        Ok(Some(Problem::new(line, NAME, "empty label", Level::Error)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(source: &str) -> Option<Problem> {
        RuleEmptyLabels.check(&Line::new(2, source)).unwrap()
    }

    #[test]
    fn test_empty_label() {
        let problem = check("foo..bar").expect("empty label should be reported");
        assert_eq!(problem.line, 2);
        assert_eq!(problem.line_source, "foo..bar");
        assert_eq!(problem.message, "empty label");
        assert_eq!(problem.level, Level::Error);
    }

    #[test]
    fn test_invalid_rules() {
        for input in ["foo..bar", "foo...bar", "..foo", "foo..", "*..ck"] {
            assert!(check(input).is_some(), "{:?} should NOT pass", input);
        }
    }

    #[test]
    fn test_valid_lines() {
        for input in ["", "foo", "foo.bar", ".foo", "foo.", "foo. .bar", "// foo..bar"] {
            assert!(check(input).is_none(), "{:?} should pass", input);
        }
    }
}
