use pslint_common::{Check, CheckError, Level, Line, Problem};
use regex::Regex;
use std::sync::LazyLock;

const NAME: &str = "rule-lowercase";

static UPPERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").unwrap());

/// Check the rule is entirely lower-case.
///
/// The whole line is scanned, so uppercase text after the suffix is
/// reported too. Comments and blank lines are skipped.
pub struct RuleLowercase;

impl Check for RuleLowercase {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Check that rules contain no uppercase letters"
    }

    fn check(&self, line: &Line<'_>) -> Result<Option<Problem>, CheckError> {
        if !line.is_rule() || !UPPERCASE.is_match(line.source()) {
            return Ok(None);
        }
        Ok(Some(Problem::new(
            line,
            NAME,
            "non-lowercase suffix",
            Level::Error,
        )))
    }
}
