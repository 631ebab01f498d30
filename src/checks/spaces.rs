use pslint_common::{Check, CheckError, Level, Line, Problem};
use regex::Regex;
use std::sync::LazyLock;

const NAME: &str = "spaces";

static LEADING_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s").unwrap());
static TRAILING_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s$").unwrap());

/// Check the line does not have irrelevant spaces.
///
/// - The line should not have a leading space
/// - The line should not have a trailing space
///
/// Applies to every line, comments and blank lines included. Only one
/// problem is reported per line; a leading space wins over a trailing one.
pub struct Spaces;

impl Check for Spaces {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Check for leading and trailing whitespace"
    }

    fn check(&self, line: &Line<'_>) -> Result<Option<Problem>, CheckError> {
        if LEADING_SPACE.is_match(line.source()) {
            return Ok(Some(Problem::new(line, NAME, "leading space", Level::Warning)));
        }
        if TRAILING_SPACE.is_match(line.source()) {
            return Ok(Some(Problem::new(line, NAME, "trailing space", Level::Warning)));
        }
        Ok(None)
    }
}
