//! The built-in line checks.
//!
//! [`default_checks`] returns the canonical set in execution order. The order
//! is significant: with `fail_first` only the first problem of a line is kept.

mod pattern;
mod rule_empty_labels;
mod rule_lowercase;
mod spaces;

pub use pattern::PatternCheck;
pub use rule_empty_labels::RuleEmptyLabels;
pub use rule_lowercase::RuleLowercase;
pub use spaces::Spaces;

use pslint_common::Check;

/// The canonical checks, in the order they run
pub fn default_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(Spaces),
        Box::new(RuleLowercase),
        Box::new(RuleEmptyLabels),
    ]
}
