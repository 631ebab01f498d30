//! Source lines and their classification.
//!
//! A Public Suffix List is line oriented: every line is exactly one of
//! blank, comment (`//` after trimming) or rule.

/// A single line being linted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    number: usize,
    source: &'a str,
}

impl<'a> Line<'a> {
    /// Create a line. `number` is 1-based.
    pub fn new(number: usize, source: &'a str) -> Self {
        Self { number, source }
    }

    /// The 1-based line number
    pub fn number(&self) -> usize {
        self.number
    }

    /// The line text, verbatim
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Returns true if the line contains only whitespace, or nothing at all.
    pub fn is_blank(&self) -> bool {
        self.source.trim().is_empty()
    }

    /// Returns true if the trimmed line starts with `//`.
    pub fn is_comment(&self) -> bool {
        self.source.trim().starts_with("//")
    }

    /// Returns true if the line is neither blank nor a comment.
    pub fn is_rule(&self) -> bool {
        !self.is_comment() && !self.is_blank()
    }
}
