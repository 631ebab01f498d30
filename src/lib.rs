//! A linter for Public Suffix List sources.
//!
//! Every line of a source is classified as blank, comment or rule and run
//! through an ordered set of checks. Problems are returned in source order.
//!
//! ```
//! use pslint::{Level, Linter};
//!
//! let linter = Linter::default();
//! let problems = linter.lint_string(" com.aw\n").unwrap();
//! assert_eq!(problems[0].message, "leading space");
//! assert_eq!(problems[0].level, Level::Warning);
//! ```

pub mod checks;
pub mod config;
pub mod error;
pub mod linter;
#[cfg(feature = "cli")]
pub mod reporter;

pub use config::{ColorMode, ConfigError, LintConfig};
pub use error::{Error, Result};
pub use linter::Linter;
pub use pslint_common::{Check, CheckError, Level, Line, Problem};
#[cfg(feature = "cli")]
pub use reporter::{OutputFormat, Reporter};
