//! Core types shared by the pslint library and binary.
//!
//! # Modules
//!
//! - [`line`] — A single source line and its classification (blank, comment, rule)
//! - [`linter`] — Lint types: [`Check`] trait, [`Problem`], [`Level`], [`CheckError`]
//!
//! # Quick reference
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Line`] | One numbered line of a Public Suffix List source |
//! | [`Check`] | Trait that every line check implements |
//! | [`Problem`] | A single diagnostic with line, message and level |
//! | [`Level`] | `Warning` or `Error` |
//! | [`CheckError`] | A fault raised by a check while evaluating a line |

pub mod line;
pub mod linter;

pub use line::Line;
pub use linter::{Check, CheckError, Level, Problem};
