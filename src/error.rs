use pslint_common::CheckError;
use std::path::PathBuf;
use thiserror::Error;

/// An error that aborts a lint run.
///
/// Problems found in the source are not errors, they are returned as
/// [`Problem`](pslint_common::Problem) values.
#[derive(Debug, Error)]
pub enum Error {
    /// The source file could not be opened or read.
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A check failed while evaluating a line.
    #[error(transparent)]
    Check(#[from] CheckError),
}

/// Result type alias for lint operations
pub type Result<T> = std::result::Result<T, Error>;
