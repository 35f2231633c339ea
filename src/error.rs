use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for loading rule files and emitting trees.
///
/// Malformed rule lines are not errors at this level; they are reported as
/// [`LineError`](crate::LineError)s alongside the parsed records.
#[derive(Debug, Error)]
pub enum RuleTreeError {
    #[error("failed to read rules from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
