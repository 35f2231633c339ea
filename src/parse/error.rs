use thiserror::Error;

/// Why a single line of the rule file could not be decoded.
#[derive(Debug, Error)]
pub enum LineErrorKind {
    #[error("invalid rule JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

/// A rule line that was dropped during parsing.
///
/// Line errors are recovered: the parser logs them, collects them in
/// [`ParsedRules::failures`](super::ParsedRules::failures) and moves on.
#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct LineError {
    line: usize,
    kind: LineErrorKind,
}

impl LineError {
    pub(crate) fn new(line: usize, kind: LineErrorKind) -> Self {
        Self { line, kind }
    }

    /// The 1-based line number in the rule file.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub fn kind(&self) -> &LineErrorKind {
        &self.kind
    }
}
