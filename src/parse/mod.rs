mod error;
mod line;
mod parser;

use std::path::Path;

use tracing::{debug, warn};

pub use error::{LineError, LineErrorKind};
pub use line::parse_line;
pub use parser::ParsedRules;

use crate::RuleTreeError;

/// Parse a rule file's text: one JSON rule object per line.
///
/// Blank lines are skipped. Lines that fail to decode are logged, collected
/// in [`ParsedRules::failures`] and dropped; parsing continues with the next
/// line.
#[must_use]
pub fn parse_rules(input: &str) -> ParsedRules {
    let mut parsed = ParsedRules::default();
    for (idx, line) in input.split('\n').enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line, idx + 1) {
            Ok(record) => parsed.records.push(record),
            Err(err) => {
                warn!(line = err.line(), error = %err.kind(), "skipping malformed rule line");
                parsed.failures.push(err);
            }
        }
    }
    debug!(
        records = parsed.records.len(),
        failures = parsed.failures.len(),
        "parsed rule file"
    );
    parsed
}

/// Read a rule file from disk and parse it.
///
/// # Errors
///
/// Returns [`RuleTreeError::Read`] if the file cannot be read. Malformed
/// lines are not errors; see [`parse_rules`].
pub fn load_rules(path: impl AsRef<Path>) -> Result<ParsedRules, RuleTreeError> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path).map_err(|source| RuleTreeError::Read {
        path: path.to_owned(),
        source,
    })?;
    Ok(parse_rules(&input))
}
