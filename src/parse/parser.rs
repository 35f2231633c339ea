use crate::RuleRecord;

use super::error::LineError;

/// The result of parsing a rule file.
///
/// `records` keeps input order; `failures` lists every dropped line.
#[derive(Debug, Default)]
pub struct ParsedRules {
    pub records: Vec<RuleRecord>,
    pub failures: Vec<LineError>,
}

impl ParsedRules {
    /// Whether every non-blank line decoded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
