use std::collections::BTreeMap;
use std::fmt;

use super::value::ConditionValue;

/// One rule decoded from a line of the rule file.
///
/// Records are immutable once built by the parser. Grouping and tree building
/// only ever hold shared references to them.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleRecord {
    line: usize,
    conditions: BTreeMap<String, ConditionValue>,
    validations: serde_json::Value,
    error_message: Option<String>,
    raw: serde_json::Value,
}

impl RuleRecord {
    pub(crate) fn new(
        line: usize,
        conditions: BTreeMap<String, ConditionValue>,
        validations: serde_json::Value,
        error_message: Option<String>,
        raw: serde_json::Value,
    ) -> Self {
        Self {
            line,
            conditions,
            validations,
            error_message,
            raw,
        }
    }

    /// The 1-based line of the rule file this record was decoded from.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// All conditions of the rule, keyed by field name.
    #[must_use]
    pub fn conditions(&self) -> &BTreeMap<String, ConditionValue> {
        &self.conditions
    }

    /// Look up a single condition field.
    /// Returns `None` when the rule does not mention the field at all.
    #[must_use]
    pub fn condition(&self, field: &str) -> Option<&ConditionValue> {
        self.conditions.get(field)
    }

    /// The `Validations` payload, untouched.
    #[must_use]
    pub fn validations(&self) -> &serde_json::Value {
        &self.validations
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// The full decoded JSON object the record was built from.
    #[must_use]
    pub fn raw(&self) -> &serde_json::Value {
        &self.raw
    }
}

impl fmt::Display for RuleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RuleRecord(line {}, {} conditions)",
            self.line,
            self.conditions.len()
        )
    }
}
