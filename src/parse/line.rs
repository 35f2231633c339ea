use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::{ConditionValue, RuleRecord};

use super::error::{LineError, LineErrorKind};

// -- Wire format ------------------------------------------------------------

// Field shapes are lenient: a line is kept whenever it is a JSON object.

#[derive(Debug, Deserialize)]
struct WireRule {
    #[serde(rename = "Condition", default, deserialize_with = "conditions_or_empty")]
    condition: BTreeMap<String, ConditionValue>,
    #[serde(rename = "Validations", default)]
    validations: Value,
    #[serde(rename = "ErrorMessageFormat", default, deserialize_with = "string_or_none")]
    error_message_format: Option<String>,
}

/// A non-object `Condition` (including `null`) means no conditions.
fn conditions_or_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, ConditionValue>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => map
            .into_iter()
            .map(|(field, value)| (field, ConditionValue::from(value)))
            .collect(),
        _ => BTreeMap::new(),
    })
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(message) => Some(message),
        _ => None,
    })
}

// -- Decoding ---------------------------------------------------------------

/// Decode a single rule line into a [`RuleRecord`].
///
/// `line_no` is recorded on the record and on any error. Escaped quotes
/// (`\"`) are unescaped before decoding, since the rule export double-encodes
/// string values.
///
/// # Errors
///
/// Returns [`LineError`] if the line is not valid JSON or not a JSON object.
/// Wrongly shaped fields never fail the line; the full object stays
/// available through [`RuleRecord::raw`].
pub fn parse_line(line: &str, line_no: usize) -> Result<RuleRecord, LineError> {
    let cleaned = unescape_quotes(line);
    decode(&cleaned, line_no).map_err(|kind| LineError::new(line_no, kind))
}

fn decode(text: &str, line_no: usize) -> Result<RuleRecord, LineErrorKind> {
    let raw: Value = serde_json::from_str(text)?;
    if !raw.is_object() {
        return Err(LineErrorKind::NotAnObject {
            found: json_type_name(&raw),
        });
    }
    let wire = WireRule::deserialize(&raw)?;
    Ok(RuleRecord::new(
        line_no,
        wire.condition,
        wire.validations,
        wire.error_message_format,
        raw,
    ))
}

pub(crate) fn unescape_quotes(line: &str) -> Cow<'_, str> {
    if line.contains("\\\"") {
        Cow::Owned(line.replace("\\\"", "\""))
    } else {
        Cow::Borrowed(line)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
