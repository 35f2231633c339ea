use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number};

/// A decoded condition value from a rule's `Condition` object.
///
/// Rule files mostly carry strings, booleans and arrays of strings, but any
/// JSON shape is accepted so that decoding a condition never fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    /// JSON `null`.
    Null,
    /// A boolean flag such as `Verified`.
    Bool(bool),
    /// A JSON number, kept in its original representation.
    Number(Number),
    /// A UTF-8 string.
    String(String),
    /// An ordered sequence of values, e.g. a list of MCC codes.
    List(Vec<ConditionValue>),
    /// A nested object. Not expected in rule files; kept verbatim.
    Object(Map<String, serde_json::Value>),
}

impl ConditionValue {
    /// Whether this value selects a branch of its own when grouping.
    ///
    /// `null`, `false`, zero, the empty string and the empty list are all
    /// falsy and fall into the missing-field branch.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            ConditionValue::Null => false,
            ConditionValue::Bool(b) => *b,
            ConditionValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            ConditionValue::String(s) => !s.is_empty(),
            ConditionValue::List(items) => !items.is_empty(),
            ConditionValue::Object(_) => true,
        }
    }

    /// The text used as a grouping key. Lists are joined with `,`.
    #[must_use]
    pub fn grouping_text(&self) -> String {
        match self {
            ConditionValue::Null => String::new(),
            ConditionValue::Bool(b) => b.to_string(),
            ConditionValue::Number(n) => n.to_string(),
            ConditionValue::String(s) => s.clone(),
            ConditionValue::List(items) => items
                .iter()
                .map(ConditionValue::grouping_text)
                .collect::<Vec<_>>()
                .join(","),
            ConditionValue::Object(map) => serde_json::Value::Object(map.clone()).to_string(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConditionValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[ConditionValue]> {
        match self {
            ConditionValue::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, ConditionValue::Null)
    }
}

impl From<bool> for ConditionValue {
    fn from(v: bool) -> Self {
        ConditionValue::Bool(v)
    }
}

impl From<i64> for ConditionValue {
    fn from(v: i64) -> Self {
        ConditionValue::Number(v.into())
    }
}

impl From<&str> for ConditionValue {
    fn from(v: &str) -> Self {
        ConditionValue::String(v.to_owned())
    }
}

impl From<String> for ConditionValue {
    fn from(v: String) -> Self {
        ConditionValue::String(v)
    }
}

impl<T: Into<ConditionValue>> From<Vec<T>> for ConditionValue {
    fn from(v: Vec<T>) -> Self {
        ConditionValue::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for ConditionValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => ConditionValue::Null,
            serde_json::Value::Bool(b) => ConditionValue::Bool(b),
            serde_json::Value::Number(n) => ConditionValue::Number(n),
            serde_json::Value::String(s) => ConditionValue::String(s),
            serde_json::Value::Array(items) => {
                ConditionValue::List(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(map) => ConditionValue::Object(map),
        }
    }
}

/// Human-facing form: booleans read `Yes`/`No`, lists are joined with `", "`.
impl fmt::Display for ConditionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionValue::Null => write!(f, "-"),
            ConditionValue::Bool(true) => write!(f, "Yes"),
            ConditionValue::Bool(false) => write!(f, "No"),
            ConditionValue::Number(n) => write!(f, "{n}"),
            ConditionValue::String(s) => write!(f, "{s}"),
            ConditionValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            ConditionValue::Object(map) => {
                write!(f, "{}", serde_json::Value::Object(map.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_shapes() {
        let v: ConditionValue = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(v, ConditionValue::Null);
        let v: ConditionValue = serde_json::from_value(json!(true)).unwrap();
        assert_eq!(v, ConditionValue::Bool(true));
        let v: ConditionValue = serde_json::from_value(json!("P2M")).unwrap();
        assert_eq!(v, ConditionValue::from("P2M"));
        let v: ConditionValue = serde_json::from_value(json!(["5411", "5812"])).unwrap();
        assert_eq!(v, ConditionValue::from(vec!["5411", "5812"]));
        let v: ConditionValue = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(v, ConditionValue::from(7_i64));
    }

    #[test]
    fn truthiness() {
        assert!(!ConditionValue::Null.is_truthy());
        assert!(!ConditionValue::Bool(false).is_truthy());
        assert!(ConditionValue::Bool(true).is_truthy());
        assert!(!ConditionValue::from(0_i64).is_truthy());
        assert!(ConditionValue::from(3_i64).is_truthy());
        assert!(!ConditionValue::from("").is_truthy());
        assert!(ConditionValue::from("null").is_truthy());
        assert!(!ConditionValue::List(vec![]).is_truthy());
        assert!(ConditionValue::from(vec![""]).is_truthy());
    }

    #[test]
    fn grouping_text_joins_lists_with_comma() {
        assert_eq!(
            ConditionValue::from(vec!["a", "b", "c"]).grouping_text(),
            "a,b,c"
        );
        assert_eq!(ConditionValue::Bool(true).grouping_text(), "true");
        assert_eq!(ConditionValue::from(42_i64).grouping_text(), "42");
    }

    #[test]
    fn grouping_text_flattens_nested_lists() {
        let nested = ConditionValue::List(vec![
            ConditionValue::from(vec!["a", "b"]),
            ConditionValue::from("c"),
            ConditionValue::Null,
        ]);
        assert_eq!(nested.grouping_text(), "a,b,c,");
    }

    #[test]
    fn display() {
        assert_eq!(ConditionValue::Bool(true).to_string(), "Yes");
        assert_eq!(ConditionValue::Bool(false).to_string(), "No");
        assert_eq!(ConditionValue::Null.to_string(), "-");
        assert_eq!(ConditionValue::from("P2P").to_string(), "P2P");
        assert_eq!(
            ConditionValue::from(vec!["5411", "5812"]).to_string(),
            "5411, 5812"
        );
    }

    #[test]
    fn from_json_value() {
        let v = ConditionValue::from(json!(["x", true, null]));
        assert_eq!(
            v,
            ConditionValue::List(vec![
                ConditionValue::from("x"),
                ConditionValue::Bool(true),
                ConditionValue::Null,
            ])
        );
    }

    #[test]
    fn accessors() {
        assert_eq!(ConditionValue::from("x").as_str(), Some("x"));
        assert_eq!(ConditionValue::Bool(true).as_str(), None);
        assert_eq!(ConditionValue::from(vec!["a"]).as_list().map(<[_]>::len), Some(1));
        assert!(ConditionValue::Null.is_null());
    }
}
