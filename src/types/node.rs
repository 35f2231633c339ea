use std::fmt;

use serde::Serialize;

use super::record::RuleRecord;
use super::value::ConditionValue;

/// A node of the rule display tree.
///
/// Built by [`build_tree()`](crate::build_tree) and
/// [`build_forest()`](crate::build_forest). Nodes are a derived view over
/// borrowed [`RuleRecord`]s and are rebuilt rather than updated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[must_use]
pub struct TreeNode<'a> {
    label: String,
    value: Option<ConditionValue>,
    children: Vec<TreeNode<'a>>,
    #[serde(skip)]
    rules: Vec<&'a RuleRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    error_messages: Vec<&'a str>,
}

impl<'a> TreeNode<'a> {
    /// Error messages are collected only when `children` is empty.
    pub(crate) fn new(
        label: impl Into<String>,
        value: Option<ConditionValue>,
        children: Vec<TreeNode<'a>>,
        rules: Vec<&'a RuleRecord>,
    ) -> Self {
        let error_messages = if children.is_empty() {
            rules
                .iter()
                .copied()
                .filter_map(RuleRecord::error_message)
                .collect()
        } else {
            Vec::new()
        };
        Self {
            label: label.into(),
            value,
            children,
            rules,
            error_messages,
        }
    }

    /// The condition field this node groups by.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The grouping value of this branch; `None` when the rules lack the field.
    #[must_use]
    pub fn value(&self) -> Option<&ConditionValue> {
        self.value.as_ref()
    }

    #[must_use]
    pub fn children(&self) -> &[TreeNode<'a>] {
        &self.children
    }

    /// The rules that reached this branch, in input order.
    #[must_use]
    pub fn rules(&self) -> &[&'a RuleRecord] {
        &self.rules
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Error messages of the rules ending at this leaf. Empty for inner nodes.
    #[must_use]
    pub fn error_messages(&self) -> &[&'a str] {
        &self.error_messages
    }

    /// The error message of a leaf reached by exactly one rule.
    #[must_use]
    pub fn error_message(&self) -> Option<&'a str> {
        match (self.rules.as_slice(), self.is_leaf()) {
            ([only], true) => RuleRecord::error_message(*only),
            _ => None,
        }
    }

    /// Number of levels in this subtree, counting this node.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(TreeNode::depth).max().unwrap_or(0)
    }

    /// Number of nodes in this subtree, counting this node.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }
}

impl fmt::Display for TreeNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}: {value}", self.label),
            None => write!(f, "{}: -", self.label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_line;

    #[test]
    fn leaf_collects_error_messages() {
        let a = parse_line(r#"{"Condition":{},"ErrorMessageFormat":"first"}"#, 1).unwrap();
        let b = parse_line(r#"{"Condition":{}}"#, 2).unwrap();
        let c = parse_line(r#"{"Condition":{},"ErrorMessageFormat":"third"}"#, 3).unwrap();
        let leaf = TreeNode::new("Genre", None, vec![], vec![&a, &b, &c]);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.error_messages(), &["first", "third"]);
        assert_eq!(leaf.error_message(), None);
    }

    #[test]
    fn single_rule_leaf_exposes_error_message() {
        let a = parse_line(r#"{"Condition":{},"ErrorMessageFormat":"bad"}"#, 1).unwrap();
        let leaf = TreeNode::new("TxnPurpose", Some("P2M".into()), vec![], vec![&a]);
        assert_eq!(leaf.error_message(), Some("bad"));
    }

    #[test]
    fn inner_node_has_no_error_messages() {
        let a = parse_line(r#"{"Condition":{},"ErrorMessageFormat":"bad"}"#, 1).unwrap();
        let leaf = TreeNode::new("Genre", None, vec![], vec![&a]);
        let inner = TreeNode::new("Verified", None, vec![leaf], vec![&a]);
        assert!(inner.error_messages().is_empty());
        assert_eq!(inner.error_message(), None);
        assert_eq!(inner.depth(), 2);
        assert_eq!(inner.node_count(), 2);
    }

    #[test]
    fn display() {
        let node = TreeNode::new("Verified", Some(ConditionValue::Bool(true)), vec![], vec![]);
        assert_eq!(node.to_string(), "Verified: Yes");
        let node = TreeNode::new("Genre", None, vec![], vec![]);
        assert_eq!(node.to_string(), "Genre: -");
    }

    #[test]
    fn serializes_without_rules() {
        let a = parse_line(r#"{"Condition":{},"ErrorMessageFormat":"bad"}"#, 1).unwrap();
        let node = TreeNode::new("TxnPurpose", Some("P2M".into()), vec![], vec![&a]);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "label": "TxnPurpose",
                "value": "P2M",
                "children": [],
                "error_messages": ["bad"],
            })
        );
    }
}
