use std::collections::HashMap;

use crate::types::{ConditionValue, MccGroups, RuleRecord, TreeNode};

/// The condition fields that partition each MCC group, outermost first.
pub const DEFAULT_HIERARCHY: [&str; 5] = [
    "TxnPurpose",
    "TxnInitiationMode",
    "TxnSubType",
    "Verified",
    "Genre",
];

/// Label of the synthetic root node wrapping one MCC group.
pub const MCC_GROUP_LABEL: &str = "MCC group";

/// Build the display tree of one MCC group.
///
/// Level `L` partitions the records by `hierarchy[L]`. Distinct values keep
/// their first-encounter order; records lacking the field (or holding a
/// falsy value) share the `None` branch. The tree is never deeper than
/// `hierarchy.len()`, and a branch stops early once none of its records has
/// any of the remaining fields.
#[must_use]
pub fn build_tree<'a, S: AsRef<str>>(
    records: &[&'a RuleRecord],
    hierarchy: &[S],
) -> Vec<TreeNode<'a>> {
    build_level(records, hierarchy, 0)
}

/// Build one root per MCC group, labelled [`MCC_GROUP_LABEL`], with the
/// group's [`build_tree`] as children. The fallback group's root has no value.
#[must_use]
pub fn build_forest<'a, S: AsRef<str>>(
    groups: &MccGroups<'a>,
    hierarchy: &[S],
) -> Vec<TreeNode<'a>> {
    groups
        .iter()
        .map(|(key, records)| {
            TreeNode::new(
                MCC_GROUP_LABEL,
                key.code().map(ConditionValue::from),
                build_tree(records, hierarchy),
                records.to_vec(),
            )
        })
        .collect()
}

struct Branch<'a> {
    value: Option<ConditionValue>,
    rules: Vec<&'a RuleRecord>,
}

fn build_level<'a, S: AsRef<str>>(
    records: &[&'a RuleRecord],
    hierarchy: &[S],
    level: usize,
) -> Vec<TreeNode<'a>> {
    let Some(field) = hierarchy.get(level) else {
        return Vec::new();
    };
    let field: &str = field.as_ref();

    let mut branches: Vec<Branch<'a>> = Vec::new();
    let mut index: HashMap<Option<String>, usize> = HashMap::new();
    for &record in records {
        let value = record.condition(field);
        let key = grouping_key(value);
        let slot = *index.entry(key).or_insert_with_key(|key| {
            branches.push(Branch {
                value: key.as_ref().and(value.cloned()),
                rules: Vec::new(),
            });
            branches.len() - 1
        });
        branches[slot].rules.push(record);
    }

    branches
        .into_iter()
        .map(|branch| {
            let children = if has_any_field(&branch.rules, &hierarchy[level + 1..]) {
                build_level(&branch.rules, hierarchy, level + 1)
            } else {
                Vec::new()
            };
            TreeNode::new(field, branch.value, children, branch.rules)
        })
        .collect()
}

/// Normalized grouping key: `None` for absent or falsy values.
fn grouping_key(value: Option<&ConditionValue>) -> Option<String> {
    value
        .filter(|v| v.is_truthy())
        .map(ConditionValue::grouping_text)
}

fn has_any_field<S: AsRef<str>>(records: &[&RuleRecord], fields: &[S]) -> bool {
    fields.iter().any(|field| {
        records
            .iter()
            .any(|r| grouping_key(r.condition(field.as_ref())).is_some())
    })
}
