//! Plain-text rendering of rule trees.
//!
//! The layout mirrors the interactive viewer: one heading per MCC group and
//! one line per node, with `-` marking an expanded branch and `+` a collapsed
//! one. Collapsing is driven by [`RenderOptions::collapse_depth`] instead of
//! per-node state.

use std::fmt;

use crate::tree::build_tree;
use crate::types::{MccGroups, MccKey, TreeNode};

/// Title printed above all groups by [`render_groups`].
pub const TITLE: &str = "Rule Engine Visualization";

const INDENT: &str = "  ";

/// Display settings for rendered trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Nodes at this depth (0 = roots) and deeper are shown collapsed.
    /// `None` expands everything.
    pub collapse_depth: Option<usize>,
    /// Print error messages under leaf nodes.
    pub show_errors: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            collapse_depth: None,
            show_errors: true,
        }
    }
}

impl RenderOptions {
    fn is_expanded(&self, depth: usize) -> bool {
        self.collapse_depth.is_none_or(|limit| depth < limit)
    }
}

/// Heading of an MCC group.
#[must_use]
pub fn group_heading(key: &MccKey) -> String {
    match key {
        MccKey::Code(code) => format!("Rules for MCC: {code}"),
        MccKey::NoMcc => "Rules without MCC".to_owned(),
    }
}

/// A displayable view of one MCC group's tree.
#[derive(Debug, Clone, Copy)]
pub struct TreeView<'v, 'a> {
    key: &'v MccKey,
    nodes: &'v [TreeNode<'a>],
    options: &'v RenderOptions,
}

impl<'v, 'a> TreeView<'v, 'a> {
    pub fn new(key: &'v MccKey, nodes: &'v [TreeNode<'a>], options: &'v RenderOptions) -> Self {
        Self {
            key,
            nodes,
            options,
        }
    }

    fn write_node(&self, f: &mut fmt::Formatter<'_>, node: &TreeNode<'_>, depth: usize) -> fmt::Result {
        let expanded = self.options.is_expanded(depth);
        let marker = match (node.is_leaf(), expanded) {
            (true, _) => "  ",
            (false, true) => "- ",
            (false, false) => "+ ",
        };
        writeln!(f, "{}{marker}{node}", INDENT.repeat(depth))?;

        if node.is_leaf() {
            if self.options.show_errors {
                for message in node.error_messages() {
                    writeln!(f, "{}  ! {message}", INDENT.repeat(depth + 1))?;
                }
            }
        } else if expanded {
            for child in node.children() {
                self.write_node(f, child, depth + 1)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for TreeView<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", group_heading(self.key))?;
        for node in self.nodes {
            self.write_node(f, node, 0)?;
        }
        Ok(())
    }
}

/// Render one MCC group's tree as text.
#[must_use]
pub fn render_group(key: &MccKey, nodes: &[TreeNode<'_>], options: &RenderOptions) -> String {
    TreeView::new(key, nodes, options).to_string()
}

/// Build and render the trees of every group, under a common title.
#[must_use]
pub fn render_groups<S: AsRef<str>>(
    groups: &MccGroups<'_>,
    hierarchy: &[S],
    options: &RenderOptions,
) -> String {
    let mut out = format!("{TITLE}\n");
    for (key, records) in groups.iter() {
        let nodes = build_tree(records, hierarchy);
        out.push('\n');
        out.push_str(&render_group(key, &nodes, options));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{group_by_mcc, parse_rules, DEFAULT_HIERARCHY};

    const RULES: &str = concat!(
        r#"{"Condition":{"Mcc":["5411"],"TxnPurpose":"P2M","Verified":true},"ErrorMessageFormat":"bad"}"#,
        "\n",
        r#"{"Condition":{"TxnPurpose":"P2P"}}"#,
    );

    #[test]
    fn renders_headings_and_nodes() {
        let parsed = parse_rules(RULES);
        let groups = group_by_mcc(&parsed.records);
        let text = render_groups(&groups, &DEFAULT_HIERARCHY, &RenderOptions::default());
        let expected = "\
Rule Engine Visualization

Rules for MCC: 5411
- TxnPurpose: P2M
  - TxnInitiationMode: -
    - TxnSubType: -
        Verified: Yes
          ! bad

Rules without MCC
  TxnPurpose: P2P
";
        assert_eq!(text, expected);
    }

    #[test]
    fn collapse_hides_children() {
        let parsed = parse_rules(RULES);
        let groups = group_by_mcc(&parsed.records);
        let records = groups.get_code("5411").unwrap();
        let nodes = build_tree(records, &DEFAULT_HIERARCHY);
        let options = RenderOptions {
            collapse_depth: Some(1),
            show_errors: true,
        };
        let text = render_group(&MccKey::from("5411"), &nodes, &options);
        assert_eq!(
            text,
            "Rules for MCC: 5411\n- TxnPurpose: P2M\n  + TxnInitiationMode: -\n"
        );
    }

    #[test]
    fn errors_can_be_hidden() {
        let parsed = parse_rules(RULES);
        let groups = group_by_mcc(&parsed.records);
        let options = RenderOptions {
            collapse_depth: None,
            show_errors: false,
        };
        let text = render_groups(&groups, &DEFAULT_HIERARCHY, &options);
        assert!(!text.contains("! bad"));
    }

    #[test]
    fn heading_for_fallback_group() {
        assert_eq!(group_heading(&MccKey::NoMcc), "Rules without MCC");
        assert_eq!(group_heading(&MccKey::from("7995")), "Rules for MCC: 7995");
    }
}
