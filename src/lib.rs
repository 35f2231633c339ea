mod error;
mod group;
pub mod parse;
pub mod render;
mod tree;
mod types;

pub use error::RuleTreeError;
pub use group::{group_by_mcc, MCC_FIELD};
pub use parse::{load_rules, parse_line, parse_rules, LineError, LineErrorKind, ParsedRules};
pub use render::{render_group, render_groups, RenderOptions, TreeView};
pub use tree::{build_forest, build_tree, DEFAULT_HIERARCHY, MCC_GROUP_LABEL};
pub use types::{ConditionValue, MccGroups, MccKey, RuleRecord, TreeNode};
