mod groups;
mod node;
mod record;
mod value;

pub use groups::{MccGroups, MccKey};
pub use node::TreeNode;
pub use record::RuleRecord;
pub use value::ConditionValue;
