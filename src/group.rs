use tracing::debug;

use crate::types::{ConditionValue, MccGroups, MccKey, RuleRecord};

/// The condition field holding a rule's merchant category codes.
pub const MCC_FIELD: &str = "Mcc";

/// Group records by merchant category code.
///
/// A record is appended to the group of every MCC it lists, or to the
/// [`MccKey::NoMcc`] group when it lists none. A code listed twice in one
/// record adds it to that group once, and a literal `"NO_MCC"` code joins the
/// fallback group. Missing or malformed `Mcc` data never fails; it lands in
/// the fallback group.
pub fn group_by_mcc<'a>(records: impl IntoIterator<Item = &'a RuleRecord>) -> MccGroups<'a> {
    let mut groups = MccGroups::new();
    let mut seen = 0_usize;
    for record in records {
        seen += 1;
        let codes = mcc_codes(record);
        if codes.is_empty() {
            groups.push(MccKey::NoMcc, record);
        } else {
            for code in codes {
                groups.push(MccKey::from(code.as_str()), record);
            }
        }
    }
    debug!(records = seen, groups = groups.len(), "grouped rules by MCC");
    groups
}

/// Distinct codes listed by a record, in listed order.
fn mcc_codes(record: &RuleRecord) -> Vec<String> {
    let Some(value) = record.condition(MCC_FIELD).filter(|v| !v.is_null()) else {
        return Vec::new();
    };
    let Some(items) = value.as_list() else {
        debug!(line = record.line(), value = %value, "Mcc is not a list; using NO_MCC");
        return Vec::new();
    };

    let mut codes: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let code = match item {
            ConditionValue::String(s) if !s.is_empty() => s.clone(),
            ConditionValue::Number(n) => n.to_string(),
            _ => continue,
        };
        if !codes.contains(&code) {
            codes.push(code);
        }
    }
    codes
}
