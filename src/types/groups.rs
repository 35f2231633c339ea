use std::collections::HashMap;
use std::fmt;

use super::record::RuleRecord;

/// Key of an MCC group: a merchant category code, or the fallback group for
/// rules that name no MCC.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MccKey {
    Code(String),
    NoMcc,
}

impl MccKey {
    /// Display name of the fallback group.
    pub const NO_MCC: &'static str = "NO_MCC";

    /// The merchant category code, or `None` for the fallback group.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            MccKey::Code(code) => Some(code),
            MccKey::NoMcc => None,
        }
    }
}

/// `"NO_MCC"` maps to [`MccKey::NoMcc`]; anything else is a code.
impl From<&str> for MccKey {
    fn from(s: &str) -> Self {
        if s == Self::NO_MCC {
            MccKey::NoMcc
        } else {
            MccKey::Code(s.to_owned())
        }
    }
}

impl fmt::Display for MccKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MccKey::Code(code) => write!(f, "{code}"),
            MccKey::NoMcc => write!(f, "{}", Self::NO_MCC),
        }
    }
}

/// Rules grouped by MCC, in order of first encounter.
///
/// A record naming several MCCs is referenced from each of their groups.
/// Produced by [`group_by_mcc()`](crate::group_by_mcc).
#[derive(Debug, Clone, Default)]
pub struct MccGroups<'a> {
    entries: Vec<(MccKey, Vec<&'a RuleRecord>)>,
    index: HashMap<MccKey, usize>,
}

impl<'a> MccGroups<'a> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a record to the group for `key`, creating the group on first use.
    pub(crate) fn push(&mut self, key: MccKey, record: &'a RuleRecord) {
        if let Some(&idx) = self.index.get(&key) {
            self.entries[idx].1.push(record);
            return;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, vec![record]));
    }

    #[must_use]
    pub fn get(&self, key: &MccKey) -> Option<&[&'a RuleRecord]> {
        self.index
            .get(key)
            .map(|&idx| self.entries[idx].1.as_slice())
    }

    /// Look up the group of a merchant category code.
    #[must_use]
    pub fn get_code(&self, code: &str) -> Option<&[&'a RuleRecord]> {
        self.get(&MccKey::Code(code.to_owned()))
    }

    /// The fallback group for rules without an MCC.
    #[must_use]
    pub fn no_mcc(&self) -> Option<&[&'a RuleRecord]> {
        self.get(&MccKey::NoMcc)
    }

    /// Iterate over `(key, records)` pairs in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&MccKey, &[&'a RuleRecord])> {
        self.entries
            .iter()
            .map(|(key, records)| (key, records.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &MccKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Keep only the groups whose key is in `keys`, preserving group order.
    #[must_use]
    pub fn select(&self, keys: &[MccKey]) -> MccGroups<'a> {
        let mut selected = MccGroups::new();
        for (key, records) in &self.entries {
            if keys.contains(key) {
                selected.index.insert(key.clone(), selected.entries.len());
                selected.entries.push((key.clone(), records.clone()));
            }
        }
        selected
    }

    /// The number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total group memberships. Larger than the record count when records fan out.
    #[must_use]
    pub fn memberships(&self) -> usize {
        self.entries.iter().map(|(_, records)| records.len()).sum()
    }
}

impl fmt::Display for MccGroups<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MccGroups({} groups, {} memberships)",
            self.len(),
            self.memberships()
        )
    }
}
