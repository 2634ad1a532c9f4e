//! Case-insensitive set of canonical object identifiers

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// Set of canonical dotted identifiers with case-insensitive membership.
///
/// Equality of entries is ASCII-ordinal, not locale-sensitive, so the same
/// input produces the same set in every execution environment. The spelling
/// stored is the first one seen; insertion order is preserved, though
/// callers may not rely on any ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectNameSet {
    /// Folded key -> identifier as first inserted
    names: IndexMap<String, String>,
}

impl ObjectNameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a canonical identifier. Returns `false` when an entry
    /// differing at most by case is already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        match self.names.entry(name.to_ascii_uppercase()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(name);
                true
            }
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(&name.to_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate identifiers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.values().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names.into_values().collect()
    }
}

impl IntoIterator for ObjectNameSet {
    type Item = String;
    type IntoIter = indexmap::map::IntoValues<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_values()
    }
}

impl<'a> IntoIterator for &'a ObjectNameSet {
    type Item = &'a String;
    type IntoIter = indexmap::map::Values<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.values()
    }
}

impl<S: Into<String>> FromIterator<S> for ObjectNameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl Serialize for ObjectNameSet {
    /// Serializes as a plain sequence of identifier strings.
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut seq = serializer.serialize_seq(Some(self.names.len()))?;
        for name in self.names.values() {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_dedups_case_insensitively() {
        let mut set = ObjectNameSet::new();
        assert!(set.insert("HR.EMPLOYEES"));
        assert!(!set.insert("hr.employees"));
        assert!(!set.insert("Hr.Employees"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_first_spelling_wins() {
        let mut set = ObjectNameSet::new();
        set.insert("MixedCase.Table");
        set.insert("MIXEDCASE.TABLE");
        assert_eq!(set.into_vec(), vec!["MixedCase.Table".to_string()]);
    }

    #[test]
    fn test_contains_ignores_case() {
        let mut set = ObjectNameSet::new();
        set.insert("SALES.ORDERS");
        assert!(set.contains("sales.orders"));
        assert!(!set.contains("sales"));
    }

    #[test]
    fn test_from_iterator_and_equality() {
        let a: ObjectNameSet = ["DEPT", "dept", "APP.AUDIT_LOG"].into_iter().collect();
        let b: ObjectNameSet = ["DEPT", "APP.AUDIT_LOG"].into_iter().collect();
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_serializes_as_sequence() {
        let mut set = ObjectNameSet::new();
        set.insert("HR.EMPLOYEES");
        set.insert("DEPT");
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["HR.EMPLOYEES","DEPT"]"#);
    }
}
