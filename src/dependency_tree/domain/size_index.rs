use std::collections::HashMap;

/// SizeIndex maps a top-level package name to its installed size in bytes
///
/// Nested packages are not measured separately; only names present in the
/// root manifest's dependency map get an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeIndex(HashMap<String, u64>);

impl SizeIndex {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(&mut self, name: impl Into<String>, bytes: u64) {
        self.0.insert(name.into(), bytes);
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.0.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total_bytes(&self) -> u64 {
        self.0.values().sum()
    }
}

impl FromIterator<(String, u64)> for SizeIndex {
    fn from_iter<T: IntoIterator<Item = (String, u64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
