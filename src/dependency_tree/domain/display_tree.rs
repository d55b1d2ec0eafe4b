use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// DisplayTree is the filtered, size-annotated tree ready for rendering
///
/// Each key is a formatted label (`name@version (size)` or `name@version`)
/// mapping to the subtree of that package's dependencies. Leaves hold an
/// empty map. Insertion order is display order, and it survives a JSON
/// round-trip because serialization is a plain nested object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayTree(IndexMap<String, DisplayTree>);

impl DisplayTree {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Inserts a child subtree. Re-inserting an existing label replaces its
    /// subtree but keeps its original position.
    pub fn insert(&mut self, label: impl Into<String>, child: DisplayTree) {
        self.0.insert(label.into(), child);
    }

    pub fn get(&self, label: &str) -> Option<&DisplayTree> {
        self.0.get(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DisplayTree)> {
        self.0.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of nodes at every depth
    pub fn node_count(&self) -> usize {
        self.0.values().map(|child| 1 + child.node_count()).sum()
    }
}

impl FromIterator<(String, DisplayTree)> for DisplayTree {
    fn from_iter<T: IntoIterator<Item = (String, DisplayTree)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
