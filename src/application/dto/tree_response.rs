use crate::dependency_tree::domain::DisplayTree;
use std::path::PathBuf;

/// TreeResponse - Internal response DTO from the tree visualization use case
#[derive(Debug, Clone)]
pub struct TreeResponse {
    /// Canonical project path the tree was computed for
    pub project_path: PathBuf,
    /// The filtered, size-annotated tree
    pub tree: DisplayTree,
    /// Whether the tree came from the cache instead of a fresh computation
    pub from_cache: bool,
}

impl TreeResponse {
    pub fn new(project_path: PathBuf, tree: DisplayTree, from_cache: bool) -> Self {
        Self {
            project_path,
            tree,
            from_cache,
        }
    }
}
