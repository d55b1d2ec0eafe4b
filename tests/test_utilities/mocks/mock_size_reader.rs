use npm_dep_tree::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// Mock PackageSizeReader with preset sizes; unknown packages measure 0 bytes
#[derive(Default, Clone)]
pub struct MockSizeReader {
    sizes: HashMap<String, u64>,
}

impl MockSizeReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, name: &str, bytes: u64) -> Self {
        self.sizes.insert(name.to_string(), bytes);
        self
    }
}

impl PackageSizeReader for MockSizeReader {
    fn read_sizes(&self, _project_path: &Path, package_names: &[String]) -> SizeIndex {
        package_names
            .iter()
            .map(|name| (name.clone(), self.sizes.get(name).copied().unwrap_or(0)))
            .collect()
    }
}
