use npm_dep_tree::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory CacheStore; clones share the same entries
#[derive(Default, Clone)]
pub struct MockCacheStore {
    entries: Arc<Mutex<HashMap<String, DisplayTree>>>,
}

impl MockCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.lock().unwrap().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

impl CacheStore for MockCacheStore {
    fn lookup(&self, key: &CacheKey) -> Option<DisplayTree> {
        self.entries.lock().unwrap().get(key.as_str()).cloned()
    }

    fn store(&self, key: CacheKey, tree: &DisplayTree) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.into_string(), tree.clone());
        Ok(())
    }
}
