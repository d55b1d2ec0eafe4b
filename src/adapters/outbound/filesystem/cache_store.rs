use crate::dependency_tree::domain::{CacheKey, DisplayTree};
use crate::ports::outbound::CacheStore;
use crate::shared::error::TreeError;
use crate::shared::Result;
use indexmap::IndexMap;
use log::debug;
use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Cache file name, relative to the invoking working directory
pub const DEFAULT_CACHE_FILE: &str = ".dependency-tree-cache.json";

/// JsonFileCacheStore adapter persisting trees in a single JSON object
///
/// The file is read once by [`JsonFileCacheStore::load`] and rewritten in
/// full on every store. Writes go to a temporary file next to the cache and
/// are renamed over it, so a failed write leaves the previous file intact.
pub struct JsonFileCacheStore {
    path: PathBuf,
    entries: RefCell<IndexMap<String, DisplayTree>>,
}

impl JsonFileCacheStore {
    /// Loads the store at `path`; a missing file yields an empty store
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let entries: IndexMap<String, DisplayTree> = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| TreeError::CacheReadError {
                path: path.clone(),
                details: e.to_string(),
            })?;
            serde_json::from_str(&content).map_err(|e| TreeError::CacheReadError {
                path: path.clone(),
                details: e.to_string(),
            })?
        } else {
            IndexMap::new()
        };

        debug!("Loaded {} cached tree(s) from {}", entries.len(), path.display());
        Ok(Self {
            path,
            entries: RefCell::new(entries),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn write_error(&self, e: impl std::fmt::Display) -> TreeError {
        TreeError::CacheWriteError {
            path: self.path.clone(),
            details: e.to_string(),
        }
    }

    fn persist(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&*self.entries.borrow())?;

        let dir = match self.path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        };
        let mut temp_file = NamedTempFile::new_in(dir).map_err(|e| self.write_error(e))?;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| self.write_error(e))?;
        temp_file
            .persist(&self.path)
            .map_err(|e| self.write_error(e.error))?;

        Ok(())
    }
}

impl CacheStore for JsonFileCacheStore {
    fn lookup(&self, key: &CacheKey) -> Option<DisplayTree> {
        self.entries.borrow().get(key.as_str()).cloned()
    }

    fn store(&self, key: CacheKey, tree: &DisplayTree) -> Result<()> {
        debug!("Caching tree under key {}", key);
        self.entries
            .borrow_mut()
            .insert(key.into_string(), tree.clone());
        self.persist()
    }
}

/// NoopCacheStore adapter used when caching is disabled
///
/// Every lookup misses and every store is discarded.
pub struct NoopCacheStore;

impl CacheStore for NoopCacheStore {
    fn lookup(&self, _key: &CacheKey) -> Option<DisplayTree> {
        None
    }

    fn store(&self, _key: CacheKey, _tree: &DisplayTree) -> Result<()> {
        Ok(())
    }
}
