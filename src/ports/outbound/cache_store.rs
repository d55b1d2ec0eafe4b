use crate::dependency_tree::domain::{CacheKey, DisplayTree};
use crate::shared::Result;

/// CacheStore port for previously computed dependency trees
///
/// Implementations hold the whole store in memory and persist it in full on
/// every `store`. Entries never expire: a cached tree is returned verbatim
/// even if the project's dependencies have changed since.
///
/// # Concurrency
/// A store assumes a single writer. Two processes sharing the same backing
/// file race on read-modify-write and one of their updates may be lost.
pub trait CacheStore {
    /// Returns the tree stored under `key`, if any
    fn lookup(&self, key: &CacheKey) -> Option<DisplayTree>;

    /// Stores `tree` under `key`, replacing any previous entry, and persists
    /// the whole store
    ///
    /// # Errors
    /// Returns an error if the store cannot be persisted
    fn store(&self, key: CacheKey, tree: &DisplayTree) -> Result<()>;
}
