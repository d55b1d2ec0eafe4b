use std::path::Path;

/// Cache key for a computed dependency tree
///
/// The key is the resolved project path immediately followed by the raw
/// filter string, exactly as the user typed it. Filters that differ only in
/// whitespace or ordering therefore produce different keys.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(project_path: &Path, raw_filter: &str) -> Self {
        Self(format!("{}{}", project_path.display(), raw_filter))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
