use std::path::PathBuf;

/// TreeRequest - Internal request DTO for the tree visualization use case
#[derive(Debug, Clone)]
pub struct TreeRequest {
    /// Path to the project directory containing package.json
    pub project_path: PathBuf,
    /// Raw comma-separated filter, exactly as supplied (part of the cache key)
    pub filter: String,
}

impl TreeRequest {
    pub fn new(project_path: impl Into<PathBuf>, filter: impl Into<String>) -> Self {
        Self {
            project_path: project_path.into(),
            filter: filter.into(),
        }
    }
}
