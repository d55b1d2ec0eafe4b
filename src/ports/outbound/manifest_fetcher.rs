use crate::dependency_tree::domain::RawManifestNode;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// ManifestFetcher port for obtaining the resolved dependency manifest
///
/// This port abstracts the external package manager that reports the
/// project's production dependencies as nested JSON.
///
/// # Async Support
/// Fetching spawns and awaits a child process, so the method is async.
#[async_trait]
pub trait ManifestFetcher: Send + Sync {
    /// Fetches the production dependency manifest of a project
    ///
    /// # Arguments
    /// * `project_path` - Path to the project directory containing package.json
    ///
    /// # Returns
    /// The root RawManifestNode of the project
    ///
    /// # Errors
    /// Returns an error if:
    /// - The package manager cannot be started or exits unsuccessfully
    /// - The package manager does not finish in time
    /// - Its output is not a valid manifest
    async fn fetch_manifest(&self, project_path: &Path) -> Result<RawManifestNode>;
}
