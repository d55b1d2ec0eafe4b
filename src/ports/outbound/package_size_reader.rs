use crate::dependency_tree::domain::SizeIndex;
use std::path::Path;

/// PackageSizeReader port for measuring installed packages
///
/// This port abstracts the file system walk that sums the size of each
/// package's install directory.
pub trait PackageSizeReader {
    /// Measures the installed size of each named package
    ///
    /// # Arguments
    /// * `project_path` - Path to the project directory
    /// * `package_names` - Top-level dependency names to measure
    ///
    /// # Returns
    /// A SizeIndex with one entry per name. Packages whose install directory
    /// is missing or unreadable are recorded as 0 bytes; this never fails.
    fn read_sizes(&self, project_path: &Path, package_names: &[String]) -> SizeIndex;
}
