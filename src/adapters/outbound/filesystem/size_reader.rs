use crate::dependency_tree::domain::SizeIndex;
use crate::ports::outbound::PackageSizeReader;
use log::{debug, trace};
use std::path::Path;
use walkdir::WalkDir;

/// Directory under the project root where packages are installed
pub const INSTALL_ROOT: &str = "node_modules";

/// FileSystemSizeReader adapter that measures `node_modules/<name>`
///
/// Sizes are the sum of every regular file's length below the package
/// directory. Symbolic links inside the package are not followed and count
/// as 0 bytes, so link cycles cannot occur. A package directory that is
/// itself a link (e.g. `npm link`, workspaces) is resolved once.
pub struct FileSystemSizeReader;

impl FileSystemSizeReader {
    pub fn new() -> Self {
        Self
    }

    /// Total size of regular files under `dir`, or `None` if `dir` is not a
    /// directory. Unreadable entries are skipped.
    fn directory_size(dir: &Path) -> Option<u64> {
        if !dir.is_dir() {
            return None;
        }

        let total = WalkDir::new(dir)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    trace!("Skipping unreadable entry under {}: {}", dir.display(), e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| entry.metadata().ok())
            .map(|metadata| metadata.len())
            .sum();

        Some(total)
    }
}

impl Default for FileSystemSizeReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageSizeReader for FileSystemSizeReader {
    fn read_sizes(&self, project_path: &Path, package_names: &[String]) -> SizeIndex {
        let install_root = project_path.join(INSTALL_ROOT);

        package_names
            .iter()
            .map(|name| {
                let package_dir = install_root.join(name);
                let bytes = Self::directory_size(&package_dir).unwrap_or_else(|| {
                    debug!(
                        "No install directory for {} at {}; recording 0 bytes",
                        name,
                        package_dir.display()
                    );
                    0
                });
                (name.clone(), bytes)
            })
            .collect()
    }
}
