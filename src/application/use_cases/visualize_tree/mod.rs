use crate::application::dto::{TreeRequest, TreeResponse};
use crate::dependency_tree::domain::{CacheKey, DisplayTree, PackageFilter};
use crate::dependency_tree::services::TreeFormatter;
use crate::ports::outbound::{CacheStore, ManifestFetcher, PackageSizeReader, ProgressReporter};
use crate::shared::error::TreeError;
use crate::shared::Result;
use log::debug;
use std::path::{Path, PathBuf};

/// File every npm project root must contain
pub const PROJECT_DESCRIPTOR: &str = "package.json";

/// VisualizeTreeUseCase - Core use case for building the dependency tree
///
/// Orchestrates path validation, the cache short-circuit, manifest
/// fetching, size annotation and formatting using generic dependency
/// injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `MF` - ManifestFetcher implementation
/// * `SR` - PackageSizeReader implementation
/// * `CS` - CacheStore implementation
/// * `PR` - ProgressReporter implementation
pub struct VisualizeTreeUseCase<MF, SR, CS, PR> {
    manifest_fetcher: MF,
    size_reader: SR,
    cache_store: CS,
    progress_reporter: PR,
}

impl<MF, SR, CS, PR> VisualizeTreeUseCase<MF, SR, CS, PR>
where
    MF: ManifestFetcher,
    SR: PackageSizeReader,
    CS: CacheStore,
    PR: ProgressReporter,
{
    /// Creates a new VisualizeTreeUseCase with injected dependencies
    pub fn new(manifest_fetcher: MF, size_reader: SR, cache_store: CS, progress_reporter: PR) -> Self {
        Self {
            manifest_fetcher,
            size_reader,
            cache_store,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Arguments
    /// * `request` - Project path and raw filter string
    ///
    /// # Returns
    /// TreeResponse holding the display tree and whether it came from the cache
    ///
    /// # Errors
    /// Returns an error if the path is not a project directory, the manifest
    /// cannot be fetched, or a fresh tree cannot be persisted to the cache.
    /// Nothing is cached when an earlier step fails.
    pub async fn execute(&self, request: TreeRequest) -> Result<TreeResponse> {
        // Step 1: Validate the project directory
        let project_path = Self::resolve_project_path(&request.project_path)?;
        Self::ensure_project_descriptor(&project_path)?;

        // Step 2: Short-circuit on a cached tree
        let key = CacheKey::new(&project_path, &request.filter);
        if let Some(tree) = self.cache_store.lookup(&key) {
            debug!("Cache hit for {}", key);
            self.progress_reporter.report(&format!(
                "♻️  Using cached dependency tree for: {}",
                project_path.display()
            ));
            return Ok(TreeResponse::new(project_path, tree, true));
        }
        debug!("Cache miss for {}", key);

        // Step 3: Fetch, annotate and format
        let tree = self.build_tree(&project_path, &request.filter).await?;

        // Step 4: Persist the fresh tree
        self.cache_store.store(key, &tree)?;

        self.progress_reporter.report_completion(&format!(
            "✅ Resolved {} package(s)",
            tree.node_count()
        ));

        Ok(TreeResponse::new(project_path, tree, false))
    }

    async fn build_tree(&self, project_path: &Path, raw_filter: &str) -> Result<DisplayTree> {
        self.progress_reporter.report_pending(&format!(
            "📦 Reading production dependencies of: {}",
            project_path.display()
        ));
        let manifest = self.manifest_fetcher.fetch_manifest(project_path).await?;

        let names = manifest.dependency_names();
        self.progress_reporter.report(&format!(
            "📏 Measuring {} top-level package(s)...",
            names.len()
        ));
        let sizes = self.size_reader.read_sizes(project_path, &names);

        let filter = PackageFilter::parse(raw_filter);
        if let Some(filter) = &filter {
            debug!("Keeping only {} package name(s)", filter.len());
        }

        let tree = TreeFormatter::format(&manifest, filter.as_ref(), &sizes);
        if filter.is_some() && tree.is_empty() && manifest.dependency_count() > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Filter '{}' did not match any top-level dependency.",
                raw_filter
            ));
        }

        Ok(tree)
    }

    /// Resolves `path` to an absolute, existing directory
    fn resolve_project_path(path: &Path) -> Result<PathBuf> {
        if !path.exists() {
            return Err(TreeError::InvalidProjectPath {
                path: path.to_path_buf(),
                reason: "Directory does not exist".to_string(),
            }
            .into());
        }

        if !path.is_dir() {
            return Err(TreeError::InvalidProjectPath {
                path: path.to_path_buf(),
                reason: "Not a directory".to_string(),
            }
            .into());
        }

        let canonical_path = path
            .canonicalize()
            .map_err(|e| TreeError::InvalidProjectPath {
                path: path.to_path_buf(),
                reason: format!("Failed to canonicalize path: {}", e),
            })?;

        Ok(canonical_path)
    }

    fn ensure_project_descriptor(project_path: &Path) -> Result<()> {
        let descriptor = project_path.join(PROJECT_DESCRIPTOR);
        if !descriptor.is_file() {
            return Err(TreeError::MissingProjectDescriptor { path: descriptor }.into());
        }
        Ok(())
    }
}
