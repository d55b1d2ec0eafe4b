//! npm-dep-tree - dependency tree visualizer for npm projects
//!
//! This library turns the output of `npm ls --json --prod` into a filtered,
//! size-annotated tree, caches the result per project and filter, and renders
//! it as text, JSON, SVG or PNG.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_tree`): Pure tree models and formatting
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use npm_dep_tree::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let manifest_fetcher = NpmManifestFetcher::new();
//! let size_reader = FileSystemSizeReader::new();
//! let cache_store = JsonFileCacheStore::load(".dependency-tree-cache.json")?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = VisualizeTreeUseCase::new(
//!     manifest_fetcher,
//!     size_reader,
//!     cache_store,
//!     progress_reporter,
//! );
//!
//! // Execute
//! let response = use_case.execute(TreeRequest::new(".", "react,lodash")).await?;
//!
//! // Render output
//! let output = TextTreeRenderer::new().render(&response.tree)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_tree;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::exporters::{PngExporter, SvgExporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemSizeReader, FileSystemWriter, JsonFileCacheStore, NoopCacheStore,
        StdoutPresenter,
    };
    pub use crate::adapters::outbound::process::NpmManifestFetcher;
    pub use crate::adapters::outbound::renderers::{JsonTreeRenderer, TextTreeRenderer};
    pub use crate::application::dto::{ExportFormat, OutputMode, TreeRequest, TreeResponse};
    pub use crate::application::use_cases::VisualizeTreeUseCase;
    pub use crate::dependency_tree::domain::{
        CacheKey, DisplayTree, PackageFilter, RawManifestNode, SizeIndex,
    };
    pub use crate::dependency_tree::services::{ExportLayout, HumanSize, TreeFormatter};
    pub use crate::ports::outbound::{
        CacheStore, ManifestFetcher, OutputPresenter, PackageSizeReader, ProgressReporter,
        TreeExporter, TreeRenderer,
    };
    pub use crate::shared::Result;
}
