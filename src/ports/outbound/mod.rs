/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (package manager, file system, console).
pub mod cache_store;
pub mod manifest_fetcher;
pub mod output_presenter;
pub mod package_size_reader;
pub mod progress_reporter;
pub mod tree_exporter;
pub mod tree_renderer;

pub use cache_store::CacheStore;
pub use manifest_fetcher::ManifestFetcher;
pub use output_presenter::OutputPresenter;
pub use package_size_reader::PackageSizeReader;
pub use progress_reporter::ProgressReporter;
pub use tree_exporter::TreeExporter;
pub use tree_renderer::TreeRenderer;
