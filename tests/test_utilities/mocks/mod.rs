//! Mock implementations for testing
#![allow(dead_code)]

mod mock_cache_store;
mod mock_manifest_fetcher;
mod mock_progress_reporter;
mod mock_size_reader;

pub use mock_cache_store::MockCacheStore;
pub use mock_manifest_fetcher::MockManifestFetcher;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_size_reader::MockSizeReader;
