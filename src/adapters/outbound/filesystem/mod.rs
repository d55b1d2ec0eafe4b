/// Filesystem adapters for file I/O operations
mod cache_store;
mod file_writer;
mod size_reader;

pub use cache_store::{JsonFileCacheStore, NoopCacheStore, DEFAULT_CACHE_FILE};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use size_reader::{FileSystemSizeReader, INSTALL_ROOT};
