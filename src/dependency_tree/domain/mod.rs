pub mod cache_key;
pub mod display_tree;
pub mod manifest;
pub mod package_filter;
pub mod size_index;

pub use cache_key::CacheKey;
pub use display_tree::DisplayTree;
pub use manifest::RawManifestNode;
pub use package_filter::PackageFilter;
pub use size_index::SizeIndex;
