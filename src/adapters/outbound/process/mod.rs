/// Process adapters that run external tools
mod npm_manifest_fetcher;

pub use npm_manifest_fetcher::{NpmManifestFetcher, DEFAULT_FETCH_TIMEOUT, DEFAULT_PACKAGE_MANAGER};
