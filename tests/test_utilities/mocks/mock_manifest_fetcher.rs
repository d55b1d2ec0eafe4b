use async_trait::async_trait;
use npm_dep_tree::prelude::*;
use npm_dep_tree::shared::error::TreeError;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock ManifestFetcher returning a fixed `npm ls` document
///
/// Clones share the call counter, so a test can keep one handle while the
/// use case owns another.
#[derive(Clone)]
pub struct MockManifestFetcher {
    output: std::result::Result<String, String>,
    calls: Arc<AtomicUsize>,
    paths: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockManifestFetcher {
    pub fn new(manifest_json: &str) -> Self {
        Self {
            output: Ok(manifest_json.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
            paths: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A fetcher that fails like a package manager exiting with an error
    pub fn failing(details: &str) -> Self {
        Self {
            output: Err(details.to_string()),
            ..Self::new("{}")
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested_paths(&self) -> Vec<PathBuf> {
        self.paths.lock().unwrap().clone()
    }
}

#[async_trait]
impl ManifestFetcher for MockManifestFetcher {
    async fn fetch_manifest(&self, project_path: &Path) -> Result<RawManifestNode> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.paths.lock().unwrap().push(project_path.to_path_buf());

        match &self.output {
            Ok(json) => RawManifestNode::from_json(json),
            Err(details) => Err(TreeError::ManifestFetchError {
                details: details.clone(),
            }
            .into()),
        }
    }
}
