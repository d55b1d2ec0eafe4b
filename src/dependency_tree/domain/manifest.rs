use crate::shared::Result;
use indexmap::IndexMap;
use serde::Deserialize;

/// Version label used when the package manager reports no resolved version
/// (missing or unmet dependencies).
pub const UNKNOWN_VERSION: &str = "undefined";

/// RawManifestNode represents one package as reported by `npm ls --json`
///
/// The package name is the key under which this node appears in its parent's
/// `dependencies` map. Every other field npm emits (`resolved`, `overridden`,
/// `name`, ...) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawManifestNode {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    dependencies: Option<IndexMap<String, RawManifestNode>>,
}

impl RawManifestNode {
    /// Parses the JSON document printed by the package manager.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse dependency manifest JSON: {}", e))
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Resolved version, or `undefined` when npm did not report one
    pub fn version_label(&self) -> &str {
        self.version().unwrap_or(UNKNOWN_VERSION)
    }

    pub fn dependencies(&self) -> Option<&IndexMap<String, RawManifestNode>> {
        self.dependencies.as_ref()
    }

    /// Names of the direct dependencies, in manifest order
    pub fn dependency_names(&self) -> Vec<String> {
        self.dependencies
            .as_ref()
            .map(|deps| deps.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn dependency_count(&self) -> usize {
        self.dependencies.as_ref().map_or(0, |deps| deps.len())
    }
}
