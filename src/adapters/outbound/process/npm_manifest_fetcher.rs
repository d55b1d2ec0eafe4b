use crate::dependency_tree::domain::RawManifestNode;
use crate::ports::outbound::ManifestFetcher;
use crate::shared::error::TreeError;
use crate::shared::Result;
use async_trait::async_trait;
use log::{debug, warn};
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Executable used when none is configured
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// Upper bound on how long the package manager may run
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(120);

/// Lists production dependencies only, as JSON
const LIST_ARGS: [&str; 3] = ["ls", "--json", "--prod"];

/// NpmManifestFetcher adapter that runs `npm ls --json --prod`
///
/// One child process is spawned per fetch, with the project directory as
/// its working directory. The child is killed if it outlives the timeout.
pub struct NpmManifestFetcher {
    program: String,
    timeout: Duration,
}

impl NpmManifestFetcher {
    pub fn new() -> Self {
        Self {
            program: DEFAULT_PACKAGE_MANAGER.to_string(),
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Uses another npm-compatible executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn command_line(&self) -> String {
        format!("{} {}", self.program, LIST_ARGS.join(" "))
    }
}

impl Default for NpmManifestFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ManifestFetcher for NpmManifestFetcher {
    async fn fetch_manifest(&self, project_path: &Path) -> Result<RawManifestNode> {
        debug!(
            "Running `{}` in {}",
            self.command_line(),
            project_path.display()
        );

        let child = Command::new(&self.program)
            .args(LIST_ARGS)
            .current_dir(project_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| TreeError::ManifestFetchError {
                details: format!("Failed to start `{}`: {}", self.command_line(), e),
            })?;

        // Dropping the wait future on timeout drops the child, which kills it.
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| TreeError::ManifestFetchError {
                details: format!("Failed to wait for `{}`: {}", self.command_line(), e),
            })?,
            Err(_) => {
                return Err(TreeError::ManifestFetchError {
                    details: format!(
                        "`{}` did not finish within {} seconds",
                        self.command_line(),
                        self.timeout.as_secs()
                    ),
                }
                .into())
            }
        };

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            let details = match stderr.trim() {
                "" => format!("`{}` exited with {}", self.command_line(), output.status),
                message => format!(
                    "`{}` exited with {}: {}",
                    self.command_line(),
                    output.status,
                    message
                ),
            };
            return Err(TreeError::ManifestFetchError { details }.into());
        }

        // npm prints deprecation notices on stderr even when it succeeds
        if !stderr.trim().is_empty() {
            warn!("{} reported: {}", self.program, stderr.trim());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let manifest = RawManifestNode::from_json(&stdout).map_err(|e| {
            TreeError::ManifestFetchError {
                details: e.to_string(),
            }
        })?;

        debug!(
            "Manifest lists {} top-level dependencies",
            manifest.dependency_count()
        );
        Ok(manifest)
    }
}
