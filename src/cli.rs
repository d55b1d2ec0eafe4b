use clap::Parser;
use npm_dep_tree::adapters::outbound::filesystem::DEFAULT_CACHE_FILE;
use npm_dep_tree::adapters::outbound::process::{DEFAULT_FETCH_TIMEOUT, DEFAULT_PACKAGE_MANAGER};
use npm_dep_tree::application::dto::{ExportFormat, OutputMode};
use npm_dep_tree::config::ConfigFile;
use npm_dep_tree::shared::Result;
use std::path::PathBuf;
use std::time::Duration;

/// Display the production dependency tree of an npm project
#[derive(Parser, Debug)]
#[command(name = "npm-dep-tree")]
#[command(version)]
#[command(
    about = "Display the production dependency tree of an npm project with installed package sizes",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Output mode: tree or json
    #[arg(short, long, value_name = "MODE")]
    pub output: Option<OutputMode>,

    /// Also write the text tree to a file: no, image or svg
    #[arg(short, long, value_name = "FORMAT")]
    pub export: Option<ExportFormat>,

    /// Comma-separated package names to keep, e.g. "react,lodash"
    #[arg(short, long, value_name = "LIST")]
    pub filter: Option<String>,

    /// Path to a config file (defaults to npm-dep-tree.config.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// npm-compatible executable used to list dependencies
    #[arg(long, value_name = "CMD")]
    pub package_manager: Option<String>,

    /// Seconds to wait for the package manager before giving up
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Location of the result cache
    #[arg(long, value_name = "FILE")]
    pub cache_file: Option<PathBuf>,

    /// Neither read nor update the result cache
    #[arg(long)]
    pub no_cache: bool,
}

/// Effective settings after merging flags, config file and defaults
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub project_path: PathBuf,
    pub output: OutputMode,
    pub export: ExportFormat,
    pub filter: String,
    pub package_manager: String,
    pub timeout: Duration,
    pub cache_file: PathBuf,
    pub no_cache: bool,
}

impl Args {
    /// Directory searched for the config file
    pub fn project_dir(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Merges these flags over `config`, falling back to built-in defaults
    ///
    /// # Errors
    /// Returns an error if a config value cannot be parsed
    pub fn resolve(self, config: Option<ConfigFile>) -> Result<Settings> {
        let config = config.unwrap_or_default();
        let project_path = self.project_dir();

        let output = match (self.output, config.output.as_deref()) {
            (Some(mode), _) => mode,
            (None, Some(raw)) => raw.parse().map_err(anyhow::Error::msg)?,
            (None, None) => OutputMode::default(),
        };

        let export = match (self.export, config.export.as_deref()) {
            (Some(format), _) => format,
            (None, Some(raw)) => raw.parse().map_err(anyhow::Error::msg)?,
            (None, None) => ExportFormat::default(),
        };

        let timeout = self
            .timeout
            .or(config.timeout_secs)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_FETCH_TIMEOUT);

        Ok(Settings {
            project_path,
            output,
            export,
            filter: self.filter.or(config.filter).unwrap_or_default(),
            package_manager: self
                .package_manager
                .or(config.package_manager)
                .unwrap_or_else(|| DEFAULT_PACKAGE_MANAGER.to_string()),
            timeout,
            cache_file: self
                .cache_file
                .or(config.cache_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_FILE)),
            no_cache: self.no_cache || config.no_cache.unwrap_or(false),
        })
    }
}
