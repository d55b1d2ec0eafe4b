use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the tree was displayed (and exported, if requested)
    Success = 0,
    /// The tree was displayed but writing the export file failed
    ExportFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (invalid path, package manager failure, cache I/O, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ExportFailed => write!(f, "Export Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency tree visualization.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the messages user-facing. Missing install directories are
/// not represented here: the size reader recovers them as zero bytes.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory with --path")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("package.json not found: {path}\n\n💡 Hint: Run in the root directory of an npm project, or specify the correct path with the --path option")]
    MissingProjectDescriptor { path: PathBuf },

    #[error("Failed to read the dependency manifest from the package manager\nDetails: {details}\n\n💡 Hint: Make sure npm is installed and `npm install` has been run in the project")]
    ManifestFetchError { details: String },

    #[error("Failed to read cache file: {path}\nDetails: {details}\n\n💡 Hint: Delete the cache file or run with --no-cache")]
    CacheReadError { path: PathBuf, details: String },

    #[error("Failed to write cache file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have write permissions in the working directory")]
    CacheWriteError { path: PathBuf, details: String },

    #[error("Failed to write export file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    ExportWriteError { path: PathBuf, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ExportFailed.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::ExportFailed), "Export Failed (1)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_invalid_project_path_display() {
        let error = TreeError::InvalidProjectPath {
            path: PathBuf::from("/invalid/path"),
            reason: "Directory does not exist".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid project path"));
        assert!(display.contains("/invalid/path"));
        assert!(display.contains("Directory does not exist"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_missing_project_descriptor_display() {
        let error = TreeError::MissingProjectDescriptor {
            path: PathBuf::from("/project/package.json"),
        };
        let display = format!("{}", error);
        assert!(display.contains("package.json not found"));
        assert!(display.contains("/project/package.json"));
    }

    #[test]
    fn test_manifest_fetch_error_display() {
        let error = TreeError::ManifestFetchError {
            details: "npm ERR! missing: left-pad@1.3.0".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("dependency manifest"));
        assert!(display.contains("missing: left-pad@1.3.0"));
    }

    #[test]
    fn test_cache_errors_display() {
        let read = TreeError::CacheReadError {
            path: PathBuf::from(".dependency-tree-cache.json"),
            details: "expected value at line 1".to_string(),
        };
        assert!(format!("{}", read).contains("--no-cache"));

        let write = TreeError::CacheWriteError {
            path: PathBuf::from(".dependency-tree-cache.json"),
            details: "Permission denied".to_string(),
        };
        assert!(format!("{}", write).contains("Permission denied"));
    }

    #[test]
    fn test_export_write_error_display() {
        let error = TreeError::ExportWriteError {
            path: PathBuf::from("/readonly/dependency-tree.svg"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write export file"));
        assert!(display.contains("dependency-tree.svg"));
        assert!(display.contains("Permission denied"));
    }
}
