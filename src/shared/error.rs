use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Build integrations use these to tell a broken build topology apart
/// from a usage mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The application model report was produced
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (I/O, malformed build model, inconsistent build topology)
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
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency-info collection.
///
/// Only the topology variants are raised by the reconciliation core; POM and
/// metadata gaps never surface as errors.
#[derive(Debug, Error)]
pub enum DepInfoError {
    #[error("Failed to find project for dependency: {path} (declared by {declared_by})\n\n💡 Hint: The build model is inconsistent. Re-export it from the build tool.")]
    ProjectNotFound { path: String, declared_by: String },

    #[error("Failed to resolve project component for project '{project_path}' in build '{build_path}'\n\n💡 Hint: Check that every included build is present in the build model.")]
    ProjectComponentUnresolved {
        build_path: String,
        project_path: String,
    },

    #[error("Build model file not found: {path}\n\n💡 Hint: {suggestion}")]
    BuildModelNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse build model: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file was exported by a compatible build plugin")]
    BuildModelParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Validation error for builder patterns and coordinates
    #[error("Validation error: {message}")]
    Validation { message: String },
}
