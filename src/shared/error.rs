use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// CI systems use these to tell a failing grade apart from a broken run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - grade at or above the configured minimum (or no minimum set)
    Success = 0,
    /// The top-level package grade is worse than the configured minimum
    GradeBelowMinimum = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, parse error, file I/O error, etc.)
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
            ExitCode::GradeBelowMinimum => write!(f, "Grade Below Minimum (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for package scoring.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// A score input that cannot be scored meaningfully (negative count, NaN freshness)
    #[error("Invalid score input: {field}\nReason: {reason}\n\n💡 Hint: Counts must be non-negative integers and the freshness score a finite number")]
    InvalidInput { field: String, reason: String },

    #[error("Failed to parse package report from {source_name}\nDetails: {details}\n\n💡 Hint: Please verify that the report is the JSON returned by /api/v1/package")]
    ReportParseError {
        source_name: String,
        details: String,
    },

    #[error("No package report found for {package}@{version}\n\n💡 Hint: Check the package name and version, or start a scan on the website first")]
    ReportNotFound { package: String, version: String },

    #[error("Package report for {package}@{version} is not ready yet\n\n💡 Hint: A scan is in progress; run the command again once it has finished")]
    ReportPending { package: String, version: String },

    #[error("Scoring API returned status {status}\nDetails: {details}\n\n💡 Hint: Please verify the API URL and that the service is reachable")]
    ApiError { status: u16, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for value objects and builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl ScoreError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ScoreError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
