//! Analyzer client error types.

use std::io;
use std::path::PathBuf;

/// Message shown when the analyzer fails without saying why.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred.";

/// Message shown when the report cannot be downloaded.
pub const DOWNLOAD_ERROR_MESSAGE: &str = "Failed to download the report.";

/// Errors from uploading a resume or downloading its report.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid file type. Only PDF is allowed")]
    InvalidFileType,
    #[error("File size exceeds 5MB")]
    FileTooLarge,
    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    /// Analyzer rejected or failed the upload; holds the user-facing message.
    #[error("{0}")]
    Analyzer(String),
    #[error("{}", DOWNLOAD_ERROR_MESSAGE)]
    Download,
    #[error("Failed to save report to {}: {source}", path.display())]
    Save { path: PathBuf, source: io::Error },
}

/// Extract the analyzer's `error` message from a response body, falling back
/// to [`DEFAULT_ERROR_MESSAGE`].
pub fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error")?.as_str().map(str::to_string))
        .map(|msg| msg.trim().to_string())
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())
}
