//! Report session state: selected file, current analysis, current error.
//!
//! The state is an immutable value; every change goes through [`ReportState::apply`].

use std::path::{Path, PathBuf};

use crate::core::analysis::AnalysisResult;
use crate::core::narrative::{DisplayItem, NarrativeField};

/// Something that happened in the session.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEvent {
    FileSelected(PathBuf),
    AnalysisSucceeded(AnalysisResult),
    AnalysisFailed(String),
    DownloadFailed(String),
}

/// An action was requested before its inputs exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PreconditionError {
    #[error("Please upload a file.")]
    NoFileSelected,
    #[error("Please analyze a resume before downloading the report.")]
    NoAnalysis,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportState {
    file: Option<PathBuf>,
    analysis: Option<AnalysisResult>,
    error: Option<String>,
}

impl ReportState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next state after `event`.
    pub fn apply(self, event: ReportEvent) -> Self {
        match event {
            ReportEvent::FileSelected(path) => Self {
                file: Some(path),
                analysis: None,
                error: None,
            },
            ReportEvent::AnalysisSucceeded(result) => Self {
                analysis: Some(result),
                error: None,
                ..self
            },
            ReportEvent::AnalysisFailed(message) | ReportEvent::DownloadFailed(message) => Self {
                error: Some(message),
                ..self
            },
        }
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// File to upload, if one is selected.
    pub fn upload_request(&self) -> Result<&Path, PreconditionError> {
        self.file().ok_or(PreconditionError::NoFileSelected)
    }

    /// Analysis to send to the report generator, if one is held.
    pub fn download_request(&self) -> Result<&AnalysisResult, PreconditionError> {
        self.analysis().ok_or(PreconditionError::NoAnalysis)
    }

    /// Display items of the held analysis for `field`; empty when nothing is held.
    pub fn items(&self, field: NarrativeField) -> Vec<DisplayItem> {
        self.analysis()
            .map(|a| a.items(field))
            .unwrap_or_default()
    }
}
