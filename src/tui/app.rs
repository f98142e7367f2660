//! TUI application state: report session, path input, scroll.

use std::path::PathBuf;

use crate::core::analysis::AnalysisResult;
use crate::core::client::ClientError;
use crate::core::state::{ReportEvent, ReportState};

/// Request currently in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Busy {
    Uploading,
    Downloading,
}

pub struct App {
    pub(crate) state: ReportState,
    /// Resume path typed by the user.
    pub(crate) input: String,
    /// Informational line (e.g. where the report was saved).
    pub(crate) notice: Option<String>,
    pub(crate) busy: Option<Busy>,
    pub(crate) scroll: usize,
    pub(crate) last_max_scroll: usize,
    /// Analyzer base URL displayed in the header.
    pub(crate) analyzer_url: String,
}

impl App {
    pub fn new(analyzer_url: String) -> Self {
        Self {
            state: ReportState::new(),
            input: String::new(),
            notice: None,
            busy: None,
            scroll: 0,
            last_max_scroll: 0,
            analyzer_url,
        }
    }

    pub(crate) fn dispatch(&mut self, event: ReportEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event);
    }

    /// Select the typed path (if any) and return the file to upload.
    /// Records the precondition error when no file is selected.
    pub(crate) fn begin_upload(&mut self) -> Option<PathBuf> {
        let typed = self.input.trim();
        if !typed.is_empty() {
            let path = PathBuf::from(typed);
            self.dispatch(ReportEvent::FileSelected(path));
        }
        self.notice = None;
        match self.state.upload_request() {
            Ok(path) => {
                let path = path.to_path_buf();
                self.busy = Some(Busy::Uploading);
                self.scroll = 0;
                Some(path)
            }
            Err(e) => {
                self.dispatch(ReportEvent::AnalysisFailed(e.to_string()));
                None
            }
        }
    }

    pub(crate) fn finish_upload(&mut self, result: Result<AnalysisResult, ClientError>) {
        self.busy = None;
        match result {
            Ok(analysis) => self.dispatch(ReportEvent::AnalysisSucceeded(analysis)),
            Err(e) => self.dispatch(ReportEvent::AnalysisFailed(e.to_string())),
        }
    }

    /// Analysis to send for the PDF report. Records the precondition error when none is held.
    pub(crate) fn begin_download(&mut self) -> Option<AnalysisResult> {
        self.notice = None;
        match self.state.download_request() {
            Ok(analysis) => {
                let analysis = analysis.clone();
                self.busy = Some(Busy::Downloading);
                Some(analysis)
            }
            Err(e) => {
                self.dispatch(ReportEvent::DownloadFailed(e.to_string()));
                None
            }
        }
    }

    pub(crate) fn finish_download(&mut self, result: Result<PathBuf, ClientError>) {
        self.busy = None;
        match result {
            Ok(path) => self.notice = Some(format!("Report saved to {}", path.display())),
            Err(e) => self.dispatch(ReportEvent::DownloadFailed(e.to_string())),
        }
    }

    pub(crate) fn scroll_down(&mut self, n: usize) {
        self.scroll = (self.scroll + n).min(self.last_max_scroll);
    }

    pub(crate) fn scroll_up(&mut self, n: usize) {
        self.scroll = self.scroll.saturating_sub(n);
    }
}
