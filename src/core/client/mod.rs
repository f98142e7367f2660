//! HTTP client for the remote analyzer: resume upload and PDF report download.

mod error;

pub use error::{ClientError, DEFAULT_ERROR_MESSAGE};

use error::error_message_from_body;

use std::path::{Path, PathBuf};

use reqwest::multipart::{Form, Part};

use crate::core::analysis::AnalysisResult;
use crate::core::app;
use crate::core::config::Config;

/// Largest file the analyzer accepts.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

const PDF_MIME: &str = "application/pdf";

/// Check a resume file against the analyzer's upload rules (PDF name, 5 MB cap).
pub fn validate_upload(path: &Path, size: u64) -> Result<(), ClientError> {
    let is_pdf = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(".pdf"));
    if !is_pdf {
        return Err(ClientError::InvalidFileType);
    }
    if size > MAX_UPLOAD_BYTES {
        log::debug!("{} is {} bytes", path.display(), size);
        return Err(ClientError::FileTooLarge);
    }
    Ok(())
}

/// Client for the analyzer's `/analyze` and `/download` endpoints.
#[derive(Clone)]
pub struct AnalyzerClient {
    http: reqwest::Client,
    analyze_url: String,
    download_url: String,
}

impl AnalyzerClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(format!("{}/{}", app::NAME, app::VERSION))
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            analyze_url: config.endpoint("analyze"),
            download_url: config.endpoint("download"),
        })
    }

    /// Upload a resume and return the analysis.
    pub async fn analyze(&self, path: &Path) -> Result<AnalysisResult, ClientError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| ClientError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        validate_upload(path, bytes.len() as u64)?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume.pdf".to_string());
        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(PDF_MIME)
            .map_err(|e| upload_failure(&e))?;
        let form = Form::new().part("file", part);

        log::info!("Uploading {} to {}", path.display(), self.analyze_url);
        let response = self
            .http
            .post(&self.analyze_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| upload_failure(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message_from_body(&body);
            log::warn!("Analyzer returned {}: {}", status, message);
            return Err(ClientError::Analyzer(message));
        }

        response
            .json::<AnalysisResult>()
            .await
            .map_err(|e| upload_failure(&e))
    }

    /// Send an analysis to the report generator and return the PDF bytes.
    pub async fn download(&self, analysis: &AnalysisResult) -> Result<Vec<u8>, ClientError> {
        log::info!("Requesting report from {}", self.download_url);
        let response = self
            .http
            .post(&self.download_url)
            .json(analysis)
            .send()
            .await
            .map_err(|e| download_failure(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!(
                "Report generator returned {}: {}",
                status,
                error_message_from_body(&body)
            );
            return Err(ClientError::Download);
        }

        let bytes = response.bytes().await.map_err(|e| download_failure(&e))?;
        Ok(bytes.to_vec())
    }
}

fn upload_failure(e: &reqwest::Error) -> ClientError {
    log::warn!("Upload failed: {}", e);
    ClientError::Analyzer(DEFAULT_ERROR_MESSAGE.to_string())
}

fn download_failure(e: &reqwest::Error) -> ClientError {
    log::warn!("Download failed: {}", e);
    ClientError::Download
}

/// Write report bytes to `path`, creating parent directories. Returns the path written.
pub fn save_report(bytes: &[u8], path: &Path) -> Result<PathBuf, ClientError> {
    let save_err = |source| ClientError::Save {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(save_err)?;
    }
    std::fs::write(path, bytes).map_err(save_err)?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn unreachable_config() -> Config {
        Config {
            // Port 9 (discard) on loopback: nothing listens in test environments.
            analyzer_url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_secs(5),
            report_dir: PathBuf::from("."),
        }
    }

    #[test]
    fn validate_accepts_small_pdf() {
        assert!(validate_upload(Path::new("cv.pdf"), 1024).is_ok());
        assert!(validate_upload(Path::new("dir/cv.pdf"), MAX_UPLOAD_BYTES).is_ok());
    }

    #[test]
    fn validate_rejects_other_types() {
        for name in ["cv.docx", "cv", "cv.pdf.txt"] {
            assert!(matches!(
                validate_upload(Path::new(name), 10),
                Err(ClientError::InvalidFileType)
            ));
        }
    }

    #[test]
    fn validate_rejects_large_file() {
        let err = validate_upload(Path::new("cv.pdf"), MAX_UPLOAD_BYTES + 1).unwrap_err();
        assert!(matches!(err, ClientError::FileTooLarge));
        assert_eq!(err.to_string(), "File size exceeds 5MB");
    }

    #[test]
    fn save_report_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.pdf");
        let written = save_report(b"%PDF-1.4", &path).unwrap();
        assert_eq!(written, path);
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4");
    }

    #[tokio::test]
    async fn analyze_missing_file_is_read_error() {
        let client = AnalyzerClient::new(&unreachable_config()).unwrap();
        let err = client
            .analyze(Path::new("/nonexistent/resume.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Read { .. }));
    }

    #[tokio::test]
    async fn analyze_rejects_non_pdf_before_upload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "plain text").unwrap();
        let client = AnalyzerClient::new(&unreachable_config()).unwrap();
        let err = client.analyze(&path).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidFileType));
    }

    #[tokio::test]
    async fn analyze_unreachable_analyzer_uses_default_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();
        let client = AnalyzerClient::new(&unreachable_config()).unwrap();
        let err = client.analyze(&path).await.unwrap_err();
        assert_eq!(err.to_string(), DEFAULT_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn download_unreachable_generator_fails() {
        let client = AnalyzerClient::new(&unreachable_config()).unwrap();
        let err = client
            .download(&AnalysisResult::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Download));
    }
}
