use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Analyzer address used when `RESUME_ANALYZER_URL` is unset.
pub const DEFAULT_ANALYZER_URL: &str = "http://127.0.0.1:5000";

/// Request timeout used when `RESUME_ANALYZER_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// File name of a downloaded report.
pub const REPORT_FILE_NAME: &str = "resume_analysis_report.pdf";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the analyzer (no trailing slash).
    pub analyzer_url: String,
    pub timeout: Duration,
    /// Directory where downloaded reports are written.
    pub report_dir: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("RESUME_ANALYZER_URL must start with http:// or https:// (got '{0}')")]
    InvalidUrl(String),
    #[error("RESUME_ANALYZER_TIMEOUT_SECS must be a positive integer (got '{0}')")]
    InvalidTimeout(String),
}

impl Config {
    /// Replace the analyzer URL (e.g. from `--url`).
    pub fn with_url_override(mut self, url: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(url) = url {
            self.analyzer_url = parse_url(url)?;
        }
        Ok(self)
    }

    /// Endpoint URL under the analyzer base, e.g. `endpoint("analyze")`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.analyzer_url, path.trim_start_matches('/'))
    }

    /// Default destination of a downloaded report.
    pub fn report_path(&self) -> PathBuf {
        self.report_dir.join(REPORT_FILE_NAME)
    }
}

fn parse_url(raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl(raw.to_string()));
    }
    Ok(url.trim_end_matches('/').to_string())
}

/// Load configuration from environment.
pub fn load() -> Result<Config, ConfigError> {
    from_lookup(|key| env::var(key).ok())
}

/// Build configuration from a variable lookup (environment in production).
pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let analyzer_url = match present("RESUME_ANALYZER_URL") {
        Some(url) => parse_url(&url)?,
        None => DEFAULT_ANALYZER_URL.to_string(),
    };

    let timeout_secs = match present("RESUME_ANALYZER_TIMEOUT_SECS") {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or(ConfigError::InvalidTimeout(raw))?,
        None => DEFAULT_TIMEOUT_SECS,
    };

    let report_dir = present("RESUME_REPORT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(Config {
        analyzer_url,
        timeout: Duration::from_secs(timeout_secs),
        report_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.analyzer_url, DEFAULT_ANALYZER_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.report_path(), PathBuf::from(".").join(REPORT_FILE_NAME));
    }

    #[test]
    fn reads_env_values() {
        let config = from_lookup(lookup(&[
            ("RESUME_ANALYZER_URL", "https://analyzer.example.com/"),
            ("RESUME_ANALYZER_TIMEOUT_SECS", "30"),
            ("RESUME_REPORT_DIR", "/tmp/reports"),
        ]))
        .unwrap();
        assert_eq!(config.analyzer_url, "https://analyzer.example.com");
        assert_eq!(config.endpoint("analyze"), "https://analyzer.example.com/analyze");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(
            config.report_path(),
            PathBuf::from("/tmp/reports/resume_analysis_report.pdf")
        );
    }

    #[test]
    fn rejects_non_http_url() {
        let err = from_lookup(lookup(&[("RESUME_ANALYZER_URL", "ftp://host")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));
    }

    #[test]
    fn rejects_zero_timeout() {
        let err =
            from_lookup(lookup(&[("RESUME_ANALYZER_TIMEOUT_SECS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout(_)));
        let err =
            from_lookup(lookup(&[("RESUME_ANALYZER_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("soon"));
    }

    #[test]
    fn url_override() {
        let config = from_lookup(lookup(&[]))
            .unwrap()
            .with_url_override(Some("http://10.0.0.5:8080/"))
            .unwrap();
        assert_eq!(config.endpoint("/download"), "http://10.0.0.5:8080/download");
        assert!(
            from_lookup(lookup(&[]))
                .unwrap()
                .with_url_override(Some("localhost"))
                .is_err()
        );
    }
}
