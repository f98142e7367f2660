//! CLI-only commands: analyze, download, segment, config.
//!
//! These run without opening the TUI and produce plain text output.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::core::analysis::AnalysisResult;
use crate::core::client::{self, AnalyzerClient};
use crate::core::config::Config;
use crate::core::narrative::NarrativeField;
use crate::core::paths;
use crate::core::report;

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

/// Read a file, or stdin when `source` is `None` or `-`.
fn read_input(source: Option<&str>) -> io::Result<String> {
    match source {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => std::fs::read_to_string(path),
    }
}

fn build_client(config: &Config) -> AnalyzerClient {
    AnalyzerClient::new(config).unwrap_or_else(|e| fail(format!("HTTP client: {}", e)))
}

/// Run the `analyze` command: upload the resume and print the report (or raw JSON).
pub async fn run_analyze(config: &Config, file: &Path, json: bool) {
    let client = build_client(config);
    let analysis = match client.analyze(file).await {
        Ok(a) => a,
        Err(e) => fail(e),
    };

    if json {
        match serde_json::to_string_pretty(&analysis) {
            Ok(s) => println!("{}", s),
            Err(e) => fail(e),
        }
    } else {
        print!("{}", report::render_report(&analysis));
    }
}

/// Run the `download` command: send a saved analysis to the report generator and save the PDF.
pub async fn run_download(config: &Config, analysis: &str, output: Option<PathBuf>, open: bool) {
    let raw = read_input(Some(analysis))
        .unwrap_or_else(|e| fail(format!("Failed to read {}: {}", analysis, e)));
    let analysis: AnalysisResult = serde_json::from_str(&raw)
        .unwrap_or_else(|e| fail(format!("Invalid analysis JSON: {}", e)));

    let client = build_client(config);
    let bytes = match client.download(&analysis).await {
        Ok(b) => b,
        Err(e) => fail(e),
    };

    let path = output.unwrap_or_else(|| config.report_path());
    let written = client::save_report(&bytes, &path).unwrap_or_else(|e| fail(e));
    println!("Report saved to {}", written.display());

    if open && let Err(e) = opener::open(&written) {
        log::warn!("Failed to open {}: {}", written.display(), e);
        eprintln!("Warning: could not open the report: {}", e);
    }
}

/// Run the `segment` command: print the display items of a narrative text.
pub fn run_segment(field: NarrativeField, input: Option<&str>, json: bool) {
    let raw = read_input(input).unwrap_or_else(|e| fail(format!("Failed to read input: {}", e)));
    let items = field.segment(&raw);

    if json {
        match serde_json::to_string_pretty(&items) {
            Ok(s) => println!("{}", s),
            Err(e) => fail(e),
        }
        return;
    }

    for item in &items {
        println!("• {}", item.to_plain_text());
    }
    log::info!("{} item(s) from {} text", items.len(), field);
}

/// Run the `config` command: display analyzer URL, timeout, report path and log path.
pub fn run_config(config: &Config) {
    let log_file = paths::log_file()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string());

    println!("Analyzer:     {}", config.analyzer_url);
    println!("Timeout:      {}s", config.timeout.as_secs());
    println!("Report:       {}", config.report_path().display());
    println!("TUI log:      {}", log_file);
}
