//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use crate::core::narrative::NarrativeField;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  resume-report                                Launch interactive TUI
  resume-report cv.pdf                         Launch TUI and analyze cv.pdf
  resume-report analyze cv.pdf                 Print the analysis report to stdout
  resume-report analyze cv.pdf --json > a.json Save the raw analysis
  resume-report download a.json -o report.pdf  Download the PDF report for an analysis
  resume-report segment weaknesses notes.txt   Show how a narrative text is itemized
  resume-report config                         Show effective configuration
  resume-report completions bash               Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Upload a resume to the analyzer and view its scoring report",
    after_help = AFTER_HELP,
    args_conflicts_with_subcommands = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Resume to analyze as soon as the TUI opens
    pub file: Option<PathBuf>,

    /// Analyzer base URL (overrides RESUME_ANALYZER_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a resume (PDF) and print the analysis report
    Analyze {
        /// Resume PDF to upload
        file: PathBuf,
        /// Print the raw analysis JSON instead of the formatted report
        #[arg(long)]
        json: bool,
    },
    /// Download the PDF report for a saved analysis (JSON file or '-' for stdin)
    Download {
        /// Analysis JSON produced by `analyze --json`
        analysis: String,
        /// Output path (defaults to resume_analysis_report.pdf in RESUME_REPORT_DIR)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Open the report with the default viewer after saving
        #[arg(long)]
        open: bool,
    },
    /// Split a narrative text into display items (reads stdin when no input given)
    Segment {
        /// Narrative field kind: strengths, weaknesses or suggestions
        field: NarrativeField,
        /// Text file to read, or '-' for stdin
        input: Option<String>,
        /// Print items as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show analyzer URL, report directory and log path
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// True when the run opens the TUI (no subcommand).
    pub fn is_tui(&self) -> bool {
        self.command.is_none()
    }
}
