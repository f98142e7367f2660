//! # resume-report
//!
//! Client for the resume analyzer: uploads a resume, shows the scoring report
//! (score chart plus itemized strengths, weaknesses and suggestions) and
//! downloads its PDF rendition.
//!
//! ## Modes
//! - Interactive terminal UI (default)
//! - Headless subcommands: `analyze`, `download`, `segment`, `config`, `completions`

mod cli;
mod core;
mod run;
mod tui;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    if let Some(Commands::Completions { shell }) = args.command {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        cli::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    // Segmentation is local; it needs no analyzer configuration.
    if let Some(Commands::Segment { field, input, json }) = &args.command {
        core::cli::run_segment(*field, input.as_deref(), *json);
        return Ok(());
    }

    let config = core::config::load()
        .and_then(|c| c.with_url_override(args.url.as_deref()))
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
    log::debug!("Analyzer at {}", config.analyzer_url);

    match args.command {
        Some(Commands::Analyze { file, json }) => {
            core::cli::run_analyze(&config, &file, json).await;
        }
        Some(Commands::Download {
            analysis,
            output,
            open,
        }) => {
            core::cli::run_download(&config, &analysis, output, open).await;
        }
        Some(Commands::Config) => core::cli::run_config(&config),
        Some(Commands::Segment { .. }) | Some(Commands::Completions { .. }) => {}
        None => run::launch_tui(config, args.file).await?,
    }

    Ok(())
}
