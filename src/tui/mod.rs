//! TUI (Text User Interface): pick a resume, view its analysis report, download the PDF.

mod app;
mod constants;
mod draw;
mod handlers;
mod text;

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Runtime;

use crate::core::client::AnalyzerClient;
use crate::core::config::Config;

use app::App;
use draw::draw;
use handlers::{HandleKeyContext, HandleResult, PendingDownload, PendingUpload};

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), crossterm::event::DisableMouseCapture);
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for upload and download requests.
pub fn run(config: Arc<Config>, initial_file: Option<PathBuf>) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let rt = Arc::new(
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?,
    );
    let client = AnalyzerClient::new(&config)
        .map_err(|e| io::Error::other(format!("Failed to create HTTP client: {}", e)))?;
    let report_path = config.report_path();

    let _guard = TerminalGuard;
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    execute!(stdout, crossterm::event::EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.analyzer_url.clone());
    let mut pending_upload: Option<PendingUpload> = None;
    let mut pending_download: Option<PendingDownload> = None;

    if let Some(file) = initial_file {
        app.input = file.display().to_string();
        handlers::start_upload(&mut HandleKeyContext {
            app: &mut app,
            client: &client,
            report_path: &report_path,
            pending_upload: &mut pending_upload,
            pending_download: &mut pending_download,
            rt: &rt,
        });
    }

    loop {
        handlers::poll_pending(&mut app, &mut pending_upload, &mut pending_download);

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))? {
            match event::read()? {
                Event::Key(key) => {
                    let result = handlers::handle_key(
                        key,
                        HandleKeyContext {
                            app: &mut app,
                            client: &client,
                            report_path: &report_path,
                            pending_upload: &mut pending_upload,
                            pending_download: &mut pending_download,
                            rt: &rt,
                        },
                    );
                    if result == HandleResult::Break {
                        break;
                    }
                }
                Event::Mouse(mouse) => handlers::handle_mouse(mouse, &mut app),
                _ => {}
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
