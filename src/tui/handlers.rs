//! Event handlers for the TUI: keyboard, mouse, and background requests.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use tokio::runtime::Runtime;

use crate::core::analysis::AnalysisResult;
use crate::core::client::{self, AnalyzerClient, ClientError};

use super::app::App;
use super::constants;

/// Receiver for an upload in progress.
pub type PendingUpload = mpsc::Receiver<Result<AnalysisResult, ClientError>>;

/// Receiver for a report download in progress; yields the saved path.
pub type PendingDownload = mpsc::Receiver<Result<PathBuf, ClientError>>;

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Everything a key press may touch.
pub struct HandleKeyContext<'a> {
    pub app: &'a mut App,
    pub client: &'a AnalyzerClient,
    pub report_path: &'a PathBuf,
    pub pending_upload: &'a mut Option<PendingUpload>,
    pub pending_download: &'a mut Option<PendingDownload>,
    pub rt: &'a Arc<Runtime>,
}

/// Upload on a background thread; the result arrives on the returned receiver.
fn spawn_upload(client: AnalyzerClient, path: PathBuf, rt: &Arc<Runtime>) -> PendingUpload {
    let (tx, rx) = mpsc::channel();
    let rt = Arc::clone(rt);
    thread::spawn(move || {
        let result = rt.block_on(client.analyze(&path));
        let _ = tx.send(result);
    });
    rx
}

/// Download and save the report on a background thread.
fn spawn_download(
    client: AnalyzerClient,
    analysis: AnalysisResult,
    dest: PathBuf,
    rt: &Arc<Runtime>,
) -> PendingDownload {
    let (tx, rx) = mpsc::channel();
    let rt = Arc::clone(rt);
    thread::spawn(move || {
        let result = rt
            .block_on(client.download(&analysis))
            .and_then(|bytes| client::save_report(&bytes, &dest));
        let _ = tx.send(result);
    });
    rx
}

/// Start an upload of the typed path unless one is already in flight.
pub fn start_upload(ctx: &mut HandleKeyContext<'_>) {
    if ctx.pending_upload.is_some() {
        log::debug!("Upload already in progress; ignoring request");
        return;
    }
    if let Some(path) = ctx.app.begin_upload() {
        log::info!("Analyzing {}", path.display());
        *ctx.pending_upload = Some(spawn_upload(ctx.client.clone(), path, ctx.rt));
    }
}

fn start_download(ctx: &mut HandleKeyContext<'_>) {
    if ctx.pending_download.is_some() || ctx.pending_upload.is_some() {
        return;
    }
    if let Some(analysis) = ctx.app.begin_download() {
        *ctx.pending_download = Some(spawn_download(
            ctx.client.clone(),
            analysis,
            ctx.report_path.clone(),
            ctx.rt,
        ));
    }
}

/// Handle a key press.
pub fn handle_key(key: KeyEvent, mut ctx: HandleKeyContext<'_>) -> HandleResult {
    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => return HandleResult::Break,
        KeyCode::Char('c') if ctrl => return HandleResult::Break,
        KeyCode::Char('d') if ctrl => start_download(&mut ctx),
        KeyCode::Char('u') if ctrl => ctx.app.input.clear(),
        KeyCode::Enter => start_upload(&mut ctx),
        KeyCode::Backspace => {
            ctx.app.input.pop();
        }
        KeyCode::Char(c) if !ctrl => ctx.app.input.push(c),
        KeyCode::Up => ctx.app.scroll_up(constants::SCROLL_LINES_ARROW),
        KeyCode::Down => ctx.app.scroll_down(constants::SCROLL_LINES_ARROW),
        KeyCode::PageUp => ctx.app.scroll_up(constants::SCROLL_LINES_PAGE),
        KeyCode::PageDown => ctx.app.scroll_down(constants::SCROLL_LINES_PAGE),
        KeyCode::Home => ctx.app.scroll = 0,
        KeyCode::End => ctx.app.scroll = ctx.app.last_max_scroll,
        _ => {}
    }
    HandleResult::Continue
}

/// Handle a mouse event (wheel scrolls the report).
pub fn handle_mouse(mouse: MouseEvent, app: &mut App) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_up(constants::SCROLL_LINES_SMALL),
        MouseEventKind::ScrollDown => app.scroll_down(constants::SCROLL_LINES_SMALL),
        _ => {}
    }
}

/// Apply finished background requests to the app. Clears receivers that delivered
/// or whose worker went away.
pub fn poll_pending(
    app: &mut App,
    pending_upload: &mut Option<PendingUpload>,
    pending_download: &mut Option<PendingDownload>,
) {
    if let Some(rx) = pending_upload.as_ref() {
        match rx.try_recv() {
            Ok(result) => {
                app.finish_upload(result);
                *pending_upload = None;
            }
            Err(mpsc::TryRecvError::Disconnected) => {
                log::warn!("Upload worker exited without a result");
                app.finish_upload(Err(ClientError::Analyzer(
                    client::DEFAULT_ERROR_MESSAGE.to_string(),
                )));
                *pending_upload = None;
            }
            Err(mpsc::TryRecvError::Empty) => {}
        }
    }
    if let Some(rx) = pending_download.as_ref() {
        match rx.try_recv() {
            Ok(result) => {
                app.finish_download(result);
                *pending_download = None;
            }
            Err(mpsc::TryRecvError::Disconnected) => {
                log::warn!("Download worker exited without a result");
                app.finish_download(Err(ClientError::Download));
                *pending_download = None;
            }
            Err(mpsc::TryRecvError::Empty) => {}
        }
    }
}
