//! TUI rendering: layout and widgets for the report screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Bar, BarChart, BarGroup, Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation,
    ScrollbarState,
};
use std::time::Instant;

use crate::core::analysis::{AnalysisResult, CHART_TITLE, SERIES_LABEL, format_score};
use crate::core::narrative::NarrativeField;
use crate::core::state::ReportState;

use super::app::{App, Busy};
use super::constants::{
    ACCENT, BAR_COLORS, CHART_HEIGHT, ERROR, LOGO_BUSY, LOGO_IDLE, MAX_BAR_WIDTH,
};
use super::text::{item_lines, labeled_lines, wrap_text};

/// Start time for header animation phase (busy spinner).
static HEADER_START: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

/// Max width for the analyzer URL in the header; longer URLs are truncated with "…".
const URL_HEADER_WIDTH: u16 = 32;

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, app, chunks[0]);
    draw_input(f, app, chunks[1]);
    draw_status(f, app, chunks[2]);
    draw_body(f, app, chunks[3]);
    draw_shortcuts(f, chunks[4]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(URL_HEADER_WIDTH),
        ])
        .split(area);

    let logo_symbol = if app.busy.is_some() {
        let start = HEADER_START.get_or_init(Instant::now);
        let phase = start.elapsed().as_millis() as usize;
        LOGO_BUSY[(phase / 80) % LOGO_BUSY.len()]
    } else {
        LOGO_IDLE
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{} ", logo_symbol),
            Style::default().fg(ACCENT),
        ))),
        header_chunks[0],
    );

    let title = Line::from(Span::styled(
        "Resume Scoring Application",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(
        Paragraph::new(title).alignment(Alignment::Center),
        header_chunks[1],
    );

    let max_len = URL_HEADER_WIDTH as usize;
    let url_display = if app.analyzer_url.chars().count() > max_len {
        let chars: Vec<char> = app.analyzer_url.chars().collect();
        let start = chars.len().saturating_sub(max_len.saturating_sub(1));
        format!("…{}", chars[start..].iter().collect::<String>())
    } else {
        app.analyzer_url.clone()
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            url_display,
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Right),
        header_chunks[2],
    );
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let content = if app.input.is_empty() {
        Span::styled("Path to a PDF resume... ", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(app.input.as_str())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Resume ");
    let inner = block.inner(area);
    f.render_widget(
        Paragraph::new(Line::from(content))
            .block(block)
            .style(Style::default().fg(Color::White)),
        area,
    );
    let typed = app.input.chars().count().min(inner.width as usize) as u16;
    f.set_cursor_position(Position::new(inner.x + typed, inner.y));
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(err) = app.state.error() {
        Line::from(Span::styled(err.to_string(), Style::default().fg(ERROR)))
    } else if let Some(busy) = app.busy {
        let text = match busy {
            Busy::Uploading => "Analyzing resume…",
            Busy::Downloading => "Downloading report…",
        };
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else if let Some(notice) = &app.notice {
        Line::from(Span::styled(notice.clone(), Style::default().fg(ACCENT)))
    } else {
        Line::from("")
    };
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_body(f: &mut Frame, app: &mut App, area: Rect) {
    let Some(analysis) = app.state.analysis().cloned() else {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Type the path of a PDF resume and press Enter to analyze it.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(hint, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CHART_HEIGHT), Constraint::Min(1)])
        .split(area);
    draw_chart(f, &analysis, chunks[0]);
    draw_details(f, app, chunks[1]);
}

fn draw_chart(f: &mut Frame, analysis: &AnalysisResult, area: Rect) {
    let series = analysis.score_series();
    let bars: Vec<Bar> = series
        .bars
        .iter()
        .zip(BAR_COLORS)
        .map(|(bar, color)| {
            Bar::default()
                .value(bar.value.max(0.0).round() as u64)
                .text_value(format_score(bar.value))
                .label(Line::from(bar.label))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", CHART_TITLE))
        .title_bottom(Line::from(format!(" {} ", SERIES_LABEL)));
    let inner_width = block.inner(area).width;
    let gap = 2;
    let bar_width = (inner_width.saturating_sub(gap * 4) / 3).clamp(1, MAX_BAR_WIDTH);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(gap)
        .max(series.axis_max().round() as u64);
    f.render_widget(chart, area);
}

/// All detail lines of the held report, wrapped to `width`.
fn detail_lines(state: &ReportState, width: usize) -> Vec<Line<'static>> {
    let Some(analysis) = state.analysis() else {
        return Vec::new();
    };
    let heading = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(Span::styled(
        format!("Resume Score: {}", format_score(analysis.score.value())),
        heading,
    ))];
    lines.extend(labeled_lines(
        Some("Missing Sections:"),
        &analysis.missing_sections_display(),
        width,
        "",
        "",
    ));
    lines.extend(labeled_lines(
        Some("Scoring Criteria:"),
        &analysis.scoring_criteria,
        width,
        "",
        "",
    ));

    for field in NarrativeField::ALL {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("{}:", field.title()), heading)));
        let items = state.items(field);
        if items.is_empty() {
            lines.push(Line::from(Span::styled(
                "  (none)",
                Style::default().fg(Color::DarkGray),
            )));
        }
        for item in &items {
            lines.extend(item_lines(item, width));
        }
    }

    if let Some(feedback) = analysis
        .formatting_suggestions
        .as_deref()
        .filter(|f| !f.trim().is_empty())
    {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Formatting Feedback:", heading)));
        for raw in feedback.lines().map(str::trim).filter(|l| !l.is_empty()) {
            for chunk in wrap_text(raw, width.saturating_sub(2)) {
                lines.push(Line::from(format!("  {}", chunk)));
            }
        }
    }
    lines
}

fn draw_details(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let text_area = chunks[0];
    let scrollbar_area = chunks[1];

    let lines = detail_lines(&app.state, text_area.width.saturating_sub(1) as usize);
    let total_lines = lines.len();
    let visible = text_area.height as usize;
    let max_scroll = total_lines.saturating_sub(visible);
    app.last_max_scroll = max_scroll;
    let scroll_pos = app.scroll.min(max_scroll);
    let visible_lines: Vec<Line> = lines.into_iter().skip(scroll_pos).take(visible).collect();
    f.render_widget(Paragraph::new(visible_lines), text_area);

    let mut scrollbar_state = ScrollbarState::default()
        .position(scroll_pos)
        .content_length(max_scroll);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_symbol("█")
        .track_symbol(Some("│"));
    f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
}

fn draw_shortcuts(f: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::DarkGray);
    let shortcuts = Line::from(vec![
        Span::styled("Enter ", key),
        Span::raw("analyze"),
        Span::styled("  Ctrl+D ", key),
        Span::raw("download"),
        Span::styled("  ↑↓ ", key),
        Span::raw("scroll"),
        Span::styled("  Esc ", key),
        Span::raw("quit"),
    ]);
    f.render_widget(Paragraph::new(shortcuts).alignment(Alignment::Right), area);
}
