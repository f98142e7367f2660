//! Text utilities: wrapping and styled lines for report items.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::narrative::DisplayItem;

/// Split text into lines of max width (columns). Uses textwrap for correct UTF-8 handling.
pub(crate) fn wrap_text(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![s.to_string()];
    }
    textwrap::wrap(s, width)
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect()
}

/// Wrap `label text` to `width` with the label in bold. The first line starts with
/// `first_prefix`, continuation lines with `rest_prefix`.
pub(crate) fn labeled_lines(
    label: Option<&str>,
    text: &str,
    width: usize,
    first_prefix: &str,
    rest_prefix: &str,
) -> Vec<Line<'static>> {
    let full = match label {
        Some(l) if text.is_empty() => l.to_string(),
        Some(l) => format!("{} {}", l, text),
        None => text.to_string(),
    };
    let prefix_width = first_prefix.chars().count().max(rest_prefix.chars().count());
    let bold = Style::default().add_modifier(Modifier::BOLD);

    // Characters of the label not yet emitted.
    let mut bold_left = label.map(|l| l.chars().count()).unwrap_or(0);
    let mut lines = Vec::new();
    for (i, chunk) in wrap_text(&full, width.saturating_sub(prefix_width))
        .into_iter()
        .enumerate()
    {
        let prefix = if i == 0 { first_prefix } else { rest_prefix };
        let mut spans = vec![Span::raw(prefix.to_string())];
        let chunk_len = chunk.chars().count();
        if bold_left > 0 {
            let take = bold_left.min(chunk_len);
            let head: String = chunk.chars().take(take).collect();
            let tail: String = chunk.chars().skip(take).collect();
            spans.push(Span::styled(head, bold));
            if !tail.is_empty() {
                spans.push(Span::raw(tail));
            }
            // One more for the space swallowed at the wrap point.
            bold_left = bold_left.saturating_sub(chunk_len + 1);
        } else {
            spans.push(Span::raw(chunk));
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// Bullet lines for one display item: bold `Label:` then the detail.
pub(crate) fn item_lines(item: &DisplayItem, width: usize) -> Vec<Line<'static>> {
    let label = item.display_label();
    labeled_lines(label.as_deref(), &item.detail, width, "  • ", "    ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn wrap_text_wraps_long_line() {
        assert_eq!(wrap_text("hello world test", 8), ["hello", "world", "test"]);
    }

    #[test]
    fn wrap_text_zero_width_keeps_text() {
        assert_eq!(wrap_text("hello world", 0), ["hello world"]);
    }

    #[test]
    fn emphasized_item_has_bold_label() {
        let item = DisplayItem::labeled("Clarity", "Resume is concise");
        let lines = item_lines(&item, 80);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "  • Clarity: Resume is concise");
        let spans = &lines[0].spans;
        assert_eq!(spans[1].content.as_ref(), "Clarity:");
        assert!(spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert!(!spans[2].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn plain_item_has_no_bold() {
        let item = DisplayItem::plain("Too long");
        let lines = item_lines(&item, 80);
        assert_eq!(line_text(&lines[0]), "  • Too long");
        assert!(
            lines[0]
                .spans
                .iter()
                .all(|s| !s.style.add_modifier.contains(Modifier::BOLD))
        );
    }

    #[test]
    fn long_item_wraps_with_indent() {
        let item = DisplayItem::labeled("Impact", "Strong metrics used across every role");
        let lines = item_lines(&item, 24);
        assert!(lines.len() > 1);
        assert!(line_text(&lines[0]).starts_with("  • Impact:"));
        for line in &lines[1..] {
            assert!(line_text(line).starts_with("    "));
            assert!(
                line.spans
                    .iter()
                    .all(|s| !s.style.add_modifier.contains(Modifier::BOLD))
            );
        }
    }

    #[test]
    fn label_only_item() {
        let item = DisplayItem::labeled("Skills", "");
        let lines = item_lines(&item, 80);
        assert_eq!(line_text(&lines[0]), "  • Skills:");
    }
}
