//! Plain-text rendition of an analysis report (headless `analyze` output).

use std::fmt::Write;

use crate::core::analysis::{AnalysisResult, format_score};
use crate::core::narrative::NarrativeField;

/// Render the full report: scores, missing sections, criteria, narrative lists.
pub fn render_report(analysis: &AnalysisResult) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "Resume Score: {}", format_score(analysis.score.value()));
    out.push('\n');

    let series = analysis.score_series();
    let label_width = series
        .bars
        .iter()
        .map(|b| b.label.len())
        .max()
        .unwrap_or(0);
    for bar in &series.bars {
        let _ = writeln!(
            out,
            "  {:<label_width$}  {:>5}  {}",
            bar.label,
            format_score(bar.value),
            score_bar(bar.value, series.axis_max(), 30)
        );
    }
    out.push('\n');

    let _ = writeln!(
        out,
        "Missing Sections: {}",
        analysis.missing_sections_display()
    );
    let _ = writeln!(out, "Scoring Criteria: {}", analysis.scoring_criteria);

    for field in NarrativeField::ALL {
        out.push('\n');
        let _ = writeln!(out, "{}:", field.title());
        let items = analysis.items(field);
        if items.is_empty() {
            out.push_str("  (none)\n");
        }
        for item in &items {
            let _ = writeln!(out, "  • {}", item.to_plain_text());
        }
    }

    if let Some(feedback) = analysis
        .formatting_suggestions
        .as_deref()
        .filter(|f| !f.trim().is_empty())
    {
        out.push('\n');
        out.push_str("Formatting Feedback:\n");
        for line in feedback.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let _ = writeln!(out, "  {}", line);
        }
    }
    out
}

/// Horizontal bar of `width` cells scaled to `max`.
fn score_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value.max(0.0) / max) * width as f64).round() as usize
    } else {
        0
    };
    "█".repeat(filled.min(width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analysis::Score;

    fn analysis() -> AnalysisResult {
        AnalysisResult {
            score: Score::from(78),
            relevance_score: Score::from(80),
            formatting_score: Score::from(70),
            missing_sections: vec!["summary".into()],
            scoring_criteria: "Relevance 70%, formatting 30%.".into(),
            strengths: Some("* Clarity: Resume is concise * Impact: Strong metrics used".into()),
            weaknesses: Some("General note * Lacks metrics * Too long".into()),
            suggestions: None,
            formatting_suggestions: Some("Use consistent fonts.\n\nAdd whitespace.".into()),
            ..Default::default()
        }
    }

    #[test]
    fn report_contains_sections_in_order() {
        let text = render_report(&analysis());
        let order = [
            "Resume Score: 78",
            "Missing Sections: summary",
            "Scoring Criteria: Relevance 70%, formatting 30%.",
            "Strengths:",
            "  • Clarity: Resume is concise",
            "  • Impact: Strong metrics used",
            "Weaknesses:",
            "  • Lacks metrics",
            "  • Too long",
            "Suggestions:",
            "  (none)",
            "Formatting Feedback:",
            "  Use consistent fonts.",
            "  Add whitespace.",
        ];
        let mut from = 0;
        for needle in order {
            let pos = text[from..]
                .find(needle)
                .unwrap_or_else(|| panic!("missing {needle:?} in:\n{text}"));
            from += pos + needle.len();
        }
        assert!(!text.contains("General note"));
    }

    #[test]
    fn report_without_missing_sections_says_none() {
        let mut a = analysis();
        a.missing_sections.clear();
        a.formatting_suggestions = None;
        let text = render_report(&a);
        assert!(text.contains("Missing Sections: None"));
        assert!(!text.contains("Formatting Feedback"));
    }

    #[test]
    fn score_bar_scales() {
        assert_eq!(score_bar(50.0, 100.0, 10).chars().count(), 5);
        assert_eq!(score_bar(0.0, 100.0, 10), "");
        assert_eq!(score_bar(150.0, 100.0, 10).chars().count(), 10);
        assert_eq!(score_bar(10.0, 0.0, 10), "");
    }
}
