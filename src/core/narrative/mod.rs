//! Narrative segmentation: turn a free-form analysis string into display items.
//!
//! The analyzer writes strengths, weaknesses and suggestions as loosely formatted
//! bullet text (`* point`, `1. point`, or both). Each field kind has its own
//! [`ExtractionPolicy`] for cutting that text into fragments; every fragment then
//! goes through the same cleaning and label/detail split.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Emphasis marker: bullet delimiter and, residually, inline bold.
const EMPHASIS_MARKER: char = '*';

/// Separates a bold label from its detail text.
const LABEL_SEPARATOR: char = ':';

static BULLET_PATTERN: OnceLock<Regex> = OnceLock::new();
static BULLET_OR_NUMBER_PATTERN: OnceLock<Regex> = OnceLock::new();

/// `* ` bullet marker.
fn bullet_pattern() -> &'static Regex {
    BULLET_PATTERN.get_or_init(|| Regex::new(r"\*\s+").expect("bullet pattern is valid"))
}

/// `1. ` numbered marker (ASCII digits only) or `* ` bullet marker.
fn bullet_or_number_pattern() -> &'static Regex {
    BULLET_OR_NUMBER_PATTERN
        .get_or_init(|| Regex::new(r"(?:[0-9]+\.\s+|\*\s+)").expect("numbered pattern is valid"))
}

/// One of the three narrative attributes of an analysis result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NarrativeField {
    Strengths,
    Weaknesses,
    Suggestions,
}

impl NarrativeField {
    /// All fields, in report order.
    pub const ALL: [NarrativeField; 3] = [
        NarrativeField::Strengths,
        NarrativeField::Weaknesses,
        NarrativeField::Suggestions,
    ];

    /// Heading shown above the field's items.
    pub fn title(self) -> &'static str {
        match self {
            NarrativeField::Strengths => "Strengths",
            NarrativeField::Weaknesses => "Weaknesses",
            NarrativeField::Suggestions => "Suggestions",
        }
    }

    /// Key of the field in the analyzer's JSON (`weeknesses` is misspelled upstream).
    pub fn wire_key(self) -> &'static str {
        match self {
            NarrativeField::Strengths => "strengths",
            NarrativeField::Weaknesses => "weeknesses",
            NarrativeField::Suggestions => "suggestions",
        }
    }

    pub fn policy(self) -> ExtractionPolicy {
        match self {
            NarrativeField::Strengths => ExtractionPolicy::Bullets,
            NarrativeField::Weaknesses => ExtractionPolicy::MarkedBullets,
            NarrativeField::Suggestions => ExtractionPolicy::BulletsOrNumbers,
        }
    }

    /// Segment raw narrative text for this field.
    pub fn segment(self, raw: &str) -> Vec<DisplayItem> {
        segment(self, raw)
    }
}

impl fmt::Display for NarrativeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Unrecognized narrative field name.
#[derive(Debug, thiserror::Error)]
#[error("unknown narrative field '{0}' (expected strengths, weaknesses or suggestions)")]
pub struct UnknownField(String);

impl FromStr for NarrativeField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strengths" => Ok(NarrativeField::Strengths),
            "weaknesses" | "weeknesses" => Ok(NarrativeField::Weaknesses),
            "suggestions" => Ok(NarrativeField::Suggestions),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

/// How a field kind cuts its raw text into fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionPolicy {
    /// Split on `* ` bullets.
    Bullets,
    /// Split on `* ` bullets; drop fragments that carry no emphasis marker
    /// (the preamble before the first bullet, unless it still holds a `*`).
    MarkedBullets,
    /// Split on `1. ` numbers or `* ` bullets.
    BulletsOrNumbers,
}

impl ExtractionPolicy {
    fn pattern(self) -> &'static Regex {
        match self {
            ExtractionPolicy::Bullets | ExtractionPolicy::MarkedBullets => bullet_pattern(),
            ExtractionPolicy::BulletsOrNumbers => bullet_or_number_pattern(),
        }
    }

    /// Split `raw` into non-blank fragments accepted by this policy, in source order.
    pub fn fragments(self, raw: &str) -> Vec<&str> {
        let mut fragments = Vec::new();
        let mut start = 0;
        let mut after_delimiter = false;
        for delimiter in self.pattern().find_iter(raw) {
            self.accept(&mut fragments, &raw[start..delimiter.start()], after_delimiter);
            start = delimiter.end();
            after_delimiter = true;
        }
        self.accept(&mut fragments, &raw[start..], after_delimiter);
        fragments
    }

    fn accept<'a>(self, fragments: &mut Vec<&'a str>, fragment: &'a str, after_delimiter: bool) {
        if fragment.trim().is_empty() {
            return;
        }
        // A fragment introduced by a delimiter carries that delimiter's marker.
        if self == ExtractionPolicy::MarkedBullets
            && !after_delimiter
            && !fragment.contains(EMPHASIS_MARKER)
        {
            return;
        }
        fragments.push(fragment);
    }
}

/// Render-ready unit derived from one fragment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DisplayItem {
    pub label: String,
    pub detail: String,
    /// True iff `label` is non-empty.
    pub emphasized: bool,
}

impl DisplayItem {
    pub fn plain(detail: impl Into<String>) -> Self {
        Self {
            label: String::new(),
            detail: detail.into(),
            emphasized: false,
        }
    }

    pub fn labeled(label: impl Into<String>, detail: impl Into<String>) -> Self {
        let label = label.into();
        let emphasized = !label.is_empty();
        Self {
            label,
            detail: detail.into(),
            emphasized,
        }
    }

    /// Bold prefix shown before the detail, e.g. `"Clarity:"`.
    pub fn display_label(&self) -> Option<String> {
        self.emphasized
            .then(|| format!("{}{}", self.label, LABEL_SEPARATOR))
    }

    /// Single-line plain rendering: `Label: detail` or `detail`.
    pub fn to_plain_text(&self) -> String {
        match self.display_label() {
            Some(label) if self.detail.is_empty() => label,
            Some(label) => format!("{} {}", label, self.detail),
            None => self.detail.clone(),
        }
    }
}

/// Remove every emphasis marker and trim. Idempotent.
pub fn clean_fragment(fragment: &str) -> String {
    fragment
        .replace(EMPHASIS_MARKER, "")
        .trim()
        .to_string()
}

/// Split a cleaned fragment into label and detail at the first colon.
pub fn split_label(cleaned: &str) -> DisplayItem {
    match cleaned.split_once(LABEL_SEPARATOR) {
        Some((label, detail)) if !label.trim().is_empty() => {
            DisplayItem::labeled(label.trim(), detail.trim())
        }
        _ => DisplayItem::plain(cleaned.trim()),
    }
}

/// Segment one raw narrative string into display items, preserving fragment order.
pub fn segment(field: NarrativeField, raw: &str) -> Vec<DisplayItem> {
    field
        .policy()
        .fragments(raw)
        .into_iter()
        .map(|fragment| split_label(&clean_fragment(fragment)))
        .collect()
}

#[cfg(test)]
mod tests;
