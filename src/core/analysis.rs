//! Analysis result returned by the remote analyzer, and views derived from it.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use crate::core::narrative::{DisplayItem, NarrativeField};

/// Chart title for the score bars.
pub const CHART_TITLE: &str = "Resume Analysis Scores";

/// Legend label of the score series.
pub const SERIES_LABEL: &str = "Resume Scores";

/// Analyzer response. Unknown fields are kept so the object can be sent back
/// unchanged to the report generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: Score,
    #[serde(default, deserialize_with = "null_as_default")]
    pub relevance_score: Score,
    #[serde(default, deserialize_with = "null_as_default")]
    pub formatting_score: Score,
    #[serde(default, deserialize_with = "null_as_default")]
    pub missing_sections: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scoring_criteria: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strengths: Option<String>,
    /// Wire name is misspelled by the analyzer; kept as-is for compatibility.
    #[serde(
        rename = "weeknesses",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub weaknesses: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatting_suggestions: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A score exactly as the analyzer wrote it, so `78` goes back as `78` and not `78.0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(Number);

impl Score {
    pub fn value(&self) -> f64 {
        self.0.as_f64().unwrap_or(0.0)
    }
}

impl Default for Score {
    fn default() -> Self {
        Score(Number::from(0))
    }
}

impl From<u32> for Score {
    fn from(value: u32) -> Self {
        Score(Number::from(value))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A narrative field is absent from the analysis result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("analysis result has no {} field", .0.wire_key())]
pub struct MissingInput(pub NarrativeField);

/// One labeled bar of the score chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBar {
    pub label: &'static str,
    pub value: f64,
}

/// Relevance, formatting and overall score, in chart order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSeries {
    pub bars: [ScoreBar; 3],
}

impl ScoreSeries {
    /// Largest bar value, never below 100 so scores share a 0-100 axis.
    pub fn axis_max(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(100.0, f64::max)
    }
}

impl AnalysisResult {
    /// Raw narrative text for a field.
    pub fn narrative(&self, field: NarrativeField) -> Result<&str, MissingInput> {
        let raw = match field {
            NarrativeField::Strengths => &self.strengths,
            NarrativeField::Weaknesses => &self.weaknesses,
            NarrativeField::Suggestions => &self.suggestions,
        };
        raw.as_deref().ok_or(MissingInput(field))
    }

    /// Display items for a field; a missing field shows no items.
    pub fn items(&self, field: NarrativeField) -> Vec<DisplayItem> {
        match self.narrative(field) {
            Ok(raw) => field.segment(raw),
            Err(e) => {
                log::debug!("{}", e);
                Vec::new()
            }
        }
    }

    pub fn score_series(&self) -> ScoreSeries {
        ScoreSeries {
            bars: [
                ScoreBar {
                    label: "Relevance",
                    value: self.relevance_score.value(),
                },
                ScoreBar {
                    label: "Formatting",
                    value: self.formatting_score.value(),
                },
                ScoreBar {
                    label: "Overall Score",
                    value: self.score.value(),
                },
            ],
        }
    }

    /// Missing sections joined with ", ", or "None".
    pub fn missing_sections_display(&self) -> String {
        if self.missing_sections.is_empty() {
            "None".to_string()
        } else {
            self.missing_sections.join(", ")
        }
    }
}

/// Format a score without a trailing ".0" for whole numbers.
pub fn format_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
