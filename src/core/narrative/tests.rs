use super::{
    DisplayItem, ExtractionPolicy, NarrativeField, clean_fragment, segment, split_label,
};

#[test]
fn strengths_labeled_bullets() {
    let items = segment(
        NarrativeField::Strengths,
        "* Clarity: Resume is concise * Impact: Strong metrics used",
    );
    assert_eq!(
        items,
        vec![
            DisplayItem::labeled("Clarity", "Resume is concise"),
            DisplayItem::labeled("Impact", "Strong metrics used"),
        ]
    );
    assert!(items.iter().all(|i| i.emphasized));
}

#[test]
fn suggestions_numbered_points() {
    let items = segment(
        NarrativeField::Suggestions,
        "1. Add a summary section 2. Quantify achievements",
    );
    assert_eq!(
        items,
        vec![
            DisplayItem::plain("Add a summary section"),
            DisplayItem::plain("Quantify achievements"),
        ]
    );
    assert!(items.iter().all(|i| !i.emphasized && i.label.is_empty()));
}

#[test]
fn suggestions_mixed_numbers_and_bullets() {
    let items = segment(
        NarrativeField::Suggestions,
        "1. Summary: add one * Metrics: quantify 2. Trim length",
    );
    assert_eq!(
        items,
        vec![
            DisplayItem::labeled("Summary", "add one"),
            DisplayItem::labeled("Metrics", "quantify"),
            DisplayItem::plain("Trim length"),
        ]
    );
}

#[test]
fn suggestions_number_markers_are_ascii_only() {
    assert_eq!(
        segment(NarrativeField::Suggestions, "Use ٣. Arabic digits"),
        vec![DisplayItem::plain("Use ٣. Arabic digits")]
    );
    assert_eq!(
        ExtractionPolicy::BulletsOrNumbers.fragments("١٢. one 3. two"),
        ["١٢. one ", "two"]
    );
}

#[test]
fn weaknesses_drop_preamble() {
    let items = segment(
        NarrativeField::Weaknesses,
        "General note * Lacks metrics * Too long",
    );
    assert_eq!(
        items,
        vec![
            DisplayItem::plain("Lacks metrics"),
            DisplayItem::plain("Too long"),
        ]
    );
}

#[test]
fn weaknesses_keep_preamble_with_residual_marker() {
    let items = segment(NarrativeField::Weaknesses, "*Gaps*: none listed * Too long");
    assert_eq!(
        items,
        vec![
            DisplayItem::labeled("Gaps", "none listed"),
            DisplayItem::plain("Too long"),
        ]
    );
}

#[test]
fn strengths_keep_preamble() {
    let items = segment(NarrativeField::Strengths, "General note * Strong metrics");
    assert_eq!(
        items,
        vec![
            DisplayItem::plain("General note"),
            DisplayItem::plain("Strong metrics"),
        ]
    );
}

#[test]
fn colon_inside_detail_splits_on_first_only() {
    let items = segment(NarrativeField::Strengths, "* Timing: Submitted at 9:00 sharp");
    assert_eq!(
        items,
        vec![DisplayItem::labeled("Timing", "Submitted at 9:00 sharp")]
    );
}

#[test]
fn empty_input_yields_no_items() {
    for field in NarrativeField::ALL {
        assert!(segment(field, "").is_empty(), "{field}");
        assert!(segment(field, "   \n\t ").is_empty(), "{field}");
    }
}

#[test]
fn closing_bold_marker_acts_as_bullet() {
    // "** " after a bold label matches the bullet pattern, so the label and its
    // text end up in separate fragments.
    let raw = "* **Technical skills:** Python and React\n* **Projects:** Relevant work";
    let items = segment(NarrativeField::Suggestions, raw);
    assert_eq!(
        items,
        vec![
            DisplayItem::labeled("Technical skills", ""),
            DisplayItem::plain("Python and React"),
            DisplayItem::labeled("Projects", ""),
            DisplayItem::plain("Relevant work"),
        ]
    );
}

#[test]
fn unparseable_text_becomes_single_plain_item() {
    let items = segment(NarrativeField::Strengths, "no bullets at all here");
    assert_eq!(items, vec![DisplayItem::plain("no bullets at all here")]);
}

#[test]
fn output_preserves_source_order() {
    let raw = "* c * a * b";
    let details: Vec<String> = segment(NarrativeField::Strengths, raw)
        .into_iter()
        .map(|i| i.detail)
        .collect();
    assert_eq!(details, ["c", "a", "b"]);
}

#[test]
fn emphasized_iff_label_present() {
    let raw = "* A: one * plain * : leading colon * B: * C:D:E";
    for field in NarrativeField::ALL {
        for item in segment(field, raw) {
            assert_eq!(item.emphasized, !item.label.is_empty(), "{item:?}");
        }
    }
}

#[test]
fn leading_colon_is_not_a_label() {
    assert_eq!(split_label(": leading"), DisplayItem::plain(": leading"));
    let items = segment(NarrativeField::Strengths, "* : no label * Real: one");
    assert_eq!(
        items,
        vec![
            DisplayItem::plain(": no label"),
            DisplayItem::labeled("Real", "one"),
        ]
    );
    assert!(!items[0].emphasized);
}

#[test]
fn label_with_empty_detail() {
    assert_eq!(split_label("Skills:"), DisplayItem::labeled("Skills", ""));
}

#[test]
fn clean_fragment_is_idempotent() {
    for fragment in ["  **Bold:** text  ", "plain", "*", " a * b ", ""] {
        let once = clean_fragment(fragment);
        assert_eq!(clean_fragment(&once), once);
    }
}

#[test]
fn segmentation_is_deterministic() {
    let raw = "Intro * A: one 2. B: two * three";
    for field in NarrativeField::ALL {
        assert_eq!(segment(field, raw), segment(field, raw));
    }
}

#[test]
fn policies_per_field() {
    assert_eq!(NarrativeField::Strengths.policy(), ExtractionPolicy::Bullets);
    assert_eq!(
        NarrativeField::Weaknesses.policy(),
        ExtractionPolicy::MarkedBullets
    );
    assert_eq!(
        NarrativeField::Suggestions.policy(),
        ExtractionPolicy::BulletsOrNumbers
    );
}

#[test]
fn strengths_do_not_split_on_numbers() {
    let fragments = ExtractionPolicy::Bullets.fragments("1. one 2. two");
    assert_eq!(fragments, ["1. one 2. two"]);
}

#[test]
fn field_names_parse() {
    assert_eq!(
        "strengths".parse::<NarrativeField>().unwrap(),
        NarrativeField::Strengths
    );
    assert_eq!(
        "Weaknesses".parse::<NarrativeField>().unwrap(),
        NarrativeField::Weaknesses
    );
    assert_eq!(
        "weeknesses".parse::<NarrativeField>().unwrap(),
        NarrativeField::Weaknesses
    );
    assert!("summary".parse::<NarrativeField>().is_err());
}

#[test]
fn plain_text_rendering() {
    assert_eq!(
        DisplayItem::labeled("Clarity", "concise").to_plain_text(),
        "Clarity: concise"
    );
    assert_eq!(DisplayItem::labeled("Skills", "").to_plain_text(), "Skills:");
    assert_eq!(DisplayItem::plain("Too long").to_plain_text(), "Too long");
}
