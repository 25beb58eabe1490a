//! Property-based tests for line wrapping.
//!
//! Tests validate wrap invariants:
//! 1. Words survive wrapping in order (joining lines with spaces restores the text)
//! 2. Every multi-word line measures strictly below the limit
//! 3. Rewrapping a wrapped line at the same width is a no-op
//! 4. Blank paragraphs become exactly one empty line each

use proptest::prelude::*;
use tprompt::engine::{build_layout, paragraphs, wrap};

// ===== Helper Functions =====

/// One unit per character, like a monospace terminal.
fn chars(text: &str) -> f64 {
    text.chars().count() as f64
}

/// Words of lowercase ASCII joined by single spaces.
fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,12}", 1..40).prop_map(|words| words.join(" "))
}

// ===== Property 1: Content Preservation =====

proptest! {
    #[test]
    fn joining_wrapped_lines_restores_paragraph(
        text in sentence(),
        width in 14.0f64..80.0
    ) {
        let lines = wrap(&text, width, &chars).unwrap();
        prop_assert_eq!(lines.join(" "), text);
    }
}

// ===== Property 2: Width Respected =====

proptest! {
    #[test]
    fn lines_fit_or_hold_single_word(
        text in sentence(),
        width in 1.0f64..40.0
    ) {
        for line in wrap(&text, width, &chars).unwrap() {
            prop_assert!(
                chars(&line) < width || !line.contains(' '),
                "line {:?} measures {} against limit {}",
                line, chars(&line), width
            );
            prop_assert!(!line.is_empty(), "non-empty paragraph produced an empty line");
        }
    }
}

// ===== Property 3: Idempotence =====

proptest! {
    #[test]
    fn rewrapping_a_line_is_identity(
        text in sentence(),
        width in 1.0f64..40.0
    ) {
        for line in wrap(&text, width, &chars).unwrap() {
            let again = wrap(&line, width, &chars).unwrap();
            prop_assert_eq!(again, vec![line]);
        }
    }
}

// ===== Property 4: Paragraph Structure =====

proptest! {
    #[test]
    fn blank_paragraphs_keep_their_rows(
        paragraphs_in in prop::collection::vec(prop_oneof![Just(String::new()), sentence()], 1..12),
        width in 14.0f64..80.0
    ) {
        // A closing paragraph keeps a trailing blank from being swallowed as a final break.
        let text = format!("{}\nend", paragraphs_in.join("\n"));
        let lines = wrap(&text, width, &chars).unwrap();

        let blank_in = paragraphs_in.iter().filter(|p| p.is_empty()).count();
        let blank_out = lines.iter().filter(|l| l.is_empty()).count();
        prop_assert_eq!(blank_in, blank_out);
        prop_assert!(lines.len() >= paragraphs(&text).count());
    }
}

// ===== Property 5: Layout Offsets =====

proptest! {
    #[test]
    fn layout_offsets_are_evenly_spaced(
        text in sentence(),
        width in 1.0f64..40.0,
        line_height in 1.0f64..4.0
    ) {
        let lines = wrap(&text, width, &chars).unwrap();
        let layout = build_layout(&lines, line_height);

        for (i, line) in layout.lines().iter().enumerate() {
            prop_assert!((line.y_offset() - i as f64 * line_height).abs() < 1e-9);
        }
        prop_assert!((layout.total_height() - lines.len() as f64 * line_height).abs() < 1e-9);
    }
}

// ===== Edge Cases =====

#[test]
fn overlong_first_word_has_no_empty_line_before_it() {
    let lines = wrap("extraordinarily long", 5.0, &chars).unwrap();
    assert_eq!(lines, vec!["extraordinarily", "long"]);
}

#[test]
fn crlf_counts_as_one_break() {
    let lines = wrap("one\r\ntwo\r\n", 80.0, &chars).unwrap();
    assert_eq!(lines, vec!["one", "two"]);
}
