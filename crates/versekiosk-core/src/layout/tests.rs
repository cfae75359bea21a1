use super::*;
use crate::display::mock::MockDisplay;

// MockDisplay measures 6 px per character per scale, so a 100 px wide
// display with 10 px margins fits 13 characters per line at scale 1.
fn narrow_display() -> MockDisplay {
    MockDisplay::new(100, 100)
}

#[test]
fn short_text_stays_on_one_line() {
    let display = narrow_display();
    let lines = wrap_words(&display, "hello world", 100, 10, 1, 1);
    assert_eq!(lines, vec!["hello world".to_string()]);
}

#[test]
fn wraps_at_word_boundaries() {
    let display = narrow_display();
    let lines = wrap_words(&display, "the quick brown fox", 100, 10, 1, 1);
    assert_eq!(
        lines,
        vec!["the quick".to_string(), "brown fox".to_string()]
    );
}

#[test]
fn every_wrapped_line_fits_the_usable_width() {
    let display = narrow_display();
    let text = "poetry engines paginate arbitrarily long stanzas without mercy";
    let lines = wrap_words(&display, text, 100, 10, 1, 1);
    for line in &lines {
        assert!(
            display.measure_text(&line.to_uppercase(), 1, 1) <= 80,
            "line '{line}' exceeds the usable width"
        );
    }
}

#[test]
fn oversized_word_breaks_at_character_level_and_continues() {
    let display = narrow_display();
    // 30 characters: two full 13-char lines, then the 4-char remainder
    // keeps collecting following words.
    let lines = wrap_words(&display, "abcdefghijklmnopqrstuvwxyzabcd xy", 100, 10, 1, 1);
    assert_eq!(
        lines,
        vec![
            "abcdefghijklm".to_string(),
            "nopqrstuvwxyz".to_string(),
            "abcd xy".to_string(),
        ]
    );
}

#[test]
fn single_character_wider_than_the_line_still_makes_progress() {
    let display = narrow_display();
    // Usable width of 4 px cannot hold even one 6 px glyph; each character
    // must come out as its own line instead of looping forever.
    let lines = wrap_words(&display, "ab", 14, 5, 1, 1);
    assert_eq!(lines, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn empty_text_yields_one_empty_line() {
    let display = narrow_display();
    assert_eq!(wrap_words(&display, "", 100, 10, 1, 1), vec![String::new()]);
}

#[test]
fn blank_lines_are_preserved() {
    let display = narrow_display();
    let lines = wrap_words(&display, "a\n\nb", 100, 10, 1, 1);
    assert_eq!(
        lines,
        vec!["a".to_string(), String::new(), "b".to_string()]
    );
}

#[test]
fn trailing_blank_lines_are_preserved() {
    let display = narrow_display();
    let lines = wrap_words(&display, "a\n", 100, 10, 1, 1);
    assert_eq!(lines, vec!["a".to_string(), String::new()]);
}

#[test]
fn sanitize_maps_smart_typography_to_ascii() {
    assert_eq!(sanitize("\u{201C}quoted\u{201D}"), "\"quoted\"");
    assert_eq!(sanitize("it\u{2019}s"), "it's");
    assert_eq!(sanitize("wait\u{2026}"), "wait...");
    assert_eq!(sanitize("em\u{2014}dash, en\u{2013}dash"), "em-dash, en-dash");
    assert_eq!(sanitize("non\u{00A0}breaking"), "non breaking");
}

#[test]
fn sanitize_replaces_unrenderable_characters() {
    assert_eq!(sanitize("caf\u{E9}"), "caf?");
    assert_eq!(sanitize("line\nbreak"), "line\nbreak");
    assert_eq!(sanitize("\u{1F600}"), "?");
}

// Pagination geometry: 152 px tall, 10 px margins leaves 132 px. A one
// line title at scale 4 with 2 px spacing plus an 8 px gap takes 42 px;
// body lines at scale 2 with 2 px spacing are 18 px, so 5 fit per page.
fn page_cfg() -> KioskConfig {
    KioskConfig::default()
}

fn numbered_body(lines: usize) -> String {
    (1..=lines)
        .map(|i| format!("L{i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn pagination_chunks_body_lines_evenly() {
    let display = MockDisplay::new(480, 152);
    let layout = paginate(&display, "A", &numbered_body(20), &page_cfg());
    assert_eq!(layout.page_count(), 4);
    for page in &layout.pages {
        assert_eq!(page.len(), 5);
    }
    assert_eq!(layout.pages[0][0], "L1");
    assert_eq!(layout.pages[3][4], "L20");
}

#[test]
fn final_page_holds_the_remainder() {
    let display = MockDisplay::new(480, 152);
    let layout = paginate(&display, "A", &numbered_body(12), &page_cfg());
    assert_eq!(layout.page_count(), 3);
    assert_eq!(layout.pages[2].len(), 2);
}

#[test]
fn empty_body_yields_a_single_empty_page() {
    let display = MockDisplay::new(480, 152);
    let layout = paginate(&display, "Untitled", "", &page_cfg());
    assert_eq!(layout.pages, vec![Vec::<String>::new()]);
    assert_eq!(layout.title_lines, vec!["Untitled".to_string()]);
}

#[test]
fn tiny_display_still_fits_one_line_per_page() {
    // 40 px tall: the title block alone exceeds the usable height, so the
    // floor of one body line per page has to kick in.
    let display = MockDisplay::new(480, 40);
    let layout = paginate(&display, "A", &numbered_body(3), &page_cfg());
    assert_eq!(layout.page_count(), 3);
    for page in &layout.pages {
        assert_eq!(page.len(), 1);
    }
}

#[test]
fn title_is_sanitized_and_wrapped() {
    let display = MockDisplay::new(480, 152);
    let layout = paginate(&display, "Caf\u{E9} Nights", "body", &page_cfg());
    assert_eq!(layout.title_lines, vec!["Caf? Nights".to_string()]);
}
