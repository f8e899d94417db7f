use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the rope as an owned String.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    rope.slice_to_cow(sp.range()).into_owned()
}

/// Extracts the text for a span with line endings and surrounding whitespace
/// removed, truncated to at most `max` bytes with a "..." suffix.
///
/// Used in warning messages and snapshot output.
pub fn preview(rope: &Rope, sp: Span, max: usize) -> String {
    let s = slice_to_string(rope, sp);
    let t = s.trim();
    if t.len() <= max {
        return t.to_string();
    }
    let mut cut = max;
    while !t.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &t[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_trims_line_ending() {
        let rope = Rope::from("  Ju MD: 2000-01-01\n");
        let sp = Span { start: 0, end: 20 };
        assert_eq!(preview(&rope, sp, 40), "Ju MD: 2000-01-01");
    }

    #[test]
    fn preview_truncates_long_text() {
        let rope = Rope::from("Sookshma-antardasas in this PD:");
        let sp = Span { start: 0, end: rope.len() };
        assert_eq!(preview(&rope, sp, 8), "Sookshma...");
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let rope = Rope::from("गुरु MD");
        let sp = Span { start: 0, end: rope.len() };
        let p = preview(&rope, sp, 4);
        assert!(p.ends_with("..."));
        assert!(p.len() <= 4 + 3);
    }

    #[test]
    fn slice_to_string_partial_span() {
        let rope = Rope::from("Ju MD: Sa AD");
        let sp = Span { start: 7, end: 12 };
        assert_eq!(slice_to_string(&rope, sp), "Sa AD");
    }
}
