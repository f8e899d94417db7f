/// Leading list and quote markers that decorate period lines.
///
/// `- Ju MD: ...`, `* AD Saturn ...`, `> PD ...`, `| SD ...`, bullet
/// glyphs and list numbers (`1. Ju MD: ...`, `12) AD ...`) are all read as if
/// the marker were absent.
pub struct Marker;

/// Where the meaningful text of a line starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStart {
    /// Columns of leading whitespace, tabs counted as [`Marker::TAB_WIDTH`].
    pub indent: usize,
    /// Byte offset of the first character after indentation and markers.
    pub offset: usize,
}

impl Marker {
    pub const CHARS: [char; 10] = ['-', '*', '+', '>', '#', '|', '•', '·', '◦', '▪'];
    pub const TAB_WIDTH: usize = 4;
    /// Longest list number read as a marker; four digits would be a year.
    pub const MAX_NUMBER_DIGITS: usize = 3;

    /// Measures indentation and skips any run of markers after it.
    ///
    /// A marker only counts when followed by whitespace or another marker, so
    /// `-5` or `#1` are left alone. Markers never add to the indentation.
    pub fn strip(s: &str) -> LineStart {
        let mut indent = 0usize;
        let mut offset = 0usize;
        for (i, ch) in s.char_indices() {
            match ch {
                ' ' => indent += 1,
                '\t' => indent += Self::TAB_WIDTH - indent % Self::TAB_WIDTH,
                _ => {
                    offset = i;
                    break;
                }
            }
            offset = i + ch.len_utf8();
        }

        loop {
            let rest = &s[offset..];
            let Some(ch) = rest.chars().next() else { break };
            if let Some(len) = Self::list_number(rest) {
                offset += len;
                let after = &s[offset..];
                offset += after.len() - after.trim_start().len();
                continue;
            }
            if !Self::CHARS.contains(&ch) {
                break;
            }
            let after = &rest[ch.len_utf8()..];
            match after.chars().next() {
                Some(next) if next.is_whitespace() || Self::CHARS.contains(&next) => {}
                _ => break,
            }
            offset += ch.len_utf8();
            offset += after.len() - after.trim_start().len();
        }

        LineStart { indent, offset }
    }

    /// Byte length of a leading `12.` or `12)` followed by whitespace.
    fn list_number(rest: &str) -> Option<usize> {
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || digits > Self::MAX_NUMBER_DIGITS {
            return None;
        }
        let mut tail = rest[digits..].chars();
        match (tail.next(), tail.next()) {
            (Some('.' | ')'), Some(next)) if next.is_whitespace() => Some(digits + 1),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Ju MD: 2000", 0, 0)]
    #[case("    Sa AD: 2000", 4, 4)]
    #[case("\tSa AD", 4, 1)]
    #[case("  \tSa AD", 4, 3)]
    #[case("- MD Jupiter", 0, 2)]
    #[case("  * AD Saturn", 2, 4)]
    #[case("> > PD Mercury", 0, 4)]
    #[case("• SD Ketu", 0, 4)]
    #[case("-- AD Venus", 0, 3)]
    #[case("1. Ju MD: 2000", 0, 3)]
    #[case("  12) AD Saturn", 2, 6)]
    #[case("- 3. PD Moon", 0, 5)]
    fn strips_indent_and_markers(#[case] line: &str, #[case] indent: usize, #[case] offset: usize) {
        assert_eq!(Marker::strip(line), LineStart { indent, offset });
    }

    #[rstest]
    #[case("-5 degrees")]
    #[case("#1 reading")]
    #[case("01.01.2000 to 31.12.2016")]
    #[case("2000. A new start")]
    fn leaves_glued_markers(#[case] line: &str) {
        assert_eq!(Marker::strip(line).offset, 0);
    }

    #[test]
    fn whitespace_only_line() {
        assert_eq!(Marker::strip("   "), LineStart { indent: 3, offset: 3 });
    }
}
