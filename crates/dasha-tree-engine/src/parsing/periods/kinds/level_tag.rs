use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use crate::models::DashaLevel;

/// Explicit level markers written into a period line.
///
/// All knowledge of how levels are spelled in source text lives here:
/// the short `MD`/`AD`/`PD`/`SD` tokens and the long Sanskrit forms.
pub struct LevelTag;

/// A level marker found in a line, with the bytes it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    pub level: DashaLevel,
    pub range: Range<usize>,
}

impl LevelTag {
    /// Finds the level marker in `text`.
    ///
    /// Short uppercase tags win over long forms; the leftmost match of the
    /// winning family is used.
    pub fn find(text: &str) -> Option<TagMatch> {
        static SHORT: OnceLock<Regex> = OnceLock::new();
        static LONG: OnceLock<Regex> = OnceLock::new();

        let short = SHORT
            .get_or_init(|| Regex::new(r"\b(MD|AD|PD|SD)\b").expect("Invalid level tag regex"));
        if let Some(c) = short.captures(text) {
            let m = c.get(1)?;
            return Some(TagMatch {
                level: DashaLevel::from_tag(m.as_str())?,
                range: m.range(),
            });
        }

        let long = LONG.get_or_init(|| {
            Regex::new(
                r"(?i)\b(?:(?P<md>maha[\s-]?dash?a)|(?P<pd>pratyantara?(?:[\s-]?dash?a)?)|(?P<ad>antar[\s-]?dash?a|bhukti)|(?P<sd>(?:sookshma|sukshma)(?:[\s-]?antar)?(?:[\s-]?dash?a)?))\b",
            )
            .expect("Invalid long level regex")
        });
        let c = long.captures(text)?;
        let (level, m) = [
            (DashaLevel::Mahadasha, "md"),
            (DashaLevel::Antardasha, "ad"),
            (DashaLevel::Pratyantardasha, "pd"),
            (DashaLevel::Sookshmadasha, "sd"),
        ]
        .into_iter()
        .find_map(|(level, group)| c.name(group).map(|m| (level, m)))?;

        Some(TagMatch {
            level,
            range: m.range(),
        })
    }
}
