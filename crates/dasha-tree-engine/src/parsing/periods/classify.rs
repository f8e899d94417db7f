use std::ops::Range;

use log::{debug, trace};

use crate::models::DashaLevel;
use crate::parsing::rope::LineRef;

use super::context::ClassifyContext;
use super::kinds::{DateRange, Header, LevelTag, Marker, NoiseFilter, RulerTable, TagMatch, ruler_words};
use super::types::{LineClass, PeriodLine};

/// Untagged lines only open a period when the name before the dates is
/// short or a known ruler, so dated prose stays a note.
const MAX_UNTAGGED_RULER_WORDS: usize = 3;

/// Classifies single lines of a dasha table.
///
/// Check order matters: headers before tags (section headings contain literal
/// `MD`/`AD`/`PD`), noise before periods, explicit tags before indentation.
#[derive(Debug, Clone, Default)]
pub struct DashaLineClassifier {
    rulers: RulerTable,
    noise: NoiseFilter,
}

impl DashaLineClassifier {
    pub fn new(rulers: RulerTable, noise: NoiseFilter) -> Self {
        Self { rulers, noise }
    }

    /// Classifies a line given what is currently open. Never fails.
    pub fn classify(&self, lr: &LineRef, ctx: &ClassifyContext) -> LineClass {
        let content = lr.content();
        let start = Marker::strip(content);
        let text = &content[start.offset..];

        if text.trim().is_empty() {
            return LineClass::Noise;
        }
        if let Some(name) = Header::system_name(text) {
            return LineClass::SystemHeader(name);
        }
        if let Some(section) = Header::section(text) {
            return LineClass::SectionHeader(section);
        }
        if self.noise.is_noise(text) {
            trace!("line {}: boilerplate", lr.number);
            return LineClass::Noise;
        }

        let dates = DateRange::find(text);
        if let Some(tag) = LevelTag::find(text) {
            return LineClass::OpenPeriod(self.tagged_period(lr, text, start.indent, tag, dates));
        }
        if let Some(range) = dates
            && let Some(class) = self.untagged_period(lr, text, start.indent, &range, ctx)
        {
            return class;
        }

        if ctx.any_open() {
            LineClass::Continuation(text.trim().to_string())
        } else {
            debug!("line {}: text before first period treated as noise", lr.number);
            LineClass::Noise
        }
    }

    fn tagged_period(
        &self,
        lr: &LineRef,
        text: &str,
        indent: usize,
        tag: TagMatch,
        dates: Option<DateRange>,
    ) -> PeriodLine {
        let mut blanked = text.to_string();
        blank(&mut blanked, tag.range.clone());
        if let Some(r) = &dates {
            for range in &r.ranges {
                blank(&mut blanked, range.clone());
            }
        }

        // PyJHora puts the ruler before the tag (`Ju MD:`), most hand-written
        // tables after it (`MD: Jupiter`).
        let (before, after) = blanked.split_at(tag.range.start);
        let mut raw = ruler_words(before);
        if raw.is_empty() {
            raw = ruler_words(after);
        }

        let ruler_malformed = raw.is_empty();
        let ruler_name = if ruler_malformed {
            debug!("line {}: no ruler text next to {} tag", lr.number, tag.level);
            lr.content().trim().to_string()
        } else {
            self.rulers.canonical(&raw)
        };
        if dates.is_none() {
            debug!("line {}: {} {ruler_name} has no readable date pair", lr.number, tag.level);
        }

        PeriodLine {
            level: tag.level,
            ruler_name,
            dates: dates.map(|r| (r.start, r.end)),
            ruler_malformed,
            indent,
            line: lr.number,
            span: lr.span,
        }
    }

    fn untagged_period(
        &self,
        lr: &LineRef,
        text: &str,
        indent: usize,
        range: &DateRange,
        ctx: &ClassifyContext,
    ) -> Option<LineClass> {
        let raw = ruler_words(&text[..range.ranges[0].start]);
        if raw.is_empty()
            || (!self.rulers.is_known(&raw) && raw.split_whitespace().count() > MAX_UNTAGGED_RULER_WORDS)
        {
            return None;
        }

        let period = PeriodLine {
            level: DashaLevel::Mahadasha,
            ruler_name: self.rulers.canonical(&raw),
            dates: Some((range.start, range.end)),
            ruler_malformed: false,
            indent,
            line: lr.number,
            span: lr.span,
        };
        if ctx.in_summary {
            return Some(LineClass::SummaryEntry(period));
        }

        let level = ctx.level_for_indent(indent);
        trace!("line {}: untagged period read as {level} from indent {indent}", lr.number);
        Some(LineClass::OpenPeriod(PeriodLine { level, ..period }))
    }
}

/// Overwrites a byte range with spaces, keeping all other offsets valid.
fn blank(s: &mut String, range: Range<usize>) {
    let spaces = " ".repeat(range.len());
    s.replace_range(range, &spaces);
}
