use chrono::NaiveDate;

use crate::models::DashaLevel;
use crate::parsing::rope::Span;

use super::kinds::Section;

/// Everything the classifier read from a line that names a period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodLine {
    pub level: DashaLevel,
    /// Canonical ruler name, or the raw trimmed line if `ruler_malformed`.
    pub ruler_name: String,
    /// `None` when no date pattern produced a valid pair.
    pub dates: Option<(NaiveDate, NaiveDate)>,
    pub ruler_malformed: bool,
    /// Indentation in columns, markers excluded.
    pub indent: usize,
    /// 1-based source line.
    pub line: usize,
    pub span: Span,
}

/// Result of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// The line starts a new period.
    OpenPeriod(PeriodLine),
    /// Supplementary text for the most recently opened period.
    Continuation(String),
    /// Blank lines, separators and boilerplate.
    Noise,
    /// `<Name> Dasa:` title naming the dasha system.
    SystemHeader(String),
    /// A structural heading such as `Maha Dasas:`.
    SectionHeader(Section),
    /// An entry of a flat MD overview list.
    SummaryEntry(PeriodLine),
}
