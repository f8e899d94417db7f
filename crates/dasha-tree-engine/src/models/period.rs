use chrono::NaiveDate;
use serde::Serialize;

use crate::parsing::rope::Span;

use super::level::DashaLevel;

/// One dasha interval and the sub-periods nested inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodNode {
    pub level: DashaLevel,
    /// Canonical ruler name, or the raw source text when it could not be read.
    pub ruler_name: String,
    /// `None` when no date pair could be read from the source line.
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Continuation text that followed the period line.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    /// Sub-periods exactly one tier deeper, in document order.
    pub children: Vec<PeriodNode>,
    /// 1-based line number of the line that opened this period.
    #[serde(skip)]
    pub line: usize,
    /// Byte span of the opening line in the source.
    #[serde(skip)]
    pub span: Span,
}

impl PeriodNode {
    pub fn new(
        level: DashaLevel,
        ruler_name: impl Into<String>,
        dates: Option<(NaiveDate, NaiveDate)>,
        line: usize,
        span: Span,
    ) -> Self {
        Self {
            level,
            ruler_name: ruler_name.into(),
            start_date: dates.map(|(s, _)| s),
            end_date: dates.map(|(_, e)| e),
            notes: vec![],
            children: vec![],
            line,
            span,
        }
    }

    /// Iterates this node and all of its descendants depth-first, in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Depth-first pre-order walk over a period subtree.
pub struct Descendants<'a> {
    stack: Vec<&'a PeriodNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a PeriodNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
