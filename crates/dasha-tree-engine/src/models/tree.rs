use chrono::NaiveDate;
use serde::Serialize;

use super::period::PeriodNode;

/// Who a dasha table belongs to, as derived from its filename.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub person_id: String,
    /// Four-digit 24h clock value, e.g. `"1345"`. Positional only, never validated.
    pub birth_time_stamp: Option<String>,
}

/// An entry of a flat "Maha Dasas:" overview block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryEntry {
    pub ruler_name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(skip)]
    pub line: usize,
}

/// The full period hierarchy of one person.
///
/// Built once per input file by a single pass of the hierarchy builder and
/// never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashaTree {
    pub person: PersonRecord,
    /// Name from a `<System> Dasa:` header, when the document has one.
    pub dasha_system: Option<String>,
    /// Top-level MD periods in document order.
    pub periods: Vec<PeriodNode>,
    /// Periods that opened without an enclosing parent.
    pub unattached: Vec<PeriodNode>,
    pub summary: Vec<SummaryEntry>,
}

impl DashaTree {
    /// Every node in the tree and the unattached bucket, depth-first.
    pub fn nodes(&self) -> impl Iterator<Item = &PeriodNode> {
        self.periods
            .iter()
            .chain(self.unattached.iter())
            .flat_map(PeriodNode::descendants)
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty() && self.unattached.is_empty()
    }
}
