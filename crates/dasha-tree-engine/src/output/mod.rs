//! Rendering of converted trees: the JSON output document and a plain-text
//! outline.
//!
//! Both renderings are pure and deterministic; where the result is written
//! is the caller's business.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{DashaTree, PeriodNode, SummaryEntry, Warning};

/// The nested record written for one person.
///
/// Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDocument {
    pub person_id: String,
    pub birth_time_stamp: Option<String>,
    pub source_file: String,
    pub dasha_system: Option<String>,
    pub periods: Vec<PeriodNode>,
    pub unattached: Vec<PeriodNode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub summary: Vec<SummaryEntry>,
    pub warnings: Vec<Warning>,
}

impl OutputDocument {
    pub fn new(tree: DashaTree, source_file: impl Into<String>, warnings: Vec<Warning>) -> Self {
        let DashaTree {
            person,
            dasha_system,
            periods,
            unattached,
            summary,
        } = tree;
        Self {
            person_id: person.person_id,
            birth_time_stamp: person.birth_time_stamp,
            source_file: source_file.into(),
            dasha_system,
            periods,
            unattached,
            summary,
            warnings,
        }
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Indented text outline of a tree, two spaces per level.
pub fn render_outline(tree: &DashaTree) -> String {
    let mut out = tree.person.person_id.clone();
    if let Some(ts) = &tree.person.birth_time_stamp {
        out.push_str(&format!(" [{ts}]"));
    }
    out.push('\n');
    if let Some(system) = &tree.dasha_system {
        out.push_str(&format!("system: {system}\n"));
    }

    if !tree.summary.is_empty() {
        out.push_str("summary:\n");
        for entry in &tree.summary {
            out.push_str(&format!(
                "  {} {}\n",
                entry.ruler_name,
                date_range(entry.start_date, entry.end_date)
            ));
        }
    }

    for node in &tree.periods {
        outline_subtree(node, 0, &mut out);
    }
    if !tree.unattached.is_empty() {
        out.push_str("unattached:\n");
        for node in &tree.unattached {
            outline_subtree(node, 1, &mut out);
        }
    }
    out
}

fn outline_subtree(root: &PeriodNode, base_indent: usize, out: &mut String) {
    let root_depth = root.level.index();
    for node in root.descendants() {
        let pad = "  ".repeat(base_indent + node.level.index() - root_depth);
        out.push_str(&format!(
            "{pad}{} {} {}\n",
            node.level,
            node.ruler_name,
            date_range(node.start_date, node.end_date)
        ));
        for note in &node.notes {
            out.push_str(&format!("{pad}  # {note}\n"));
        }
    }
}

fn date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    let show = |d: Option<NaiveDate>| d.map_or_else(|| "?".to_string(), |d| d.to_string());
    format!("{}..{}", show(start), show(end))
}
