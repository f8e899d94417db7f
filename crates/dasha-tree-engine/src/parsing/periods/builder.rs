use chrono::Days;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{DashaTree, PeriodNode, PersonRecord, SummaryEntry, Warning, WarningKind};

use super::context::ClassifyContext;
use super::kinds::Section;
use super::stack::{ClosedNodes, OpenNode, OpenStack};
use super::types::{LineClass, PeriodLine};

/// What happens to text that follows a period line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContinuationPolicy {
    /// Kept in the deepest open period's `notes`.
    #[default]
    Append,
    Ignore,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Fold a repeated ruler whose period continues the open sibling into it.
    pub merge_repeated: bool,
    pub continuation: ContinuationPolicy,
}

/// Folds classified lines into a [`DashaTree`].
///
/// Opening a period at level L closes everything open at L or deeper, then
/// attaches the new node below the open period at L-1 (or to the root for
/// MD). A period with no open parent is kept as an orphan.
pub struct HierarchyBuilder {
    options: BuildOptions,
    stack: OpenStack,
    closed: ClosedNodes,
    dasha_system: Option<String>,
    summary: Vec<SummaryEntry>,
    in_summary: bool,
    warnings: Vec<Warning>,
}

impl HierarchyBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options,
            stack: OpenStack::default(),
            closed: ClosedNodes::default(),
            dasha_system: None,
            summary: vec![],
            in_summary: false,
            warnings: vec![],
        }
    }

    /// Snapshot of open state for classifying the next line.
    pub fn context(&self) -> ClassifyContext {
        self.stack.context(self.in_summary)
    }

    pub fn push(&mut self, class: LineClass) {
        match class {
            LineClass::OpenPeriod(p) => {
                self.in_summary = false;
                self.open_period(p);
            }
            LineClass::Continuation(text) => self.continuation(text),
            LineClass::Noise => {}
            LineClass::SystemHeader(name) => {
                self.in_summary = false;
                match &self.dasha_system {
                    None => self.dasha_system = Some(name),
                    Some(first) => debug!("ignoring second system header {name:?}, keeping {first:?}"),
                }
            }
            LineClass::SectionHeader(section) => self.in_summary = section == Section::Summary,
            LineClass::SummaryEntry(p) => self.summary.push(SummaryEntry {
                ruler_name: p.ruler_name,
                start_date: p.dates.map(|(s, _)| s),
                end_date: p.dates.map(|(_, e)| e),
                line: p.line,
            }),
        }
    }

    /// Records a warning that is not tied to a period line.
    pub fn warn(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    /// Closes whatever is still open and hands over the tree.
    pub fn finish(mut self, person: PersonRecord) -> (DashaTree, Vec<Warning>) {
        self.stack.close_all(&mut self.closed);
        let ClosedNodes {
            periods,
            mut unattached,
        } = self.closed;
        unattached.sort_by_key(|n| n.line);

        let tree = DashaTree {
            person,
            dasha_system: self.dasha_system,
            periods,
            unattached,
            summary: self.summary,
        };
        (tree, self.warnings)
    }

    fn open_period(&mut self, p: PeriodLine) {
        let label = format!("{} {}", p.level, p.ruler_name);
        if p.dates.is_none() {
            self.warnings.push(Warning::at_line(
                WarningKind::UnparsableDate,
                p.line,
                format!("{label} has no readable start/end date pair"),
            ));
        }
        if p.ruler_malformed {
            self.warnings.push(Warning::at_line(
                WarningKind::MalformedRulerName,
                p.line,
                format!("no ruler name found on {} line, raw text kept", p.level),
            ));
        }

        if self.options.merge_repeated && self.try_merge(&p) {
            return;
        }

        self.stack.close_from(p.level, &mut self.closed);

        let orphan = !self.stack.has_parent(p.level);
        if orphan {
            let parent = p.level.parent().map(|l| l.tag()).unwrap_or("parent");
            debug!("line {}: {label} has no open {parent}", p.line);
            self.warnings.push(Warning::at_line(
                WarningKind::OrphanPeriod,
                p.line,
                format!("{label} opened with no enclosing {parent}; kept in unattached"),
            ));
        }

        self.stack.open(OpenNode {
            node: PeriodNode::new(p.level, p.ruler_name, p.dates, p.line, p.span),
            indent: p.indent,
            orphan,
        });
    }

    /// Extends the open sibling when the new period repeats its ruler and
    /// starts where it ends (same day or the day after).
    fn try_merge(&mut self, p: &PeriodLine) -> bool {
        let Some((start, end)) = p.dates else {
            return false;
        };
        if p.ruler_malformed {
            return false;
        }
        let Some(open) = self.stack.get(p.level) else {
            return false;
        };
        let Some(open_end) = open.node.end_date else {
            return false;
        };
        let adjacent = start == open_end || open_end.checked_add_days(Days::new(1)) == Some(start);
        if open.node.ruler_name != p.ruler_name || !adjacent {
            return false;
        }

        if let Some(child) = p.level.child() {
            self.stack.close_from(child, &mut self.closed);
        }
        if let Some(open) = self.stack.get_mut(p.level) {
            debug!(
                "line {}: merged {} {} into period from line {}",
                p.line, p.level, p.ruler_name, open.node.line
            );
            open.node.end_date = Some(end);
        }
        true
    }

    fn continuation(&mut self, text: String) {
        if self.options.continuation == ContinuationPolicy::Ignore {
            return;
        }
        match self.stack.deepest_mut() {
            Some(open) => open.node.notes.push(text),
            None => debug!("continuation with nothing open dropped: {text:?}"),
        }
    }
}

impl Default for HierarchyBuilder {
    fn default() -> Self {
        Self::new(BuildOptions::default())
    }
}
