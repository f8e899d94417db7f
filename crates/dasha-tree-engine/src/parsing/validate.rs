use log::debug;

use crate::models::{DashaTree, PeriodNode, Warning, WarningKind};

/// Checks date consistency across a built tree. Reports, never corrects.
///
/// Walks the tree then the unattached bucket depth-first in document order.
/// For each node: inverted range, then drift of its children against it,
/// then overlaps between consecutive children. Drift means the first child
/// starting away from the parent's start, or the last child ending after the
/// parent's end, by more than the tolerance.
pub fn validate(tree: &DashaTree, drift_tolerance_days: u64) -> Vec<Warning> {
    let mut warnings = vec![];
    let tolerance = i64::try_from(drift_tolerance_days).unwrap_or(i64::MAX);

    for node in tree.nodes() {
        if let (Some(start), Some(end)) = (node.start_date, node.end_date)
            && start > end
        {
            warnings.push(Warning::at_line(
                WarningKind::InvertedDateRange,
                node.line,
                format!("{} {} starts {start} after it ends {end}", node.level, node.ruler_name),
            ));
        }
        check_drift(node, tolerance, &mut warnings);
        check_overlaps(node, &mut warnings);
    }

    if !warnings.is_empty() {
        debug!("validation found {} issue(s)", warnings.len());
    }
    warnings
}

fn check_drift(parent: &PeriodNode, tolerance: i64, out: &mut Vec<Warning>) {
    let (Some(first), Some(last)) = (parent.children.first(), parent.children.last()) else {
        return;
    };
    let (Some(p_start), Some(p_end)) = (parent.start_date, parent.end_date) else {
        return;
    };

    let mut gaps = vec![];
    if let Some(c_start) = first.start_date {
        let days = (c_start - p_start).num_days();
        if days.abs() > tolerance {
            gaps.push(format!("first sub-period starts {c_start}, {days:+} days from {p_start}"));
        }
    }
    // Listings that stop early are excerpts; only running past the end counts.
    if let Some(c_end) = last.end_date {
        let days = (c_end - p_end).num_days();
        if days > tolerance {
            gaps.push(format!("last sub-period ends {c_end}, {days:+} days after {p_end}"));
        }
    }
    if !gaps.is_empty() {
        out.push(Warning::at_line(
            WarningKind::DateRangeDrift,
            parent.line,
            format!("{} {}: {}", parent.level, parent.ruler_name, gaps.join("; ")),
        ));
    }
}

fn check_overlaps(parent: &PeriodNode, out: &mut Vec<Warning>) {
    for pair in parent.children.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if let (Some(prev_end), Some(next_start)) = (prev.end_date, next.start_date)
            && next_start < prev_end
        {
            out.push(Warning::at_line(
                WarningKind::OverlappingPeriods,
                next.line,
                format!(
                    "{} {} starts {next_start} before {} {} ends {prev_end}",
                    next.level, next.ruler_name, prev.level, prev.ruler_name
                ),
            ));
        }
    }
}
