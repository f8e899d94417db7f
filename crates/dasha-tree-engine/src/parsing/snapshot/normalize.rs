use crate::models::{PeriodNode, Warning};
use crate::parsing::ParsedDoc;

/// Stable listing of a parsed document.
///
/// One row per node, prefixed by its source line so reordering shows up in
/// diffs; unattached nodes follow a marker row, warnings come last.
pub fn normalize(doc: &ParsedDoc, warnings: &[Warning]) -> String {
    let mut out = String::new();
    for node in &doc.tree.periods {
        rows(node, &mut out);
    }
    if !doc.tree.unattached.is_empty() {
        out.push_str("-- unattached --\n");
        for node in &doc.tree.unattached {
            rows(node, &mut out);
        }
    }
    for w in warnings {
        let line = w.line.map_or_else(|| "-".to_string(), |l| l.to_string());
        out.push_str(&format!("! {} @{line}\n", w.kind.as_str()));
    }
    out
}

fn rows(root: &PeriodNode, out: &mut String) {
    for node in root.descendants() {
        let dates = match (node.start_date, node.end_date) {
            (Some(s), Some(e)) => format!("{s}..{e}"),
            _ => "no dates".to_string(),
        };
        let pad = "  ".repeat(node.level.index());
        out.push_str(&format!(
            "L{:03} {pad}{} {} {dates}\n",
            node.line, node.level, node.ruler_name
        ));
        for note in &node.notes {
            out.push_str(&format!("L{:03} {pad}  # {note}\n", node.line));
        }
    }
}
