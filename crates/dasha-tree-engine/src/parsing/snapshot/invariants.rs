use crate::models::{DashaLevel, PeriodNode};
use crate::parsing::ParsedDoc;
use crate::parsing::rope::preview;

/// Structural checks that hold for any input.
pub fn check(doc: &ParsedDoc) {
    let n = doc.rope.len();
    let mut last_line = 0usize;

    for root in &doc.tree.periods {
        assert_eq!(
            root.level,
            DashaLevel::Mahadasha,
            "top-level node is not MD: {} {} (line {})",
            root.level,
            root.ruler_name,
            root.line
        );
    }

    for node in doc.tree.periods.iter().flat_map(PeriodNode::descendants) {
        assert!(
            node.line > last_line,
            "tree not in document order: line {} after line {last_line}",
            node.line
        );
        last_line = node.line;
    }

    for node in doc.tree.nodes() {
        assert!(
            node.span.within(n),
            "node span out of bounds: {:?} (rope len: {})",
            node.span,
            n
        );
        assert!(
            !preview(&doc.rope, node.span, 80).is_empty(),
            "node {} {} points at an empty line",
            node.level,
            node.ruler_name
        );
        for child in &node.children {
            assert_eq!(
                Some(child.level),
                node.level.child(),
                "{} {} (line {}) nested under {} {}",
                child.level,
                child.ruler_name,
                child.line,
                node.level,
                node.ruler_name
            );
        }
    }
}

/// Every dated node starts no later than it ends. Only for well-formed input.
pub fn check_date_order(doc: &ParsedDoc) {
    for node in doc.tree.nodes() {
        if let (Some(s), Some(e)) = (node.start_date, node.end_date) {
            assert!(
                s <= e,
                "{} {} (line {}) starts {s} after {e}",
                node.level,
                node.ruler_name,
                node.line
            );
        }
    }
}
