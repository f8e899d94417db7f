use crate::models::{DashaLevel, LEVEL_COUNT, PeriodNode};

use super::context::ClassifyContext;

/// A period that has been opened and may still receive children.
#[derive(Debug, Clone)]
pub struct OpenNode {
    pub node: PeriodNode,
    pub indent: usize,
    /// Opened with no enclosing parent; closes into the unattached bucket.
    pub orphan: bool,
}

/// Where closed top-level nodes end up.
#[derive(Debug, Default)]
pub struct ClosedNodes {
    pub periods: Vec<PeriodNode>,
    pub unattached: Vec<PeriodNode>,
}

/// The open-node stack, one owned slot per level.
///
/// A node lives in its slot while open and is moved into its parent's
/// children when closed. Since children always close before their parent,
/// every subtree is complete by the time it is moved.
#[derive(Debug, Default)]
pub struct OpenStack {
    slots: [Option<OpenNode>; LEVEL_COUNT],
}

impl OpenStack {
    pub fn get(&self, level: DashaLevel) -> Option<&OpenNode> {
        self.slots[level.index()].as_ref()
    }

    pub fn get_mut(&mut self, level: DashaLevel) -> Option<&mut OpenNode> {
        self.slots[level.index()].as_mut()
    }

    pub fn deepest_mut(&mut self) -> Option<&mut OpenNode> {
        self.slots.iter_mut().rev().find_map(Option::as_mut)
    }

    /// True if the node at `level` would have an open parent.
    pub fn has_parent(&self, level: DashaLevel) -> bool {
        match level.parent() {
            Some(parent) => self.get(parent).is_some(),
            None => true,
        }
    }

    /// Places a node in its level's slot. The slot and all deeper ones must
    /// already be closed.
    pub fn open(&mut self, open: OpenNode) {
        let i = open.node.level.index();
        debug_assert!(self.slots[i..].iter().all(Option::is_none));
        self.slots[i] = Some(open);
    }

    /// Closes every open node at `level` or deeper, deepest first.
    pub fn close_from(&mut self, level: DashaLevel, out: &mut ClosedNodes) {
        for i in (level.index()..LEVEL_COUNT).rev() {
            let Some(closed) = self.slots[i].take() else {
                continue;
            };
            let parent = i.checked_sub(1).and_then(|p| self.slots[p].as_mut());
            match (closed.orphan, parent) {
                (true, _) => out.unattached.push(closed.node),
                (false, Some(parent)) => parent.node.children.push(closed.node),
                (false, None) if i == 0 => out.periods.push(closed.node),
                (false, None) => out.unattached.push(closed.node),
            }
        }
    }

    pub fn close_all(&mut self, out: &mut ClosedNodes) {
        self.close_from(DashaLevel::Mahadasha, out);
    }

    pub fn context(&self, in_summary: bool) -> ClassifyContext {
        let indents = std::array::from_fn(|i| self.slots[i].as_ref().map(|o| o.indent));
        ClassifyContext {
            indents,
            in_summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::rope::Span;

    fn open(stack: &mut OpenStack, level: DashaLevel, ruler: &str) {
        let orphan = !stack.has_parent(level);
        stack.open(OpenNode {
            node: PeriodNode::new(level, ruler, None, 1, Span::default()),
            indent: level.index() * 4,
            orphan,
        });
    }

    #[test]
    fn closing_moves_children_into_parents() {
        let mut stack = OpenStack::default();
        let mut out = ClosedNodes::default();
        open(&mut stack, DashaLevel::Mahadasha, "Jupiter");
        open(&mut stack, DashaLevel::Antardasha, "Saturn");
        open(&mut stack, DashaLevel::Pratyantardasha, "Mercury");
        stack.close_all(&mut out);

        assert_eq!(out.periods.len(), 1);
        assert!(out.unattached.is_empty());
        let md = &out.periods[0];
        assert_eq!(md.children[0].ruler_name, "Saturn");
        assert_eq!(md.children[0].children[0].ruler_name, "Mercury");
    }

    #[test]
    fn orphans_close_into_unattached_with_their_subtree() {
        let mut stack = OpenStack::default();
        let mut out = ClosedNodes::default();
        open(&mut stack, DashaLevel::Antardasha, "Saturn");
        open(&mut stack, DashaLevel::Pratyantardasha, "Mercury");
        stack.close_all(&mut out);

        assert!(out.periods.is_empty());
        assert_eq!(out.unattached.len(), 1);
        assert_eq!(out.unattached[0].children.len(), 1);
    }

    #[test]
    fn context_reflects_open_slots() {
        let mut stack = OpenStack::default();
        open(&mut stack, DashaLevel::Mahadasha, "Jupiter");
        open(&mut stack, DashaLevel::Antardasha, "Saturn");
        let ctx = stack.context(false);
        assert_eq!(ctx.deepest_open(), Some(DashaLevel::Antardasha));
        assert_eq!(ctx.indents, [Some(0), Some(4), None, None]);

        let mut out = ClosedNodes::default();
        stack.close_from(DashaLevel::Antardasha, &mut out);
        assert_eq!(stack.context(false).deepest_open(), Some(DashaLevel::Mahadasha));
    }
}
