use crate::models::{DashaLevel, LEVEL_COUNT};

/// What the classifier may know about the parse so far.
///
/// Built by the hierarchy builder before each line; the classifier itself
/// keeps no state between lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyContext {
    /// Indentation column of the open period at each level.
    pub indents: [Option<usize>; LEVEL_COUNT],
    /// Inside a `Maha Dasas:` overview block.
    pub in_summary: bool,
}

impl ClassifyContext {
    pub fn any_open(&self) -> bool {
        self.indents.iter().any(Option::is_some)
    }

    /// Deepest level with an open period.
    pub fn deepest_open(&self) -> Option<DashaLevel> {
        self.indents
            .iter()
            .rposition(Option::is_some)
            .and_then(DashaLevel::from_index)
    }

    /// Level implied by indentation alone, for lines without a level tag.
    ///
    /// Deeper than the deepest open period means its child (SD stays SD).
    /// Otherwise the line is a sibling of the deepest open level indented no
    /// further than it, or MD when there is none.
    pub fn level_for_indent(&self, indent: usize) -> DashaLevel {
        let Some(deepest) = self.deepest_open() else {
            return DashaLevel::Mahadasha;
        };
        let deepest_indent = self.indents[deepest.index()].unwrap_or(0);
        if indent > deepest_indent {
            return deepest.child().unwrap_or(deepest);
        }
        DashaLevel::ALL
            .into_iter()
            .rev()
            .find(|l| self.indents[l.index()].is_some_and(|i| i <= indent))
            .unwrap_or(DashaLevel::Mahadasha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ctx(indents: [Option<usize>; LEVEL_COUNT]) -> ClassifyContext {
        ClassifyContext {
            indents,
            in_summary: false,
        }
    }

    #[test]
    fn nothing_open_is_md() {
        assert_eq!(ClassifyContext::default().level_for_indent(8), DashaLevel::Mahadasha);
    }

    #[rstest]
    #[case(0, DashaLevel::Mahadasha)]
    #[case(2, DashaLevel::Mahadasha)]
    #[case(4, DashaLevel::Antardasha)]
    #[case(6, DashaLevel::Pratyantardasha)]
    fn nested_levels(#[case] indent: usize, #[case] expected: DashaLevel) {
        let c = ctx([Some(0), Some(4), None, None]);
        assert_eq!(c.level_for_indent(indent), expected);
    }

    #[test]
    fn sd_is_the_floor() {
        let c = ctx([Some(0), Some(2), Some(4), Some(6)]);
        assert_eq!(c.level_for_indent(12), DashaLevel::Sookshmadasha);
    }

    #[test]
    fn orphan_stack_without_md() {
        let c = ctx([None, Some(4), None, None]);
        assert_eq!(c.deepest_open(), Some(DashaLevel::Antardasha));
        assert_eq!(c.level_for_indent(0), DashaLevel::Mahadasha);
        assert_eq!(c.level_for_indent(4), DashaLevel::Antardasha);
    }
}
