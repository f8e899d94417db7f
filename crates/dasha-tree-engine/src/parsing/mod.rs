pub mod periods;
pub mod rope;
/// Outline and invariant helpers for tests. Panics on broken trees, so it is
/// not part of the supported API.
#[doc(hidden)]
pub mod snapshot;
pub mod validate;

#[cfg(test)]
mod tests;

use log::debug;
use xi_rope::Rope;

use crate::metadata::{self, SuffixTable};
use crate::models::{DashaTree, Warning, WarningKind};
use periods::{BuildOptions, DashaLineClassifier, HierarchyBuilder};
use periods::kinds::{NoiseFilter, RulerTable};
use rope::lines_with_spans;

pub const DEFAULT_MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;
pub const DEFAULT_DRIFT_TOLERANCE_DAYS: u64 = 1;

/// Every knob that shapes a conversion.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub build: BuildOptions,
    /// Allowed gap in days between a parent's range and its children's span.
    pub drift_tolerance_days: u64,
    /// Longer input is cut at the last whole line within the bound.
    pub max_input_bytes: usize,
    pub rulers: RulerTable,
    pub noise: NoiseFilter,
    pub suffixes: SuffixTable,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            build: BuildOptions::default(),
            drift_tolerance_days: DEFAULT_DRIFT_TOLERANCE_DAYS,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            rulers: RulerTable::default(),
            noise: NoiseFilter::default(),
            suffixes: SuffixTable::default(),
        }
    }
}

#[derive(Debug)]
pub struct ParsedDoc {
    /// The text that was parsed (after any truncation). Node spans index it.
    pub rope: Rope,
    pub tree: DashaTree,
    /// Filename and building warnings, in that order.
    pub warnings: Vec<Warning>,
}

/// Classifies and folds one document into a tree. Never fails.
pub fn parse_document(filename: &str, contents: &str, options: &ParseOptions) -> ParsedDoc {
    let (person, filename_warning) = metadata::extract_person(filename, &options.suffixes);
    let (kept, truncated) = bound_input(contents, options.max_input_bytes);
    let rope = Rope::from(kept);

    let classifier = DashaLineClassifier::new(options.rulers.clone(), options.noise.clone());
    let mut builder = HierarchyBuilder::new(options.build);

    for lr in lines_with_spans(&rope) {
        let class = classifier.classify(&lr, &builder.context());
        builder.push(class);
    }

    if truncated {
        builder.warn(Warning::new(
            WarningKind::InputTruncated,
            format!(
                "input is {} bytes; only the first {} bytes were read",
                contents.len(),
                kept.len()
            ),
        ));
    }

    let (mut tree, build_warnings) = builder.finish(person);
    if tree.dasha_system.is_none() {
        tree.dasha_system = metadata::system_hint(filename);
    }

    let mut warnings: Vec<Warning> = filename_warning.into_iter().collect();
    warnings.extend(build_warnings);
    debug!(
        "{filename}: {} period(s), {} unattached, {} warning(s)",
        tree.node_count(),
        tree.unattached.len(),
        warnings.len()
    );

    ParsedDoc {
        rope,
        tree,
        warnings,
    }
}

/// Cuts `contents` after the last newline within `max` bytes.
fn bound_input(contents: &str, max: usize) -> (&str, bool) {
    if contents.len() <= max {
        return (contents, false);
    }
    // A newline byte never sits inside a multi-byte character.
    let cut = contents.as_bytes()[..max]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    (&contents[..cut], true)
}
