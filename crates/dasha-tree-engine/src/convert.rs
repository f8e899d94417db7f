use std::path::Path;

use log::debug;

use crate::io::{IoError, read_input};
use crate::metadata::{file_name, file_stem};
use crate::models::{DashaTree, Warning};
use crate::output::{OutputDocument, render_outline};
use crate::parsing::{ParseOptions, parse_document, validate::validate};

/// The result of converting one file.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// File name the tree was read from, without directories.
    pub source_file: String,
    pub tree: DashaTree,
    /// Filename, building, then validation warnings.
    pub warnings: Vec<Warning>,
}

impl Conversion {
    /// `<personId>_<birthTimeStamp>`, or just the person id.
    pub fn person_folder(&self) -> String {
        let person = &self.tree.person;
        match &person.birth_time_stamp {
            Some(ts) => format!("{}_{ts}", person.person_id),
            None => person.person_id.clone(),
        }
    }

    pub fn outline(&self) -> String {
        render_outline(&self.tree)
    }

    pub fn into_parts(self) -> (OutputDocument, Vec<Warning>) {
        let warnings = self.warnings.clone();
        (OutputDocument::new(self.tree, self.source_file, self.warnings), warnings)
    }

    pub fn into_document(self) -> OutputDocument {
        OutputDocument::new(self.tree, self.source_file, self.warnings)
    }
}

/// Converts one document. Pure: the same input always gives the same result.
pub fn convert(filename: &str, contents: &str, options: &ParseOptions) -> Conversion {
    let parsed = parse_document(filename, contents, options);
    let mut warnings = parsed.warnings;
    warnings.extend(validate(&parsed.tree, options.drift_tolerance_days));

    let source_file = file_name(filename).to_string();
    debug!("converted {source_file} ({} warning(s))", warnings.len());

    Conversion {
        source_file,
        tree: parsed.tree,
        warnings,
    }
}

/// Reads and converts a file. Only an unreadable file is an error.
pub fn convert_file(path: &Path, options: &ParseOptions) -> Result<Conversion, IoError> {
    let contents = read_input(path)?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_stem(&path.to_string_lossy()).to_string());
    Ok(convert(&filename, &contents, options))
}
