//! Person identity from source filenames.
//!
//! Generators decorate stems with tool and system names
//! (`Asha_Devi_1345_VimsottariDasa_PyJHora_RawText.txt`). Those decorations
//! are a data table, so new conventions are new rows.

use std::sync::OnceLock;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{PersonRecord, Warning, WarningKind};

pub const DEFAULT_SUFFIXES: [&str; 13] = [
    "-JHora",
    "_JHora",
    "_PyJHora_RawText",
    "_PyJHoraText_PyJHoraRaw",
    "_PyJHoraRaw",
    "_PyJHoraText",
    "_PyJHora",
    "_RawText",
    "_VimsottariDasa",
    "-VimsottariDasa",
    "_KNRaoCharaDasa",
    "-KNRaoCharaDasa",
    " - Copy",
];

/// Used when a filename has nothing left to name a person.
pub const UNKNOWN_PERSON: &str = "unknown";

/// One decoration that may end a filename stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixRule {
    pub suffix: String,
    #[serde(default)]
    pub case_sensitive: bool,
}

impl SuffixRule {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            case_sensitive: false,
        }
    }

    /// `stem` without this suffix, if it ends with it.
    fn strip<'a>(&self, stem: &'a str) -> Option<&'a str> {
        let n = self.suffix.len();
        if n == 0 || stem.len() < n || !stem.is_char_boundary(stem.len() - n) {
            return None;
        }
        let (head, tail) = stem.split_at(stem.len() - n);
        let matches = if self.case_sensitive {
            tail == self.suffix
        } else {
            tail.eq_ignore_ascii_case(&self.suffix)
        };
        matches.then_some(head)
    }
}

/// Ordered suffix rules. Earlier rules are tried first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixTable {
    rules: Vec<SuffixRule>,
}

impl Default for SuffixTable {
    fn default() -> Self {
        Self::new(DEFAULT_SUFFIXES.iter().map(|s| SuffixRule::new(*s)).collect())
    }
}

impl SuffixTable {
    pub fn new(rules: Vec<SuffixRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[SuffixRule] {
        &self.rules
    }

    /// Strips suffixes until none applies, rescanning from the first rule
    /// after every hit. Returns the remaining stem and whether any rule hit.
    pub fn strip<'a>(&self, stem: &'a str) -> (&'a str, bool) {
        let mut rest = stem;
        let mut matched = false;
        while let Some(shorter) = self.rules.iter().find_map(|r| r.strip(rest)) {
            rest = shorter;
            matched = true;
        }
        (rest, matched)
    }
}

/// Last path component, with either separator style.
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Filename without directories and extension.
pub fn file_stem(filename: &str) -> &str {
    let name = file_name(filename);
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// Derives the person record from a filename.
///
/// Never fails: an unrecognised convention yields the whole stem as the
/// person id plus an `UnknownFilenameConvention` warning.
pub fn extract_person(filename: &str, suffixes: &SuffixTable) -> (PersonRecord, Option<Warning>) {
    let stem = file_stem(filename).trim();
    if !usable_as_folder(stem) {
        return (
            PersonRecord {
                person_id: UNKNOWN_PERSON.to_string(),
                birth_time_stamp: None,
            },
            Some(Warning::new(
                WarningKind::UnknownFilenameConvention,
                format!("no name in filename {filename:?}"),
            )),
        );
    }

    let (rest, matched) = suffixes.strip(stem);
    let (head, birth_time_stamp) = split_time_stamp(rest);

    if !matched {
        debug!("{filename}: no known suffix, using whole stem");
        let person = PersonRecord {
            person_id: stem.to_string(),
            birth_time_stamp,
        };
        let warning = Warning::new(
            WarningKind::UnknownFilenameConvention,
            format!("no known suffix in {stem:?}; whole stem used as person id"),
        );
        return (person, Some(warning));
    }

    let person_id = head.trim_end_matches(['_', '-', ' ']);
    if person_id.is_empty() {
        let person = PersonRecord {
            person_id: UNKNOWN_PERSON.to_string(),
            birth_time_stamp,
        };
        return (person, None);
    }
    if !usable_as_folder(person_id) {
        let person = PersonRecord {
            person_id: UNKNOWN_PERSON.to_string(),
            birth_time_stamp,
        };
        let warning = Warning::new(
            WarningKind::UnknownFilenameConvention,
            format!("{person_id:?} from {stem:?} cannot name a folder"),
        );
        return (person, Some(warning));
    }
    (
        PersonRecord {
            person_id: person_id.to_string(),
            birth_time_stamp,
        },
        None,
    )
}

/// The person id names the output folder, so `.`, `..` and other all-dot
/// names are out, as is an empty one.
fn usable_as_folder(id: &str) -> bool {
    !id.chars().all(|c| c == '.')
}

/// Splits a trailing `_HHMM` / `-HHMM` / ` HHMM` token off.
fn split_time_stamp(s: &str) -> (&str, Option<String>) {
    static TRAILING_TIME: OnceLock<Regex> = OnceLock::new();
    let re = TRAILING_TIME.get_or_init(|| {
        Regex::new(r"^(?P<head>.*?)[_\- ](?P<ts>\d{4})$").expect("Invalid time stamp regex")
    });
    match re.captures(s) {
        Some(c) => {
            let head = c.name("head").map_or("", |m| m.as_str());
            let ts = c.name("ts").map(|m| m.as_str().to_string());
            (head, ts)
        }
        None => (s, None),
    }
}

/// Dasha system implied by a filename, for documents without a title line.
pub fn system_hint(filename: &str) -> Option<String> {
    let stem = file_stem(filename).to_ascii_lowercase();
    if stem.contains("vimsottari") {
        Some("Vimsottari Dasa".to_string())
    } else if stem.contains("knraocharadasa") || stem.contains("chara") {
        Some("K.N. Rao Chara Dasa".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn extract(filename: &str) -> (PersonRecord, Option<Warning>) {
        extract_person(filename, &SuffixTable::default())
    }

    #[rstest]
    #[case("Asha_Devi_1345-JHora.txt", "Asha_Devi", Some("1345"))]
    #[case("Asha_Devi_1345_VimsottariDasa_PyJHora_RawText.txt", "Asha_Devi", Some("1345"))]
    #[case("Ravi_Kumar_0730_KNRaoCharaDasa_PyJHora_RawText.txt", "Ravi_Kumar", Some("0730"))]
    #[case("data/in/Meera-2210-VimsottariDasa.TXT", "Meera", Some("2210"))]
    #[case("Asha Devi 1345 - Copy.txt", "Asha Devi", Some("1345"))]
    #[case("Asha_Devi_jhora.txt", "Asha_Devi", None)]
    #[case("Sunil_12345_PyJHora.txt", "Sunil_12345", None)]
    fn known_conventions(#[case] filename: &str, #[case] id: &str, #[case] ts: Option<&str>) {
        let (person, warning) = extract(filename);
        assert_eq!(person.person_id, id);
        assert_eq!(person.birth_time_stamp.as_deref(), ts);
        assert_eq!(warning, None);
    }

    #[rstest]
    #[case("Asha_Devi_1345.txt", "Asha_Devi_1345", Some("1345"))]
    #[case("notes.txt", "notes", None)]
    #[case("C:\\charts\\Gopal-0915.final.txt", "Gopal-0915.final", None)]
    fn unknown_convention_keeps_whole_stem(#[case] filename: &str, #[case] id: &str, #[case] ts: Option<&str>) {
        let (person, warning) = extract(filename);
        assert_eq!(person.person_id, id);
        assert_eq!(person.birth_time_stamp.as_deref(), ts);
        assert_eq!(
            warning.map(|w| w.kind),
            Some(WarningKind::UnknownFilenameConvention)
        );
    }

    #[rstest]
    #[case("")]
    #[case("dir/")]
    #[case("  .txt")]
    #[case("...txt")]
    #[case("charts/...")]
    fn empty_stem_is_unknown(#[case] filename: &str) {
        let (person, warning) = extract(filename);
        assert_eq!(person.person_id, UNKNOWN_PERSON);
        assert!(warning.is_some());
    }

    #[rstest]
    #[case("..-JHora.txt", None)]
    #[case("._1345_PyJHora.txt", Some("1345"))]
    fn dot_names_fall_back_to_unknown(#[case] filename: &str, #[case] ts: Option<&str>) {
        let (person, warning) = extract(filename);
        assert_eq!(person.person_id, UNKNOWN_PERSON);
        assert_eq!(person.birth_time_stamp.as_deref(), ts);
        assert_eq!(warning.map(|w| w.kind), Some(WarningKind::UnknownFilenameConvention));
    }

    #[test]
    fn case_sensitive_rules_respect_case() {
        let table = SuffixTable::new(vec![SuffixRule {
            suffix: "_RAW".into(),
            case_sensitive: true,
        }]);
        assert_eq!(table.strip("Asha_RAW"), ("Asha", true));
        assert_eq!(table.strip("Asha_raw"), ("Asha_raw", false));
    }

    #[test]
    fn stacked_suffixes_come_off_in_any_order() {
        let table = SuffixTable::default();
        assert_eq!(table.strip("X_PyJHora_VimsottariDasa_RawText"), ("X", true));
    }

    #[rstest]
    #[case("Asha_Devi_1345_VimsottariDasa_PyJHora_RawText.txt", Some("Vimsottari Dasa"))]
    #[case("Asha_Devi_1345_KNRaoCharaDasa_PyJHora_RawText.txt", Some("K.N. Rao Chara Dasa"))]
    #[case("Asha_Devi_1345-JHora.txt", None)]
    fn system_hints(#[case] filename: &str, #[case] expected: Option<&str>) {
        assert_eq!(system_hint(filename).as_deref(), expected);
    }
}
