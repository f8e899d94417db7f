use std::sync::OnceLock;

use regex::Regex;

/// Structural headings that group period lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// `Maha Dasas:` - a flat overview list of MD periods follows.
    Summary,
    /// `Antardasas in this MD:` and friends - nested detail follows.
    Detail,
}

/// Header lines: the dasha system title and section headings.
pub struct Header;

impl Header {
    /// Name of the dasha system if `line` is a title such as `Vimsottari Dasa:`
    /// or `K.N. Rao Chara Dasa (Rasi):`.
    pub fn system_name(line: &str) -> Option<String> {
        static SYSTEM: OnceLock<Regex> = OnceLock::new();
        let re = SYSTEM.get_or_init(|| {
            Regex::new(r"^(?P<name>[A-Za-z0-9 ().'_-]+? Dash?a(?: \([^)]+\))?)\s*:\s*$")
                .expect("Invalid system header regex")
        });
        re.captures(line.trim())
            .and_then(|c| c.name("name"))
            .map(|m| m.as_str().trim().to_string())
    }

    /// The section a heading such as `Pratyantardasas in this AD:` opens.
    ///
    /// Headings carry the literal level tags of their parent, so they must be
    /// recognised before any tag lookup.
    pub fn section(line: &str) -> Option<Section> {
        static SECTION: OnceLock<Regex> = OnceLock::new();
        let re = SECTION.get_or_init(|| {
            Regex::new(r"(?i)^(?P<what>[a-z][a-z \-]*?dash?as)\b[^0-9]*:$")
                .expect("Invalid section header regex")
        });
        let what = re.captures(line.trim())?.name("what")?.as_str();
        let squashed: String = what
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect::<String>()
            .to_ascii_lowercase();
        if squashed == "mahadasas" || squashed == "mahadashas" {
            Some(Section::Summary)
        } else {
            Some(Section::Detail)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Vimsottari Dasa:", Some("Vimsottari Dasa"))]
    #[case("K.N. Rao Chara Dasa:", Some("K.N. Rao Chara Dasa"))]
    #[case("Narayana Dasha (Rasi):", Some("Narayana Dasha (Rasi)"))]
    #[case("  Vimsottari Dasa:  ", Some("Vimsottari Dasa"))]
    #[case("Maha Dasas:", None)]
    #[case("Ju MD: 2000-01-01 - 2016-12-31", None)]
    #[case("Vimsottari Dasa: computed 2024", None)]
    fn system_names(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(Header::system_name(line).as_deref(), expected);
    }

    #[rstest]
    #[case("Maha Dasas:", Some(Section::Summary))]
    #[case("Mahadashas:", Some(Section::Summary))]
    #[case("Antardasas in this MD:", Some(Section::Detail))]
    #[case("    Pratyantardasas in this AD:", Some(Section::Detail))]
    #[case("        Sookshma-antardasas in this PD:", Some(Section::Detail))]
    #[case("Ju MD: 2000-01-01 - 2016-12-31", None)]
    #[case("Antardasas in this MD: 2000-01-01", None)]
    #[case("Vimsottari Dasa:", None)]
    fn sections(#[case] line: &str, #[case] expected: Option<Section>) {
        assert_eq!(Header::section(line), expected);
    }
}
