use std::collections::BTreeMap;

/// Words that join a ruler name to its dates and carry no meaning.
const CONNECTORS: [&str; 8] = ["to", "from", "till", "until", "of", "and", "thru", "through"];

const DEFAULT_NAMES: &[(&str, &str)] = &[
    // Grahas: full names, PyJHora short names, Sanskrit names
    ("sun", "Sun"),
    ("su", "Sun"),
    ("surya", "Sun"),
    ("ravi", "Sun"),
    ("moon", "Moon"),
    ("mo", "Moon"),
    ("chandra", "Moon"),
    ("soma", "Moon"),
    ("mars", "Mars"),
    ("ma", "Mars"),
    ("mangal", "Mars"),
    ("mangala", "Mars"),
    ("kuja", "Mars"),
    ("mercury", "Mercury"),
    ("me", "Mercury"),
    ("budha", "Mercury"),
    ("jupiter", "Jupiter"),
    ("ju", "Jupiter"),
    ("guru", "Jupiter"),
    ("brihaspati", "Jupiter"),
    ("venus", "Venus"),
    ("ve", "Venus"),
    ("shukra", "Venus"),
    ("sukra", "Venus"),
    ("saturn", "Saturn"),
    ("sa", "Saturn"),
    ("shani", "Saturn"),
    ("sani", "Saturn"),
    ("rahu", "Rahu"),
    ("ra", "Rahu"),
    ("ketu", "Ketu"),
    ("ke", "Ketu"),
    // Rashis: full names, short names, Sanskrit names
    ("aries", "Aries"),
    ("ar", "Aries"),
    ("mesha", "Aries"),
    ("taurus", "Taurus"),
    ("ta", "Taurus"),
    ("vrishabha", "Taurus"),
    ("gemini", "Gemini"),
    ("ge", "Gemini"),
    ("mithuna", "Gemini"),
    ("cancer", "Cancer"),
    ("cn", "Cancer"),
    ("karka", "Cancer"),
    ("kataka", "Cancer"),
    ("leo", "Leo"),
    ("le", "Leo"),
    ("simha", "Leo"),
    ("virgo", "Virgo"),
    ("vi", "Virgo"),
    ("kanya", "Virgo"),
    ("libra", "Libra"),
    ("li", "Libra"),
    ("tula", "Libra"),
    ("scorpio", "Scorpio"),
    ("sc", "Scorpio"),
    ("vrischika", "Scorpio"),
    ("sagittarius", "Sagittarius"),
    ("sg", "Sagittarius"),
    ("dhanu", "Sagittarius"),
    ("capricorn", "Capricorn"),
    ("cp", "Capricorn"),
    ("makara", "Capricorn"),
    ("aquarius", "Aquarius"),
    ("aq", "Aquarius"),
    ("kumbha", "Aquarius"),
    ("pisces", "Pisces"),
    ("pi", "Pisces"),
    ("meena", "Pisces"),
    // Ascendant
    ("ascendant", "Ascendant"),
    ("asc", "Ascendant"),
    ("lagna", "Ascendant"),
    ("l", "Ascendant"),
];

/// Lookup table from ruler spellings to canonical names.
///
/// Keys are compared case-insensitively with inner whitespace collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulerTable {
    names: BTreeMap<String, String>,
}

impl Default for RulerTable {
    fn default() -> Self {
        Self {
            names: DEFAULT_NAMES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl RulerTable {
    /// Adds or overrides spellings. Later aliases win over the built-in table.
    pub fn with_aliases<'a>(mut self, aliases: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        for (alias, canonical) in aliases {
            self.names.insert(key(alias), canonical.trim().to_string());
        }
        self
    }

    /// Canonical name for `raw`, or `raw` itself (whitespace-collapsed) if unknown.
    pub fn canonical(&self, raw: &str) -> String {
        let k = key(raw);
        match self.names.get(&k) {
            Some(name) => name.clone(),
            None => collapse_whitespace(raw),
        }
    }

    pub fn is_known(&self, raw: &str) -> bool {
        self.names.contains_key(&key(raw))
    }
}

/// Reduces the leftover text of a period line to the bare ruler words.
///
/// `rest` is the line with level tag and dates already blanked out. Edge
/// punctuation, connector words and pure-punctuation tokens are dropped.
/// Reading stops at the first token holding a digit, which is where an
/// unreadable date begins.
pub fn ruler_words(rest: &str) -> String {
    rest.split_whitespace()
        .take_while(|tok| !tok.chars().any(|c| c.is_ascii_digit()))
        .map(|tok| tok.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|tok| !tok.is_empty())
        .filter(|tok| !CONNECTORS.contains(&tok.to_ascii_lowercase().as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn key(raw: &str) -> String {
    collapse_whitespace(raw).to_lowercase()
}

fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
