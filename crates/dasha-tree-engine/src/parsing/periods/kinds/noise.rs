use regex::Regex;

/// Boilerplate that generators wrap around dasha tables.
pub const DEFAULT_NOISE_PATTERNS: [&str; 5] = [
    r"(?i)^generated\s+(by|on|with)\b",
    r"(?i)^page\s+\d+(\s+of\s+\d+)?$",
    r"(?i)^(copyright|\(c\)|©)",
    r"(?i)^name\s*:",
    r"(?i)^(date|time|place)\s+of\s+birth\b",
];

/// Recognises lines that carry no data.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    patterns: Vec<Regex>,
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_NOISE_PATTERNS
                .iter()
                .map(|p| Regex::new(p).expect("Invalid default noise pattern"))
                .collect(),
        }
    }
}

impl NoiseFilter {
    /// Builds a filter from user patterns, replacing the defaults.
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Self, regex::Error> {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Blank, separator (no letters or digits at all) or boilerplate.
    ///
    /// `text` should already have indentation and markers removed.
    pub fn is_noise(&self, text: &str) -> bool {
        let t = text.trim();
        if !t.chars().any(char::is_alphanumeric) {
            return true;
        }
        self.patterns.iter().any(|re| re.is_match(t))
    }
}
