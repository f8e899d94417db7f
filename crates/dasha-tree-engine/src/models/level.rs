use serde::{Deserialize, Serialize};

/// Number of tiers in the period hierarchy (MD, AD, PD, SD).
pub const LEVEL_COUNT: usize = 4;

/// The four nesting tiers of a dasha table, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DashaLevel {
    #[serde(rename = "MD")]
    Mahadasha,
    #[serde(rename = "AD")]
    Antardasha,
    #[serde(rename = "PD")]
    Pratyantardasha,
    #[serde(rename = "SD")]
    Sookshmadasha,
}

impl DashaLevel {
    pub const ALL: [DashaLevel; LEVEL_COUNT] = [
        Self::Mahadasha,
        Self::Antardasha,
        Self::Pratyantardasha,
        Self::Sookshmadasha,
    ];

    /// Slot of this level in the open-node stack (MD = 0 .. SD = 3).
    pub const fn index(self) -> usize {
        match self {
            Self::Mahadasha => 0,
            Self::Antardasha => 1,
            Self::Pratyantardasha => 2,
            Self::Sookshmadasha => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Short tag as it appears in source text.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Mahadasha => "MD",
            Self::Antardasha => "AD",
            Self::Pratyantardasha => "PD",
            Self::Sookshmadasha => "SD",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.tag() == tag)
    }

    /// The enclosing level, `None` for MD.
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Mahadasha => None,
            Self::Antardasha => Some(Self::Mahadasha),
            Self::Pratyantardasha => Some(Self::Antardasha),
            Self::Sookshmadasha => Some(Self::Pratyantardasha),
        }
    }

    /// Next deeper level, `None` for SD.
    pub const fn child(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => Some(Self::Sookshmadasha),
            Self::Sookshmadasha => None,
        }
    }
}

impl std::fmt::Display for DashaLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
