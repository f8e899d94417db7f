use serde::Serialize;

/// Recoverable anomalies found while converting a file.
///
/// None of these stop a conversion; they are collected and written into the
/// output document next to the data they describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WarningKind {
    /// A period line had a level and ruler but no readable date pair.
    UnparsableDate,
    /// A deeper period opened with no enclosing parent open.
    OrphanPeriod,
    /// No known filename suffix matched.
    UnknownFilenameConvention,
    /// No ruler text could be isolated on a period line.
    MalformedRulerName,
    /// `startDate` is after `endDate`.
    InvertedDateRange,
    /// A sub-period starts before its previous sibling ends.
    OverlappingPeriods,
    /// Sub-periods do not span the parent's range within tolerance.
    DateRangeDrift,
    /// Input was longer than the configured bound and was cut.
    InputTruncated,
}

impl WarningKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnparsableDate => "UnparsableDate",
            Self::OrphanPeriod => "OrphanPeriod",
            Self::UnknownFilenameConvention => "UnknownFilenameConvention",
            Self::MalformedRulerName => "MalformedRulerName",
            Self::InvertedDateRange => "InvertedDateRange",
            Self::OverlappingPeriods => "OverlappingPeriods",
            Self::DateRangeDrift => "DateRangeDrift",
            Self::InputTruncated => "InputTruncated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub kind: WarningKind,
    /// 1-based source line, when the warning is tied to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub message: String,
}

impl Warning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            line: None,
            message: message.into(),
        }
    }

    pub fn at_line(kind: WarningKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line: Some(line),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{} (line {line}): {}", self.kind.as_str(), self.message),
            None => write!(f, "{}: {}", self.kind.as_str(), self.message),
        }
    }
}

/// Returns true if any warning of `kind` is present.
pub fn has_kind(warnings: &[Warning], kind: WarningKind) -> bool {
    warnings.iter().any(|w| w.kind == kind)
}
