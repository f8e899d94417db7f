use std::ops::Range;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::{Captures, Regex};

/// Date notations understood on period lines, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePattern {
    /// `2000-01-31`, `2000/01/31`, optionally followed by a clock time.
    IsoDateTime,
    /// `31-01-2000`, `31/01/2000`, `31.01.2000` (day first).
    DayFirstNumeric,
    /// `31 Jan 2000`, `31-Jan-2000`, `31st January, 2000`.
    DayMonthName,
    /// `Jan 31, 2000`, `January 31 2000`.
    MonthNameDay,
}

/// A start/end pair read from one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub pattern: DatePattern,
    /// Byte ranges of the start and end dates in the line.
    pub ranges: [Range<usize>; 2],
}

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

impl DatePattern {
    pub const ALL: [DatePattern; 4] = [
        Self::IsoDateTime,
        Self::DayFirstNumeric,
        Self::DayMonthName,
        Self::MonthNameDay,
    ];

    fn regex(self) -> &'static Regex {
        static ISO: OnceLock<Regex> = OnceLock::new();
        static DAY_FIRST: OnceLock<Regex> = OnceLock::new();
        static DAY_MONTH: OnceLock<Regex> = OnceLock::new();
        static MONTH_DAY: OnceLock<Regex> = OnceLock::new();

        match self {
            Self::IsoDateTime => ISO.get_or_init(|| {
                Regex::new(
                    r"\b(?P<y>\d{4})[-/.](?P<m>\d{1,2})[-/.](?P<d>\d{1,2})(?:[T ]\d{1,2}:\d{2}(?::\d{2})?)?\b",
                )
                .expect("Invalid ISO date regex")
            }),
            Self::DayFirstNumeric => DAY_FIRST.get_or_init(|| {
                Regex::new(r"\b(?P<d>\d{1,2})[-/.](?P<m>\d{1,2})[-/.](?P<y>\d{4})\b")
                    .expect("Invalid day-first date regex")
            }),
            Self::DayMonthName => DAY_MONTH.get_or_init(|| {
                Regex::new(
                    r"(?i)\b(?P<d>\d{1,2})(?:st|nd|rd|th)?[\s\-/.]*(?P<mon>[a-z]{3,9})\.?,?[\s\-/.]*(?P<y>\d{4})\b",
                )
                .expect("Invalid day-month date regex")
            }),
            Self::MonthNameDay => MONTH_DAY.get_or_init(|| {
                Regex::new(
                    r"(?i)\b(?P<mon>[a-z]{3,9})\.?[\s\-/.]*(?P<d>\d{1,2})(?:st|nd|rd|th)?,?[\s\-/.]*(?P<y>\d{4})\b",
                )
                .expect("Invalid month-day date regex")
            }),
        }
    }

    /// All valid calendar dates this pattern finds in `text`, left to right.
    ///
    /// Matches that name an impossible date (31 February) are skipped.
    pub fn find_dates(self, text: &str) -> Vec<(NaiveDate, Range<usize>)> {
        self.regex()
            .captures_iter(text)
            .filter_map(|c| {
                let date = to_date(&c)?;
                Some((date, c.get(0)?.range()))
            })
            .collect()
    }
}

impl DateRange {
    /// Reads a start/end pair from `text`.
    ///
    /// Patterns are tried in priority order; the first one that yields two
    /// valid dates wins and its first two dates become the range.
    pub fn find(text: &str) -> Option<DateRange> {
        DatePattern::ALL.into_iter().find_map(|pattern| {
            let mut dates = pattern.find_dates(text).into_iter();
            let (start, r1) = dates.next()?;
            let (end, r2) = dates.next()?;
            Some(DateRange {
                start,
                end,
                pattern,
                ranges: [r1, r2],
            })
        })
    }
}

fn to_date(c: &Captures<'_>) -> Option<NaiveDate> {
    let year: i32 = c.name("y")?.as_str().parse().ok()?;
    let day: u32 = c.name("d")?.as_str().parse().ok()?;
    let month = match c.name("m") {
        Some(m) => m.as_str().parse().ok()?,
        None => month_from_name(c.name("mon")?.as_str())?,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Month number for a full or abbreviated (3+ letters) English month name.
fn month_from_name(name: &str) -> Option<u32> {
    let name = name.to_ascii_lowercase();
    if name.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|full| full.starts_with(&name))
        .map(|i| i as u32 + 1)
}
