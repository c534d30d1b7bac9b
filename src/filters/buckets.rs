//! Named numeric buckets for range-style filtering
//!
//! Page-count ranges and publication centuries are each defined by a single
//! ordered table of `(tag, bounds)` pairs. Matching is a table lookup, so every
//! boundary lives in exactly one place.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inclusive numeric bounds; `None` leaves that side open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl Bounds {
    const fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Self { min, max }
    }

    /// Check whether `value` lies within these bounds
    #[must_use]
    pub const fn contains(self, value: i64) -> bool {
        let above_min = match self.min {
            Some(min) => value >= min,
            None => true,
        };
        let below_max = match self.max {
            Some(max) => value <= max,
            None => true,
        };
        above_min && below_max
    }
}

/// Page-count bucket
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
pub enum PageRange {
    #[serde(rename = "1-100")]
    #[value(name = "1-100")]
    UpTo100,
    #[serde(rename = "101-200")]
    #[value(name = "101-200")]
    From101To200,
    #[serde(rename = "201-300")]
    #[value(name = "201-300")]
    From201To300,
    #[serde(rename = "301+")]
    #[value(name = "301+")]
    Over300,
}

/// The lowest bucket has no lower bound, so zero and negative page counts
/// fall into `1-100`.
const PAGE_RANGE_BUCKETS: [(PageRange, Bounds); 4] = [
    (PageRange::UpTo100, Bounds::new(None, Some(100))),
    (PageRange::From101To200, Bounds::new(Some(101), Some(200))),
    (PageRange::From201To300, Bounds::new(Some(201), Some(300))),
    (PageRange::Over300, Bounds::new(Some(301), None)),
];

impl PageRange {
    /// All page ranges in display order
    pub const ALL: [Self; 4] = [
        Self::UpTo100,
        Self::From101To200,
        Self::From201To300,
        Self::Over300,
    ];

    /// Short label used on the command line and in JSON
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UpTo100 => "1-100",
            Self::From101To200 => "101-200",
            Self::From201To300 => "201-300",
            Self::Over300 => "301+",
        }
    }

    /// Human-readable option text
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::UpTo100 => "1-100 pages",
            Self::From101To200 => "101-200 pages",
            Self::From201To300 => "201-300 pages",
            Self::Over300 => "301+ pages",
        }
    }

    /// Bounds of this bucket; the table is ordered by variant
    #[must_use]
    pub const fn bounds(self) -> Bounds {
        PAGE_RANGE_BUCKETS[self as usize].1
    }

    /// Check whether a page count falls into this bucket
    #[must_use]
    pub fn matches(self, pages: i64) -> bool {
        self.bounds().contains(pages)
    }

    /// Find the bucket a page count belongs to
    ///
    /// Every integer belongs to exactly one page range.
    #[must_use]
    pub fn bucket_for(pages: i64) -> Option<Self> {
        classify(&PAGE_RANGE_BUCKETS, pages)
    }
}

/// Publication-century bucket
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
pub enum Century {
    #[serde(rename = "16th")]
    #[value(name = "16th")]
    Sixteenth,
    #[serde(rename = "17th")]
    #[value(name = "17th")]
    Seventeenth,
    #[serde(rename = "18th")]
    #[value(name = "18th")]
    Eighteenth,
    #[serde(rename = "19th")]
    #[value(name = "19th")]
    Nineteenth,
    #[serde(rename = "20th")]
    #[value(name = "20th")]
    Twentieth,
    #[serde(rename = "21st")]
    #[value(name = "21st")]
    TwentyFirst,
}

/// Years up to 1500 belong to no bucket.
const CENTURY_BUCKETS: [(Century, Bounds); 6] = [
    (Century::Sixteenth, Bounds::new(Some(1501), Some(1600))),
    (Century::Seventeenth, Bounds::new(Some(1601), Some(1700))),
    (Century::Eighteenth, Bounds::new(Some(1701), Some(1800))),
    (Century::Nineteenth, Bounds::new(Some(1801), Some(1900))),
    (Century::Twentieth, Bounds::new(Some(1901), Some(2000))),
    (Century::TwentyFirst, Bounds::new(Some(2001), None)),
];

impl Century {
    /// All centuries in display order
    pub const ALL: [Self; 6] = [
        Self::Sixteenth,
        Self::Seventeenth,
        Self::Eighteenth,
        Self::Nineteenth,
        Self::Twentieth,
        Self::TwentyFirst,
    ];

    /// Short label used on the command line and in JSON
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sixteenth => "16th",
            Self::Seventeenth => "17th",
            Self::Eighteenth => "18th",
            Self::Nineteenth => "19th",
            Self::Twentieth => "20th",
            Self::TwentyFirst => "21st",
        }
    }

    /// Human-readable option text
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Sixteenth => "16th century",
            Self::Seventeenth => "17th century",
            Self::Eighteenth => "18th century",
            Self::Nineteenth => "19th century",
            Self::Twentieth => "20th century",
            Self::TwentyFirst => "21st century",
        }
    }

    /// Bounds of this bucket; the table is ordered by variant
    #[must_use]
    pub const fn bounds(self) -> Bounds {
        CENTURY_BUCKETS[self as usize].1
    }

    /// Check whether a publication year falls into this century
    #[must_use]
    pub fn matches(self, year: i64) -> bool {
        self.bounds().contains(year)
    }

    /// Find the century a year belongs to, if any
    #[must_use]
    pub fn bucket_for(year: i64) -> Option<Self> {
        classify(&CENTURY_BUCKETS, year)
    }
}

fn classify<T: Copy>(table: &[(T, Bounds)], value: i64) -> Option<T> {
    table
        .iter()
        .find(|(_, bounds)| bounds.contains(value))
        .map(|(tag, _)| *tag)
}

/// Error returned when a bucket label is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseBucketError {
    kind: &'static str,
    value: String,
    expected: String,
}

impl FromStr for PageRange {
    type Err = ParseBucketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|range| range.label() == s.trim())
            .ok_or_else(|| ParseBucketError {
                kind: "page range",
                value: s.to_string(),
                expected: Self::ALL.map(Self::label).join(", "),
            })
    }
}

impl FromStr for Century {
    type Err = ParseBucketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|century| century.label() == s.trim())
            .ok_or_else(|| ParseBucketError {
                kind: "century",
                value: s.to_string(),
                expected: Self::ALL.map(Self::label).join(", "),
            })
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Century {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
