//! Precomputed station-to-station transit segments.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// A precomputed metro trip between two stations.
///
/// Segments are directional: `A -> B` and `B -> A` are separate entries
/// and either may be missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitSegment {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub time_mins: f64,
    pub same_line: bool,

    /// Free-text interchange description. With two transfers it may be
    /// `"line-sequence|interchange-detail"`.
    pub interchange: String,

    pub transfer_count: u32,
    pub start_line: String,
    pub end_line: String,
}

impl TransitSegment {
    /// Classify the segment for display.
    pub fn summary(&self) -> RouteSummary<'_> {
        if self.same_line {
            return RouteSummary::SameLine {
                line: &self.start_line,
            };
        }
        match self.transfer_count {
            2 => match self.interchange.split_once('|') {
                Some((sequence, detail)) => RouteSummary::DoubleTransfer {
                    line_sequence: sequence,
                    detail: Some(detail),
                },
                None => RouteSummary::DoubleTransfer {
                    line_sequence: &self.interchange,
                    detail: None,
                },
            },
            1 => RouteSummary::SingleTransfer {
                interchange: &self.interchange,
            },
            _ => RouteSummary::DifferentLines {
                from_line: &self.start_line,
                to_line: &self.end_line,
            },
        }
    }
}

/// Route-type classification of a [`TransitSegment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteSummary<'a> {
    SameLine {
        line: &'a str,
    },
    SingleTransfer {
        interchange: &'a str,
    },
    DoubleTransfer {
        line_sequence: &'a str,
        detail: Option<&'a str>,
    },
    DifferentLines {
        from_line: &'a str,
        to_line: &'a str,
    },
}

impl fmt::Display for RouteSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteSummary::SameLine { line } => write!(f, "Same Line ({line})"),
            RouteSummary::SingleTransfer { interchange } => {
                write!(f, "Single Transfer: {interchange}")
            }
            RouteSummary::DoubleTransfer { line_sequence, .. } => {
                write!(f, "Double Transfer: {line_sequence}")
            }
            RouteSummary::DifferentLines { from_line, to_line } => {
                write!(f, "Different Lines ({from_line} → {to_line})")
            }
        }
    }
}

/// Exact-match lookup table of transit segments keyed by ordered pair.
#[derive(Debug, Clone, Default)]
pub struct TransitTable {
    segments: HashMap<(String, String), TransitSegment>,
}

impl TransitTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a segment, replacing any existing entry for the same ordered pair.
    pub fn insert(&mut self, segment: TransitSegment) {
        self.segments
            .insert((segment.from.clone(), segment.to.clone()), segment);
    }

    /// Look up the segment from `from` to `to`. No reverse fallback.
    pub fn get(&self, from: &str, to: &str) -> Option<&TransitSegment> {
        self.segments.get(&(from.to_string(), to.to_string()))
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromIterator<TransitSegment> for TransitTable {
    fn from_iter<T: IntoIterator<Item = TransitSegment>>(iter: T) -> Self {
        let mut table = Self::new();
        for segment in iter {
            table.insert(segment);
        }
        table
    }
}
