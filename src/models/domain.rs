use serde::{Deserialize, Serialize};

/// A detected source position on the detector, in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite (no NaN, no infinities)
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A matched pair of sources: one index into the reference list, one into
/// the candidate list, plus the separation at which the pairing was accepted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourceMatch {
    /// Index into the reference source list
    pub reference: usize,
    /// Index into the candidate source list
    pub candidate: usize,
    /// Euclidean separation in pixels
    pub separation: f64,
}

/// Result of the matching process
///
/// `matches` and `unmatched` are both ascending in reference index and
/// together cover every reference index exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matches: Vec<SourceMatch>,
    pub unmatched: Vec<usize>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}
