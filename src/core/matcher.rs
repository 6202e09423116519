use crate::config::MatchingSettings;
use crate::core::{distance::nearest_candidate, filters::filter_by_magnitude};
use crate::models::{MatchResult, Point, SourceMatch};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during matching or filtering
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("match {match_index} references {side} index {index}, but the {side} magnitude table has {len} entries")]
    IndexOutOfRange {
        match_index: usize,
        side: &'static str,
        index: usize,
        len: usize,
    },
}

pub(crate) fn validate_threshold(value: f64, name: &str) -> Result<(), MatchError> {
    if !value.is_finite() || value < 0.0 {
        return Err(MatchError::InvalidInput(format!(
            "{} threshold must be a non-negative finite number, got {}",
            name, value
        )));
    }
    Ok(())
}

fn validate_points(points: &[Point], set: &str) -> Result<(), MatchError> {
    for (i, p) in points.iter().enumerate() {
        if !p.is_finite() {
            return Err(MatchError::InvalidInput(format!(
                "{} point {} has non-finite coordinates ({}, {})",
                set, i, p.x, p.y
            )));
        }
    }
    Ok(())
}

/// Match every reference source against its nearest candidate
///
/// Brute-force nearest-neighbor search: every reference/candidate pair is
/// compared, so the cost is O(n*m). Source lists for a single field are
/// small (tens to low thousands of detections), which keeps this exhaustive
/// scan well within budget; a spatial index could replace the inner search
/// without changing the contract.
///
/// A reference source is matched when its nearest candidate lies within
/// `distance_threshold` (inclusive); otherwise its index is reported in
/// `unmatched`. A candidate may be claimed by more than one reference
/// source; the pairing is not one-to-one.
///
/// # Errors
/// `MatchError::InvalidInput` when any coordinate is NaN or infinite, or the
/// threshold is negative or non-finite. Validation runs before any
/// comparisons, so no partial result is ever produced.
pub fn find_correspondences(
    reference: &[Point],
    candidates: &[Point],
    distance_threshold: f64,
) -> Result<MatchResult, MatchError> {
    validate_threshold(distance_threshold, "distance")?;
    validate_points(reference, "reference")?;
    validate_points(candidates, "candidate")?;

    let mut matches = Vec::new();
    let mut unmatched = Vec::new();

    for (i, point) in reference.iter().enumerate() {
        match nearest_candidate(point, candidates) {
            Some((j, separation)) if separation <= distance_threshold => {
                matches.push(SourceMatch {
                    reference: i,
                    candidate: j,
                    separation,
                });
            }
            _ => unmatched.push(i),
        }
    }

    Ok(MatchResult {
        matches,
        unmatched,
        total_candidates: candidates.len(),
    })
}

/// Matching pipeline orchestrator
///
/// # Pipeline Stages
/// 1. Nearest-neighbor correspondence search
/// 2. Optional magnitude-difference filter
#[derive(Debug, Clone)]
pub struct Matcher {
    settings: MatchingSettings,
}

impl Matcher {
    pub fn new(settings: MatchingSettings) -> Self {
        Self { settings }
    }

    /// Matcher with only a positional threshold, no magnitude filtering
    pub fn with_distance_threshold(distance_threshold: f64) -> Self {
        Self {
            settings: MatchingSettings {
                distance_threshold,
                magnitude_threshold: None,
            },
        }
    }

    pub fn settings(&self) -> &MatchingSettings {
        &self.settings
    }

    /// Run the full pipeline over two source lists
    ///
    /// Magnitude tables are consulted only when a magnitude threshold is
    /// configured; both tables must then be supplied, parallel to their
    /// source lists.
    ///
    /// # Arguments
    /// * `reference` - Primary source list; its indices identify every match
    /// * `candidates` - Source list searched for nearest neighbors
    /// * `reference_mags` - Magnitudes parallel to `reference`, if filtering
    /// * `candidate_mags` - Magnitudes parallel to `candidates`, if filtering
    pub fn run(
        &self,
        reference: &[Point],
        candidates: &[Point],
        reference_mags: Option<&[f64]>,
        candidate_mags: Option<&[f64]>,
    ) -> Result<MatchResult, MatchError> {
        let mut result =
            find_correspondences(reference, candidates, self.settings.distance_threshold)?;

        debug!(
            matched = result.matches.len(),
            unmatched = result.unmatched.len(),
            total_candidates = result.total_candidates,
            "correspondence search complete"
        );

        if let Some(magnitude_threshold) = self.settings.magnitude_threshold {
            let (ref_mags, cand_mags) = match (reference_mags, candidate_mags) {
                (Some(r), Some(c)) => (r, c),
                _ => {
                    return Err(MatchError::InvalidInput(
                        "magnitude threshold is configured but magnitude tables were not supplied"
                            .to_string(),
                    ))
                }
            };

            let before = result.matches.len();
            result.matches =
                filter_by_magnitude(&result.matches, ref_mags, cand_mags, magnitude_threshold)?;

            debug!(
                kept = result.matches.len(),
                rejected = before - result.matches.len(),
                "magnitude filter complete"
            );
        }

        Ok(result)
    }
}
