use crate::core::matcher::{validate_threshold, MatchError};
use crate::models::SourceMatch;

/// Reject matches whose magnitudes disagree by more than the threshold
///
/// Each surviving match keeps its position relative to the others; a fresh
/// vector is returned and the input is never mutated. The comparison is
/// `|reference_mag - candidate_mag| > magnitude_threshold`, so a difference
/// exactly at the threshold survives.
///
/// Each magnitude table is indexed with its own side of the match pair:
/// `reference_mags[m.reference]` against `candidate_mags[m.candidate]`.
///
/// # Errors
/// * `MatchError::IndexOutOfRange` when a match indexes past either table
/// * `MatchError::InvalidInput` for a negative/non-finite threshold, or a
///   non-finite magnitude value consulted by some match
pub fn filter_by_magnitude(
    matches: &[SourceMatch],
    reference_mags: &[f64],
    candidate_mags: &[f64],
    magnitude_threshold: f64,
) -> Result<Vec<SourceMatch>, MatchError> {
    validate_threshold(magnitude_threshold, "magnitude")?;

    let mut kept = Vec::with_capacity(matches.len());

    for (k, m) in matches.iter().enumerate() {
        let ref_mag = *reference_mags.get(m.reference).ok_or_else(|| {
            MatchError::IndexOutOfRange {
                match_index: k,
                side: "reference",
                index: m.reference,
                len: reference_mags.len(),
            }
        })?;
        let cand_mag = *candidate_mags.get(m.candidate).ok_or_else(|| {
            MatchError::IndexOutOfRange {
                match_index: k,
                side: "candidate",
                index: m.candidate,
                len: candidate_mags.len(),
            }
        })?;

        if !ref_mag.is_finite() || !cand_mag.is_finite() {
            return Err(MatchError::InvalidInput(format!(
                "match {} consults non-finite magnitudes ({}, {})",
                k, ref_mag, cand_mag
            )));
        }

        if (ref_mag - cand_mag).abs() <= magnitude_threshold {
            kept.push(*m);
        }
    }

    Ok(kept)
}
