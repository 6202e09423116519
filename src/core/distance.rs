use crate::models::Point;

/// Calculate the Euclidean separation between two detector positions
///
/// # Arguments
/// * `a` - First position in pixel coordinates
/// * `b` - Second position in pixel coordinates
///
/// # Returns
/// Separation in pixels
#[inline]
pub fn euclidean(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Find the candidate closest to `point`
///
/// Exhaustive scan over the candidate list. When several candidates tie for
/// the minimum separation, the lowest index wins, so results are
/// reproducible for a fixed input ordering.
///
/// # Returns
/// `Some((index, separation))`, or `None` when `candidates` is empty
pub fn nearest_candidate(point: &Point, candidates: &[Point]) -> Option<(usize, f64)> {
    let mut best_idx = None;
    let mut best_sep = f64::INFINITY;

    for (j, cand) in candidates.iter().enumerate() {
        let sep = euclidean(point, cand);
        // Strict < keeps the earliest index on ties
        if sep < best_sep {
            best_sep = sep;
            best_idx = Some(j);
        }
    }

    best_idx.map(|j| (j, best_sep))
}
