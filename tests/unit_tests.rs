// Unit tests for starmatch

use starmatch::core::{
    distance::{euclidean, nearest_candidate},
    filters::filter_by_magnitude,
    matcher::find_correspondences,
};
use starmatch::{MatchError, Point, SourceMatch};

#[test]
fn test_euclidean_axis_aligned() {
    let a = Point::new(2.0, 3.0);
    let b = Point::new(2.0, 8.0);
    assert!((euclidean(&a, &b) - 5.0).abs() < 1e-12);
}

#[test]
fn test_euclidean_symmetric() {
    let a = Point::new(-1.5, 4.0);
    let b = Point::new(3.25, -7.0);
    assert_eq!(euclidean(&a, &b), euclidean(&b, &a));
}

#[test]
fn test_nearest_candidate_scans_whole_list() {
    let target = Point::new(100.0, 100.0);
    let candidates: Vec<Point> = (0..50)
        .map(|i| Point::new(i as f64 * 10.0, i as f64 * 10.0))
        .collect();

    let (idx, _) = nearest_candidate(&target, &candidates).unwrap();
    assert_eq!(idx, 10);
}

#[test]
fn test_match_two_exposures() {
    let reference = vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
    let candidates = vec![Point::new(0.5, 0.5), Point::new(20.0, 20.0)];

    let result = find_correspondences(&reference, &candidates, 1.0).unwrap();

    assert_eq!(result.matches.len(), 1);
    assert_eq!(
        (result.matches[0].reference, result.matches[0].candidate),
        (0, 0)
    );
    assert_eq!(result.unmatched, vec![1]);
}

#[test]
fn test_match_against_empty_candidate_list() {
    let reference = vec![Point::new(0.0, 0.0)];

    let result = find_correspondences(&reference, &[], 1.0).unwrap();

    assert!(result.matches.is_empty());
    assert_eq!(result.unmatched, vec![0]);
}

#[test]
fn test_zero_threshold_requires_coincidence() {
    let reference = vec![Point::new(1.0, 1.0), Point::new(5.0, 5.0)];
    let candidates = vec![Point::new(1.0, 1.0), Point::new(5.1, 5.0)];

    let result = find_correspondences(&reference, &candidates, 0.0).unwrap();

    assert_eq!(result.matches.len(), 1);
    assert_eq!(result.matches[0].reference, 0);
    assert_eq!(result.matches[0].separation, 0.0);
    assert_eq!(result.unmatched, vec![1]);
}

#[test]
fn test_equidistant_references_share_a_candidate() {
    // Both reference sources sit at exactly the threshold from the lone
    // candidate; ties are not deduplicated
    let reference = vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0)];
    let candidates = vec![Point::new(1.0, 0.0)];

    let result = find_correspondences(&reference, &candidates, 1.0).unwrap();

    assert_eq!(result.matches.len(), 2);
    assert!(result.matches.iter().all(|m| m.candidate == 0));
}

#[test]
fn test_infinite_coordinate_rejected_before_matching() {
    let reference = vec![Point::new(0.0, f64::NEG_INFINITY)];
    let candidates = vec![Point::new(0.0, 0.0)];

    let err = find_correspondences(&reference, &candidates, 1.0).unwrap_err();
    assert!(matches!(err, MatchError::InvalidInput(_)));
}

#[test]
fn test_nan_threshold_rejected() {
    let err = find_correspondences(&[], &[], f64::NAN).unwrap_err();
    assert!(matches!(err, MatchError::InvalidInput(_)));
}

#[test]
fn test_magnitude_filter_basic() {
    let matches = vec![
        SourceMatch {
            reference: 0,
            candidate: 0,
            separation: 0.1,
        },
        SourceMatch {
            reference: 1,
            candidate: 1,
            separation: 0.1,
        },
    ];
    let reference_mags = [10.0, 12.0];
    let candidate_mags = [10.1, 14.0];

    let kept = filter_by_magnitude(&matches, &reference_mags, &candidate_mags, 0.5).unwrap();

    assert_eq!(kept.len(), 1);
    assert_eq!((kept[0].reference, kept[0].candidate), (0, 0));
}

#[test]
fn test_magnitude_filter_idempotent() {
    let matches = vec![
        SourceMatch {
            reference: 0,
            candidate: 1,
            separation: 0.2,
        },
        SourceMatch {
            reference: 1,
            candidate: 0,
            separation: 0.3,
        },
        SourceMatch {
            reference: 2,
            candidate: 2,
            separation: 0.4,
        },
    ];
    let reference_mags = [10.0, 11.0, 18.0];
    let candidate_mags = [11.2, 10.3, 12.0];

    let once = filter_by_magnitude(&matches, &reference_mags, &candidate_mags, 0.5).unwrap();
    let twice = filter_by_magnitude(&once, &reference_mags, &candidate_mags, 0.5).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_magnitude_filter_out_of_range_index() {
    let matches = vec![SourceMatch {
        reference: 0,
        candidate: 9,
        separation: 0.0,
    }];

    let err = filter_by_magnitude(&matches, &[10.0], &[10.0], 1.0).unwrap_err();
    assert!(matches!(err, MatchError::IndexOutOfRange { .. }));
}

#[test]
fn test_source_list_roundtrip_through_json() {
    // Upstream detection stages hand source tables over as JSON
    let json = r#"[{"x": 101.25, "y": 47.5}, {"x": 12.0, "y": 350.75}]"#;
    let reference: Vec<Point> = serde_json::from_str(json).unwrap();
    let candidates = vec![Point::new(101.5, 47.25), Point::new(300.0, 300.0)];

    let result = find_correspondences(&reference, &candidates, 1.0).unwrap();

    assert_eq!(result.matches.len(), 1);
    assert_eq!(result.unmatched, vec![1]);
}
