//! Unit tests for series math helpers

use troyonix::common::math::{mean, trailing_means, wilder_smoothing};

#[test]
fn test_mean_of_empty_slice_is_none() {
    assert_eq!(mean(&[]), None);
    assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
}

#[test]
fn test_trailing_means_shrink_at_start() {
    let means = trailing_means(&[1.0, 2.0, 3.0, 4.0], 2);
    assert_eq!(means, vec![1.0, 1.5, 2.5, 3.5]);
}

#[test]
fn test_trailing_means_window_longer_than_series() {
    let means = trailing_means(&[2.0, 4.0, 6.0], 5);
    assert_eq!(means, vec![2.0, 3.0, 4.0]);
}

#[test]
fn test_trailing_means_zero_window() {
    assert!(trailing_means(&[1.0, 2.0], 0).is_empty());
}

#[test]
fn test_trailing_means_flat_series_is_exact() {
    let values = vec![100.0; 30];
    assert!(trailing_means(&values, 7).iter().all(|&m| m == 100.0));
    assert!(trailing_means(&values, 20).iter().all(|&m| m == 100.0));
}

#[test]
fn test_trailing_means_flat_inexact_prices_are_exact() {
    for price in [33.33, 0.1, 101.37] {
        let values = vec![price; 60];
        let short = trailing_means(&values, 20);
        let long = trailing_means(&values, 50);
        assert!(short.iter().all(|&m| m == price), "short mean drifted for {}", price);
        assert!(long.iter().all(|&m| m == price), "long mean drifted for {}", price);
    }
}

#[test]
fn test_trailing_means_flat_tail_after_move_is_exact() {
    let mut values = vec![1.0, 2.0];
    values.extend(vec![0.1; 5]);
    let means = trailing_means(&values, 3);
    assert_eq!(means[1], 1.5);
    assert!(means[4..].iter().all(|&m| m == 0.1));
}

#[test]
fn test_wilder_smoothing_reports_after_window() {
    let smoothed = wilder_smoothing(&[2.0, 4.0, 0.0], 2);
    assert_eq!(smoothed, vec![None, Some(3.0), Some(1.5)]);
}

#[test]
fn test_wilder_smoothing_uses_previous_average() {
    // A plain 2-wide rolling mean would give 5.0 at the end.
    let smoothed = wilder_smoothing(&[0.0, 0.0, 10.0, 0.0], 2);
    assert_eq!(smoothed[3], Some(2.5));
}

#[test]
fn test_wilder_smoothing_window_one_tracks_input() {
    let smoothed = wilder_smoothing(&[3.0, 1.0, 2.0], 1);
    assert_eq!(smoothed, vec![Some(3.0), Some(1.0), Some(2.0)]);
}

#[test]
fn test_wilder_smoothing_zero_window() {
    assert_eq!(wilder_smoothing(&[1.0, 2.0], 0), vec![None, None]);
}
