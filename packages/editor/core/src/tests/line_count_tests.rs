use crate::metrics::{line_count, overflows, visible_height, LineMetrics};
use crate::types::Platform;
use pretty_assertions::assert_eq;

const MAC: f32 = Platform::MACOS_PADDING;

#[test]
fn test_single_line_height_is_one_line() {
    assert_eq!(line_count(20.0, 20.0, MAC), Some(1));
    assert_eq!(line_count(20.0, 20.0, 0.0), Some(1));
}

#[test]
fn test_padding_is_removed_from_both_heights() {
    // (40 - 17.667) / (20 - 17.667) = 9.57...
    assert_eq!(line_count(20.0, 40.0, MAC), Some(9));
}

#[test]
fn test_unpadded_platform_divides_directly() {
    assert_eq!(line_count(20.0, 60.0, 0.0), Some(3));
    assert_eq!(line_count(20.0, 59.9, 0.0), Some(2));
}

#[test]
fn test_short_content_reports_at_least_one_line() {
    assert_eq!(line_count(20.0, 0.0, 0.0), Some(1));
    assert_eq!(line_count(20.0, 5.0, MAC), Some(1));
}

#[test]
fn test_zero_reference_height_is_skipped() {
    assert_eq!(line_count(0.0, 40.0, 0.0), None);
    assert_eq!(line_count(0.0, 40.0, MAC), None);
}

#[test]
fn test_reference_not_taller_than_padding_is_skipped() {
    assert_eq!(line_count(MAC, 40.0, MAC), None);
    assert_eq!(line_count(10.0, 40.0, MAC), None);
}

#[test]
fn test_metrics_need_both_measurements() {
    let mut metrics = LineMetrics::default();
    assert_eq!(metrics.line_count(0.0), None);

    metrics.record_content(40.0);
    assert_eq!(metrics.line_count(0.0), None);

    metrics.record_reference(20.0);
    assert_eq!(metrics.line_count(0.0), Some(2));
}

#[test]
fn test_reference_measurement_is_idempotent() {
    let mut metrics = LineMetrics::default();

    assert!(metrics.record_reference(18.2));
    let first = metrics.reference_line_height;
    assert!(!metrics.record_reference(18.2));

    assert_eq!(metrics.reference_line_height, first);
}

#[test]
fn test_visible_height_caps_at_max() {
    assert_eq!(visible_height(80.0, None), 80.0);
    assert_eq!(visible_height(80.0, Some(100.0)), 80.0);
    assert_eq!(visible_height(180.0, Some(100.0)), 100.0);

    assert!(!overflows(80.0, None));
    assert!(!overflows(100.0, Some(100.0)));
    assert!(overflows(100.5, Some(100.0)));
}

#[test]
fn test_heights_carrying_the_inset_count_exact_lines() {
    // Layout adds P to both the reference and the content height.
    for reference in [14.5_f32, 18.2, 21.0] {
        let line = reference + MAC;
        assert_eq!(line_count(line, reference + MAC, MAC), Some(1));
        assert_eq!(line_count(line, reference * 3.0 + MAC, MAC), Some(3));
        assert_eq!(line_count(line, reference * 7.0 + MAC, MAC), Some(7));
    }
}
