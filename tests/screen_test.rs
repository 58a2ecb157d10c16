use utilkit::constants::{
    SCREEN_HEIGHT_PAD, SCREEN_HEIGHT_PHONE, SCREEN_HEIGHT_PHONE_5, SCREEN_WIDTH_PAD, SCREEN_WIDTH_PHONE,
};
use utilkit::ScreenMetrics;

#[test]
fn test_size_accessors() {
    let metrics = ScreenMetrics::new(SCREEN_WIDTH_PHONE, SCREEN_HEIGHT_PHONE, 2.0);
    assert_eq!(metrics.size(), (320.0, 480.0));
    assert_eq!(metrics.width(), 320.0);
    assert_eq!(metrics.height(), 480.0);
    assert_eq!(metrics.scale(), 2.0);
}

#[test]
fn test_orientation() {
    let portrait = ScreenMetrics::new(SCREEN_WIDTH_PAD, SCREEN_HEIGHT_PAD, 1.0);
    assert!(portrait.is_portrait());
    assert!(!portrait.is_landscape());

    let landscape = ScreenMetrics::new(SCREEN_HEIGHT_PAD, SCREEN_WIDTH_PAD, 1.0);
    assert!(landscape.is_landscape());
    assert!(!landscape.is_portrait());
}

#[test]
fn test_retina_threshold() {
    assert!(!ScreenMetrics::new(320.0, 480.0, 1.0).has_retina_display());
    assert!(ScreenMetrics::new(320.0, 480.0, 2.0).has_retina_display());
    assert!(ScreenMetrics::new(320.0, 568.0, 3.0).has_retina_display());
}

#[test]
fn test_four_inch_display_is_exact_height_match() {
    assert!(ScreenMetrics::new(SCREEN_WIDTH_PHONE, SCREEN_HEIGHT_PHONE_5, 2.0).has_four_inch_display());
    assert!(!ScreenMetrics::new(SCREEN_WIDTH_PHONE, SCREEN_HEIGHT_PHONE, 2.0).has_four_inch_display());
    assert!(!ScreenMetrics::new(SCREEN_WIDTH_PAD, SCREEN_HEIGHT_PAD, 2.0).has_four_inch_display());
    // Close is not enough: the threshold is an exact constant.
    assert!(!ScreenMetrics::new(SCREEN_WIDTH_PHONE, 567.9, 2.0).has_four_inch_display());
}
