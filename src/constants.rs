//! Constants used throughout the library
//!
//! This module centralizes the screen-resolution and time constants so the
//! device and date helpers agree on a single set of values.

// Time constants (seconds)
pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;
pub const HOURS_PER_DAY: f64 = 24.0;
pub const SECONDS_PER_DAY: f64 = SECONDS_PER_HOUR * HOURS_PER_DAY;

// Screen resolutions (points)
/// iPhone screen width in points
pub const SCREEN_WIDTH_PHONE: f64 = 320.0;
/// iPhone screen height in points (3.5-inch displays)
pub const SCREEN_HEIGHT_PHONE: f64 = 480.0;
/// iPhone 5 screen height in points (4-inch displays)
pub const SCREEN_HEIGHT_PHONE_5: f64 = 568.0;
/// Extra rows gained by the 4-inch display
pub const SCREEN_HEIGHT_OFFSET_PHONE_5: f64 = SCREEN_HEIGHT_PHONE_5 - SCREEN_HEIGHT_PHONE;

/// iPad screen width in points
pub const SCREEN_WIDTH_PAD: f64 = 768.0;
/// iPad screen height in points
pub const SCREEN_HEIGHT_PAD: f64 = 1024.0;

/// Scale factor at or above which a display counts as Retina
pub const RETINA_SCALE: f64 = 2.0;
