//! Screen attribute derivations
//!
//! The host reports raw display metrics (size in points plus scale factor);
//! everything here is a pure function over those values. Thresholds are the
//! fixed constants from [`crate::constants`].

use serde::{Deserialize, Serialize};

use crate::constants::{RETINA_SCALE, SCREEN_HEIGHT_PHONE_5};

/// Host-reported display metrics, in points plus a scale factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenMetrics {
    width: f64,
    height: f64,
    scale: f64,
}

impl ScreenMetrics {
    #[must_use]
    pub fn new(width: f64, height: f64, scale: f64) -> Self {
        Self { width, height, scale }
    }

    /// Reported size as a (width, height) pair in points
    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Portrait when the reported height is at least the width
    #[must_use]
    pub fn is_portrait(&self) -> bool {
        self.height >= self.width
    }

    #[must_use]
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    /// Retina when the scale factor reaches 2.0
    #[must_use]
    pub fn has_retina_display(&self) -> bool {
        self.scale >= RETINA_SCALE
    }

    /// True when the larger dimension equals the iPhone 5 screen height.
    /// The threshold is a fixed constant; no other heights qualify. The
    /// original contract compared the reported height in portrait-fixed
    /// coordinates; taking the larger dimension generalizes that to
    /// metrics reported in either orientation.
    #[must_use]
    pub fn has_four_inch_display(&self) -> bool {
        self.width.max(self.height) == SCREEN_HEIGHT_PHONE_5
    }
}
