//! Scroll-scrubbed parallax offsets

/// Default speed factor
pub const DEFAULT_SPEED: f64 = 0.5;

/// Parallax binding configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxDirective {
    pub speed_factor: f64,
}

impl Default for ParallaxDirective {
    fn default() -> Self {
        Self {
            speed_factor: DEFAULT_SPEED,
        }
    }
}

impl ParallaxDirective {
    pub fn new(speed_factor: f64) -> Self {
        Self { speed_factor }
    }

    /// Vertical offset (percent of the element's height) at full progress
    pub fn max_offset_percent(&self) -> f64 {
        -50.0 * self.speed_factor
    }

    /// Offset for a measured element rectangle
    pub fn offset_percent(&self, rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
        scroll_progress(rect_top, rect_height, viewport_height) * self.max_offset_percent()
    }

    /// Inline style for the transformed inner layer
    pub fn style(&self, rect_top: f64, rect_height: f64, viewport_height: f64) -> String {
        format!(
            "transform: translate3d(0px, {}%, 0px);",
            self.offset_percent(rect_top, rect_height, viewport_height)
        )
    }
}

/// Fraction of the element's pass through the viewport
///
/// 0 when the element's top meets the viewport bottom, 1 when its bottom meets
/// the viewport top.
pub fn scroll_progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    let span = viewport_height + rect_height;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect_top) / span).clamp(0.0, 1.0)
}
