//! Responsive scaling from design units to window pixels
//!
//! All sizes in the UI are authored against a 393×852 reference screen
//! ("design units"). The functions here convert them for the current
//! `Viewport`, which the application updates whenever the window is
//! resized or moved to a display with a different scale factor.

/// Reference width the layout was designed against
pub const BASE_WIDTH: f32 = 393.0;

/// Reference height the layout was designed against
pub const BASE_HEIGHT: f32 = 852.0;

/// Widths below this are treated as compact (smaller fonts and icons)
pub const COMPACT_WIDTH: f32 = 375.0;

/// Widths at or above this are treated as large (tablet class)
pub const LARGE_WIDTH: f32 = 768.0;

/// Default damping for `moderate_scale`
pub const DEFAULT_MODERATE_FACTOR: f32 = 0.5;

/// Current window dimensions in logical units plus pixel density
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Logical width
    pub width: f32,
    /// Logical height
    pub height: f32,
    /// Physical pixels per logical unit
    pub scale_factor: f32,
}

impl Default for Viewport {
    /// The reference screen at density 1
    fn default() -> Self {
        Self::new(BASE_WIDTH, BASE_HEIGHT)
    }
}

impl Viewport {
    /// Create a viewport at density 1
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            scale_factor: 1.0,
        }
    }

    /// Same viewport with a different pixel density
    pub fn with_scale_factor(self, scale_factor: f32) -> Self {
        Self {
            scale_factor,
            ..self
        }
    }

    /// Same density, new logical size
    pub fn resized(self, width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    /// Round a logical value to the nearest physical pixel
    pub fn round_to_nearest_pixel(&self, value: f32) -> f32 {
        let density = if self.scale_factor.is_finite() && self.scale_factor > 0.0 {
            self.scale_factor
        } else {
            1.0
        };
        (value * density).round() / density
    }

    /// `percent`% of the window width, pixel aligned
    pub fn width_percent(&self, percent: f32) -> f32 {
        self.round_to_nearest_pixel(self.width * percent / 100.0)
    }

    /// `percent`% of the window height, pixel aligned
    pub fn height_percent(&self, percent: f32) -> f32 {
        self.round_to_nearest_pixel(self.height * percent / 100.0)
    }

    /// Linear scaling by width relative to `BASE_WIDTH`
    pub fn scale_by_width(&self, size: f32) -> f32 {
        size * (self.width / BASE_WIDTH)
    }

    /// Linear scaling by height relative to `BASE_HEIGHT`
    pub fn scale_by_height(&self, size: f32) -> f32 {
        size * (self.height / BASE_HEIGHT)
    }

    /// Damped width scaling with the default factor of 0.5
    ///
    /// This is the sizing function used for almost every font, padding and
    /// radius in the UI.
    pub fn moderate_scale(&self, size: f32) -> f32 {
        self.moderate_scale_by(size, DEFAULT_MODERATE_FACTOR)
    }

    /// Damped width scaling
    ///
    /// `factor = 0` returns `size` unchanged, `factor = 1` is the same as
    /// `scale_by_width`. Anything in between blends the two linearly.
    pub fn moderate_scale_by(&self, size: f32, factor: f32) -> f32 {
        size + (self.scale_by_width(size) - size) * factor
    }

    /// Width scaling for font sizes, snapped to whole pixels
    pub fn font_scale(&self, size: f32) -> f32 {
        self.round_to_nearest_pixel(self.scale_by_width(size)).round()
    }

    /// Narrow phone-class window
    pub fn is_compact(&self) -> bool {
        self.width < COMPACT_WIDTH
    }

    /// Tablet-class window
    pub fn is_large(&self) -> bool {
        self.width >= LARGE_WIDTH
    }

    /// Choose between a compact and a regular design size, then scale it
    pub fn pick(&self, compact: f32, regular: f32) -> f32 {
        if self.is_compact() {
            self.moderate_scale(compact)
        } else {
            self.moderate_scale(regular)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_moderate_scale_identity_at_base_width() {
        let viewport = Viewport::new(BASE_WIDTH, 700.0);
        for size in [1.0, 12.0, 14.0, 48.0, 300.0] {
            assert!((viewport.moderate_scale(size) - size).abs() < EPSILON);
        }
    }

    #[test]
    fn test_moderate_scale_monotonic_in_width() {
        let size = 14.0;
        let mut previous = f32::MIN;
        for width in (1..=2000).map(|w| w as f32) {
            let value = Viewport::new(width, BASE_HEIGHT).moderate_scale(size);
            assert!(value >= previous, "decreased at width {}", width);
            previous = value;
        }
    }

    #[test]
    fn test_moderate_scale_bounded_by_factor() {
        for width in [320.0, 375.0, 393.0, 430.0, 1024.0] {
            let viewport = Viewport::new(width, BASE_HEIGHT);
            let size = 20.0;
            let linear = viewport.scale_by_width(size);
            let (low, high) = if linear < size { (linear, size) } else { (size, linear) };

            for step in 0..=10 {
                let factor = step as f32 / 10.0;
                let value = viewport.moderate_scale_by(size, factor);
                assert!(value >= low - EPSILON && value <= high + EPSILON);
            }

            assert!((viewport.moderate_scale_by(size, 0.0) - size).abs() < EPSILON);
            assert!((viewport.moderate_scale_by(size, 1.0) - linear).abs() < EPSILON);
        }
    }

    #[test]
    fn test_percent_rounds_to_device_pixels() {
        let viewport = Viewport::new(393.0, 852.0).with_scale_factor(3.0);
        // 393 * 0.33 = 129.69 → 389.07 physical px → 389 / 3
        assert!((viewport.width_percent(33.0) - 389.0 / 3.0).abs() < EPSILON);
        assert!((viewport.height_percent(50.0) - 426.0).abs() < EPSILON);
    }

    #[test]
    fn test_invalid_density_does_not_produce_nan() {
        let viewport = Viewport::new(400.0, 800.0).with_scale_factor(0.0);
        assert_eq!(viewport.width_percent(50.0), 200.0);
    }

    #[test]
    fn test_height_scaling() {
        let viewport = Viewport::new(BASE_WIDTH, BASE_HEIGHT * 2.0);
        assert!((viewport.scale_by_height(10.0) - 20.0).abs() < EPSILON);
    }

    #[test]
    fn test_device_classes() {
        assert!(Viewport::new(360.0, 640.0).is_compact());
        assert!(!Viewport::new(375.0, 667.0).is_compact());
        assert!(!Viewport::new(767.0, 1024.0).is_large());
        assert!(Viewport::new(768.0, 1024.0).is_large());
    }

    #[test]
    fn test_pick_uses_compact_size_on_narrow_windows() {
        let narrow = Viewport::new(BASE_WIDTH * 0.9, BASE_HEIGHT);
        let regular = Viewport::new(BASE_WIDTH, BASE_HEIGHT);
        assert!((narrow.pick(26.0, 30.0) - narrow.moderate_scale(26.0)).abs() < EPSILON);
        assert!((regular.pick(26.0, 30.0) - 30.0).abs() < EPSILON);
    }

    #[test]
    fn test_font_scale_is_whole_pixels() {
        let viewport = Viewport::new(414.0, 896.0).with_scale_factor(2.0);
        let size = viewport.font_scale(13.0);
        assert_eq!(size, size.round());
    }
}
